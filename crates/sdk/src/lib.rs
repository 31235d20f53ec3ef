// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HiEx SDK - Client library for the HiEx exchange API
//!
//! This crate provides typed client interfaces over the signed envelope of
//! `hiex_protocol`: an async `Client`, a blocking `SyncClient`, records for
//! every endpoint, user session handles and webhook parsing.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads (`SyncClient` owns its runtime)
//! - No global state
//! - Configuration is only read from the environment on request

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod notification;
pub mod requests;
pub mod session;
pub mod transport;
pub mod types;

pub use client::{Client, SyncClient};
pub use config::ClientConfig;
pub use error::{ClientError, TransportError};
pub use hiex_protocol::{
	ApiVersion, CallOptions, Credentials, Field, Map, Params, ProtocolError, RawResponse,
	ResponseValidator, SignedRequest, Value,
};
pub use notification::{Notification, parse_notification};
pub use requests::{
	ApplicationUpdate, ExchangeFilter, NewExchange, PairSettings, Range, UserLookup, UserUpdate,
};
pub use session::{AuthFlow, ExchangeHandle, UserSession};
pub use transport::{HttpTransport, Transport};
pub use types::*;
