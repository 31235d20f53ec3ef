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

//! HiEx Protocol - request signing and response verification
//!
//! This crate owns the authenticated envelope shared by every HiEx call:
//! canonical serialization of parameter trees, HMAC-SHA256 signing of
//! outgoing requests, and the validation pipeline applied to every response.
//!
//! It performs no I/O:
//! - No HTTP client, requests are handed to a transport as `SignedRequest`
//! - No environment or configuration loading
//! - No shared mutable state, builders and validators are `Send + Sync`

pub mod canonical;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod params;
pub mod signing;
pub mod validator;
pub mod value;
pub mod version;

pub use canonical::{SIGNATURE_KEY, canonical_string, canonicalize, canonicalize_map};
pub use credentials::Credentials;
pub use envelope::{
	CallOptions, EnvelopeBuilder, HEADER_PUBLIC_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP,
	HEADER_VERSION, SignedRequest, Timestamp,
};
pub use error::{ProtocolError, ProtocolResult};
pub use params::{Field, Params};
pub use signing::{Signer, sign, verify};
pub use validator::{RawResponse, ResponseValidator, sign_response};
pub use value::{Map, Value};
pub use version::ApiVersion;
