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

//! Outgoing request envelope
//!
//! # Authentication Material Location
//!
//! Authentication materials travel in HTTP headers, never in the JSON body:
//!
//! - `X-APP-PUBLIC-KEY`: public identity key
//! - `X-APP-TIMESTAMP`: seconds since the Unix epoch, normalized decimal
//! - `X-APP-SIGNATURE`: hex HMAC-SHA256 over canonical body and timestamp
//!
//! The body carries the caller's parameters (omitted fields removed) plus the
//! `lang` preference when one is configured.

use std::{
	sync::Arc,
	time::{Duration, SystemTime, UNIX_EPOCH},
};

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
	canonical::canonicalize_map,
	credentials::Credentials,
	error::{ProtocolError, ProtocolResult},
	params::Params,
	signing::{Signer, sign},
	value::{Map, Value},
};

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_PUBLIC_KEY: &str = "X-APP-PUBLIC-KEY";
pub const HEADER_TIMESTAMP: &str = "X-APP-TIMESTAMP";
pub const HEADER_SIGNATURE: &str = "X-APP-SIGNATURE";
pub const HEADER_VERSION: &str = "X-APP-VERSION";

/// Body field carrying the language preference
pub const LANG_KEY: &str = "lang";

/// Request timestamp, rendered as seconds with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(Decimal);

impl Timestamp {
	/// Current wall-clock time. A clock before the epoch reads as zero.
	pub fn now() -> Self {
		let elapsed = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.unwrap_or(Duration::ZERO);
		Self::from_millis(elapsed.as_millis() as u64)
	}

	pub fn from_secs(secs: u64) -> Self {
		Self(Decimal::from(secs))
	}

	pub fn from_millis(millis: u64) -> Self {
		Self(Decimal::new(millis as i64, 3))
	}

	/// Header rendering: `1700000000`, `1700000000.25`.
	pub fn as_header(&self) -> String {
		self.0.normalize().to_string()
	}
}

/// Per-call options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
	/// Overrides the builder-wide language for this call only
	pub lang: Option<String>,
}

impl CallOptions {
	pub fn with_lang(lang: impl Into<String>) -> Self {
		Self {
			lang: Some(lang.into()),
		}
	}
}

/// A signed request ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
	pub endpoint: String,
	pub url: String,
	pub body: Vec<u8>,
	pub headers: Vec<(String, String)>,
	/// The payload that was signed (and serialized into `body`)
	pub payload: Map,
	pub timestamp: String,
	pub signature: String,
}

impl SignedRequest {
	/// Case-insensitive header lookup
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

/// Builds signed request envelopes for one client
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
	base_url: String,
	signer: Signer,
	lang: Option<String>,
}

impl EnvelopeBuilder {
	pub fn new(base_url: impl Into<String>, credentials: Arc<Credentials>) -> Self {
		Self {
			base_url: base_url.into(),
			signer: Signer::new(credentials),
			lang: None,
		}
	}

	/// Builder-wide language preference, sent with every request.
	pub fn with_lang(mut self, lang: Option<String>) -> Self {
		self.lang = lang;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn signer(&self) -> &Signer {
		&self.signer
	}

	/// Full URL of an endpoint path.
	pub fn url(&self, endpoint: &str) -> String {
		format!(
			"{}/{}",
			self.base_url.trim_end_matches('/'),
			endpoint.trim_start_matches('/')
		)
	}

	/// Build and sign a request stamped with the current time.
	pub fn build_now(
		&self,
		endpoint: &str,
		params: Params,
		options: &CallOptions,
	) -> ProtocolResult<SignedRequest> {
		self.build(endpoint, params, options, Timestamp::now())
	}

	/// Build and sign a request.
	///
	/// Fails only when a parameter cannot be rendered canonically, before
	/// anything is sent.
	pub fn build(
		&self,
		endpoint: &str,
		params: Params,
		options: &CallOptions,
		timestamp: Timestamp,
	) -> ProtocolResult<SignedRequest> {
		let mut payload = params.into_payload();
		if let Some(lang) = options.lang.as_ref().or(self.lang.as_ref()) {
			payload.insert(LANG_KEY.to_string(), Value::String(lang.clone()));
		}

		let canonical = canonicalize_map(&payload)?;
		let timestamp = timestamp.as_header();
		let signature = sign(
			&canonical,
			&timestamp,
			self.signer.credentials().secret_key(),
		)?;

		let body = serde_json::to_vec(&payload)
			.map_err(|e| ProtocolError::Canonicalization(format!("Failed to encode body: {}", e)))?;

		let headers = vec![
			(HEADER_CONTENT_TYPE.to_string(), "application/json".to_string()),
			(
				HEADER_PUBLIC_KEY.to_string(),
				self.signer.identity_key().to_string(),
			),
			(HEADER_TIMESTAMP.to_string(), timestamp.clone()),
			(HEADER_SIGNATURE.to_string(), signature.clone()),
		];

		debug!(
			target: "envelope",
			endpoint,
			identity_key = self.signer.identity_key(),
			fields = payload.len(),
			"Signed request"
		);

		Ok(SignedRequest {
			endpoint: endpoint.to_string(),
			url: self.url(endpoint),
			body,
			headers,
			payload,
			timestamp,
			signature,
		})
	}
}
