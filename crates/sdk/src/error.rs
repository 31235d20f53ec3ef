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

use hiex_protocol::ProtocolError;
use thiserror::Error;

/// Errors raised while moving a signed request over the wire
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Request timed out: {0}")]
	Timeout(String),
	#[error("Invalid request: {0}")]
	InvalidRequest(String),
}

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
	/// Envelope, integrity, version or business failure
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),
	/// A validated payload did not have the expected shape
	#[error("Failed to decode {what}: {reason}")]
	Decode { what: String, reason: String },
	#[error("Configuration error: {0}")]
	Configuration(String),
}

impl ClientError {
	pub(crate) fn decode(what: impl Into<String>, reason: impl ToString) -> Self {
		ClientError::Decode {
			what: what.into(),
			reason: reason.to_string(),
		}
	}

	pub fn protocol(&self) -> Option<&ProtocolError> {
		match self {
			ClientError::Protocol(e) => Some(e),
			_ => None,
		}
	}

	/// Business error code returned by the server, if this is one.
	pub fn response_code(&self) -> Option<i64> {
		self.protocol().and_then(ProtocolError::response_code)
	}

	pub fn is_library_outdated(&self) -> bool {
		self.protocol()
			.is_some_and(ProtocolError::is_library_outdated)
	}
}

impl From<config::ConfigError> for ClientError {
	fn from(e: config::ConfigError) -> Self {
		ClientError::Configuration(e.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_response_code_passthrough() {
		let err = ClientError::from(ProtocolError::Response {
			code: -7,
			param: None,
			detail: None,
		});
		assert_eq!(err.response_code(), Some(-7));
		assert!(!err.is_library_outdated());
	}

	#[test]
	fn test_transport_error_has_no_code() {
		let err = ClientError::from(TransportError::Network("refused".into()));
		assert_eq!(err.response_code(), None);
		assert!(err.to_string().contains("refused"));
	}

	#[test]
	fn test_outdated_library() {
		let err = ClientError::from(ProtocolError::Version {
			server: "1.3".into(),
			client: "1.2".into(),
		});
		assert!(err.is_library_outdated());
	}
}
