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

use thiserror::Error;

/// Error types for the signing envelope
///
/// Every gate of the request/response pipeline fails with exactly one of
/// these variants. None of them ever carries the secret key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
	/// The response signature is missing or does not match the recomputed one.
	/// The whole response is untrusted, whatever its business payload says.
	#[error("Integrity error: {0}")]
	Integrity(String),
	/// The server speaks a newer API than this library was built for.
	#[error("Library outdated: server API {server} is newer than client API {client}")]
	Version { server: String, client: String },
	/// The envelope verified, but the operation itself failed.
	#[error("Response error {code} (param: {}): {}", .param.as_deref().unwrap_or("-"), .detail.as_deref().unwrap_or(""))]
	Response {
		code: i64,
		param: Option<String>,
		detail: Option<String>,
	},
	/// The body or a mandatory protocol field could not be parsed.
	#[error("Malformed response: {0}")]
	Malformed(String),
	/// A request value cannot be rendered canonically. Raised before sending.
	#[error("Canonicalization error: {0}")]
	Canonicalization(String),
}

impl ProtocolError {
	/// True when the library, not the request, must change (upgrade the client
	/// rather than retry).
	pub fn is_library_outdated(&self) -> bool {
		matches!(self, ProtocolError::Version { .. })
	}

	/// Business error code, if the server reported one.
	pub fn response_code(&self) -> Option<i64> {
		match self {
			ProtocolError::Response { code, .. } => Some(*code),
			_ => None,
		}
	}
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_response_error_display() {
		let err = ProtocolError::Response {
			code: -5,
			param: Some("amount1".to_string()),
			detail: Some("too low".to_string()),
		};
		assert_eq!(err.to_string(), "Response error -5 (param: amount1): too low");
		assert_eq!(err.response_code(), Some(-5));
		assert!(!err.is_library_outdated());
	}

	#[test]
	fn test_version_error_is_distinct() {
		let err = ProtocolError::Version {
			server: "1.3".to_string(),
			client: "1.2".to_string(),
		};
		assert!(err.is_library_outdated());
		assert_eq!(err.response_code(), None);
	}
}
