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

//! Response validation pipeline
//!
//! Every response goes through the same gates, in order, and the first
//! failing gate ends the call:
//!
//! 1. Parse the body as a JSON object (`Malformed`)
//! 2. Compare `X-APP-VERSION` with the client API version (`Version`)
//! 3. Recompute the HMAC over the canonical body (every top-level field
//!    except `signature`) and `X-APP-TIMESTAMP`, compare with
//!    `X-APP-SIGNATURE` (`Integrity`)
//! 4. Surface a negative `code` as a business error (`Response`)
//!
//! Only then is the payload handed back. Business errors are never reported
//! for a response whose signature did not verify.

use std::sync::Arc;

use tracing::warn;

use crate::{
	credentials::Credentials,
	envelope::{HEADER_SIGNATURE, HEADER_TIMESTAMP, HEADER_VERSION},
	error::{ProtocolError, ProtocolResult},
	signing::Signer,
	value::{Map, Value},
	version::ApiVersion,
};

/// Body field carrying the application result code
pub const CODE_KEY: &str = "code";
/// Body field naming the offending parameter of a failed call
pub const PARAM_KEY: &str = "param";
/// Body field carrying a human-readable failure detail
pub const DETAIL_KEY: &str = "detail";

/// Raw response as returned by a transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
	pub status: u16,
	pub body: String,
	pub headers: Vec<(String, String)>,
}

impl RawResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
			headers: Vec::new(),
		}
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// Case-insensitive header lookup
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(name))
			.map(|(_, v)| v.as_str())
	}
}

/// Sign a response body the way the server does.
///
/// Used by servers, webhook senders and test doubles; the client only ever
/// verifies.
pub fn sign_response(
	signer: &Signer,
	payload: &Map,
	version: &str,
	timestamp: &str,
) -> ProtocolResult<RawResponse> {
	let signature = signer.sign_payload(payload, timestamp)?;
	let body = serde_json::to_string(payload)
		.map_err(|e| ProtocolError::Canonicalization(format!("Failed to encode body: {}", e)))?;
	Ok(RawResponse::new(200, body)
		.with_header(HEADER_VERSION, version)
		.with_header(HEADER_TIMESTAMP, timestamp)
		.with_header(HEADER_SIGNATURE, signature))
}

/// Validates responses for one client
#[derive(Debug, Clone)]
pub struct ResponseValidator {
	signer: Signer,
	client_version: ApiVersion,
}

impl ResponseValidator {
	pub fn new(credentials: Arc<Credentials>) -> Self {
		Self {
			signer: Signer::new(credentials),
			client_version: ApiVersion::CLIENT,
		}
	}

	/// Override the compiled-in client API version.
	pub fn with_client_version(mut self, version: ApiVersion) -> Self {
		self.client_version = version;
		self
	}

	pub fn client_version(&self) -> ApiVersion {
		self.client_version
	}

	/// Run every gate and return the business payload.
	pub fn validate(&self, response: &RawResponse) -> ProtocolResult<Map> {
		let payload = parse_body(response)?;
		self.check_version(response)?;
		self.check_signature(response, &payload)?;
		check_code(&payload)?;
		Ok(payload)
	}

	fn check_version(&self, response: &RawResponse) -> ProtocolResult<()> {
		let announced = response.header(HEADER_VERSION).ok_or_else(|| {
			ProtocolError::Malformed(format!("Missing {} header", HEADER_VERSION))
		})?;
		let server = ApiVersion::parse(announced)?;
		self.client_version.check_server(server).inspect_err(|_| {
			warn!(
				target: "validator",
				server = %server,
				client = %self.client_version,
				"Server API is newer than this library"
			);
		})
	}

	fn check_signature(&self, response: &RawResponse, payload: &Map) -> ProtocolResult<()> {
		let signature = response.header(HEADER_SIGNATURE).ok_or_else(|| {
			ProtocolError::Integrity(format!("Missing {} header", HEADER_SIGNATURE))
		})?;
		let timestamp = response.header(HEADER_TIMESTAMP).ok_or_else(|| {
			ProtocolError::Integrity(format!("Missing {} header", HEADER_TIMESTAMP))
		})?;
		self.signer
			.verify_payload(payload, timestamp, signature)
			.inspect_err(|e| {
				warn!(target: "validator", error = %e, "Rejected response signature");
			})
	}
}

fn parse_body(response: &RawResponse) -> ProtocolResult<Map> {
	let parsed: Value = serde_json::from_str(&response.body).map_err(|e| {
		ProtocolError::Malformed(format!(
			"Body is not JSON (HTTP {}): {}",
			response.status, e
		))
	})?;
	match parsed {
		Value::Map(map) => Ok(map),
		_ => Err(ProtocolError::Malformed(format!(
			"Body is not a JSON object (HTTP {})",
			response.status
		))),
	}
}

fn check_code(payload: &Map) -> ProtocolResult<()> {
	let code = payload
		.get(CODE_KEY)
		.and_then(Value::as_i64)
		.ok_or_else(|| ProtocolError::Malformed("Missing or non-integer result code".to_string()))?;
	if code < 0 {
		return Err(ProtocolError::Response {
			code,
			param: payload
				.get(PARAM_KEY)
				.and_then(Value::as_str)
				.map(str::to_string),
			detail: payload
				.get(DETAIL_KEY)
				.and_then(Value::as_str)
				.map(str::to_string),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const SECRET: &str = "s3cret";

	fn signer() -> Signer {
		Signer::new(Arc::new(Credentials::new("pub", SECRET)))
	}

	fn validator() -> ResponseValidator {
		ResponseValidator::new(Arc::new(Credentials::new("pub", SECRET)))
	}

	fn body(json: serde_json::Value) -> Map {
		match Value::from(json) {
			Value::Map(m) => m,
			_ => panic!("test body must be an object"),
		}
	}

	fn signed(json: serde_json::Value, version: &str) -> RawResponse {
		sign_response(&signer(), &body(json), version, "1700000000.5").unwrap()
	}

	#[test]
	fn test_success_returns_payload() {
		let resp = signed(
			serde_json::json!({"code": 0, "pairs": [{"price": "1.5"}]}),
			"hiex_1.2.0",
		);
		let payload = validator().validate(&resp).unwrap();
		assert_eq!(payload.get("code"), Some(&Value::Int(0)));
		assert!(payload.contains_key("pairs"));
	}

	#[test]
	fn test_negative_code_raises_response_error() {
		let resp = signed(
			serde_json::json!({"code": -5, "param": "amount1", "detail": "too low"}),
			"hiex_1.2",
		);
		let err = validator().validate(&resp).unwrap_err();
		assert_eq!(
			err,
			ProtocolError::Response {
				code: -5,
				param: Some("amount1".to_string()),
				detail: Some("too low".to_string()),
			}
		);
	}

	#[test]
	fn test_negative_code_without_details() {
		let resp = signed(serde_json::json!({"code": -1, "param": null}), "hiex_1.2");
		let err = validator().validate(&resp).unwrap_err();
		assert_eq!(
			err,
			ProtocolError::Response {
				code: -1,
				param: None,
				detail: None,
			}
		);
	}

	#[test]
	fn test_forged_negative_code_is_integrity_error() {
		let mut resp = signed(
			serde_json::json!({"code": 0, "param": "amount1", "detail": "too low"}),
			"hiex_1.2",
		);
		resp.body = resp.body.replace("\"code\":0", "\"code\":-5");
		let err = validator().validate(&resp).unwrap_err();
		assert!(matches!(err, ProtocolError::Integrity(_)));
	}

	#[test]
	fn test_wrong_secret_is_integrity_error() {
		let other = Signer::new(Arc::new(Credentials::new("pub", "other")));
		let resp = sign_response(
			&other,
			&body(serde_json::json!({"code": 0})),
			"hiex_1.2",
			"1",
		)
		.unwrap();
		let err = validator().validate(&resp).unwrap_err();
		assert!(matches!(err, ProtocolError::Integrity(_)));
	}

	#[test]
	fn test_missing_signature_header() {
		let resp = RawResponse::new(200, "{\"code\":0}")
			.with_header(HEADER_VERSION, "hiex_1.2")
			.with_header(HEADER_TIMESTAMP, "1");
		let err = validator().validate(&resp).unwrap_err();
		assert!(matches!(err, ProtocolError::Integrity(_)));
	}

	#[test]
	fn test_version_gate_runs_before_signature() {
		let resp = RawResponse::new(200, "{\"code\":0}")
			.with_header(HEADER_VERSION, "hiex_1.3.0")
			.with_header(HEADER_TIMESTAMP, "1")
			.with_header(HEADER_SIGNATURE, "00");
		let err = validator().validate(&resp).unwrap_err();
		assert!(err.is_library_outdated());
	}

	#[test]
	fn test_version_boundary() {
		for ok in ["hiex_1.1", "hiex_1.2", "hiex_0.9.9"] {
			validator()
				.validate(&signed(serde_json::json!({"code": 0}), ok))
				.unwrap();
		}
		let err = validator()
			.validate(&signed(serde_json::json!({"code": 0}), "hiex_1.3"))
			.unwrap_err();
		assert!(matches!(err, ProtocolError::Version { .. }));
	}

	#[test]
	fn test_missing_version_header_is_malformed() {
		let resp = RawResponse::new(200, "{\"code\":0}");
		let err = validator().validate(&resp).unwrap_err();
		assert!(matches!(err, ProtocolError::Malformed(_)));
	}

	#[test]
	fn test_unparseable_body_is_malformed() {
		let resp = RawResponse::new(502, "<html>Bad Gateway</html>")
			.with_header(HEADER_VERSION, "hiex_1.2");
		let err = validator().validate(&resp).unwrap_err();
		assert!(matches!(err, ProtocolError::Malformed(ref m) if m.contains("502")));

		let resp = RawResponse::new(200, "[1, 2]").with_header(HEADER_VERSION, "hiex_1.2");
		assert!(matches!(
			validator().validate(&resp).unwrap_err(),
			ProtocolError::Malformed(_)
		));
	}

	#[test]
	fn test_missing_code_is_malformed() {
		let resp = signed(serde_json::json!({"pairs": []}), "hiex_1.2");
		let err = validator().validate(&resp).unwrap_err();
		assert!(matches!(err, ProtocolError::Malformed(_)));
	}

	#[test]
	fn test_embedded_signature_field_is_not_signed() {
		let mut payload = body(serde_json::json!({"code": 0, "exchange_id": "abc"}));
		let sig = signer().sign_payload(&payload, "7").unwrap();
		payload.insert("signature".to_string(), Value::String(sig.clone()));
		let resp = RawResponse::new(200, serde_json::to_string(&payload).unwrap())
			.with_header(HEADER_VERSION, "hiex_1.2")
			.with_header(HEADER_TIMESTAMP, "7")
			.with_header(HEADER_SIGNATURE, sig);
		validator().validate(&resp).unwrap();
	}

	#[test]
	fn test_numeric_literals_are_verified_digit_for_digit() {
		// Server sent bare JSON numbers, not strings.
		let body = r#"{"code":0,"amount":0.123456789012345678,"volume":123456789012345678901}"#;
		let canonical = "amount0.123456789012345678code0volume123456789012345678901";
		let sig =
			crate::signing::sign(canonical.as_bytes(), "1700000000", SECRET.as_bytes()).unwrap();
		let resp = RawResponse::new(200, body)
			.with_header(HEADER_VERSION, "hiex_1.2")
			.with_header(HEADER_TIMESTAMP, "1700000000")
			.with_header(HEADER_SIGNATURE, sig);

		let payload = validator().validate(&resp).unwrap();
		assert_eq!(
			payload.get("amount"),
			Some(&Value::Decimal("0.123456789012345678".parse().unwrap()))
		);
		assert_eq!(
			payload.get("volume"),
			Some(&Value::Decimal("123456789012345678901".parse().unwrap()))
		);
	}

	#[test]
	fn test_client_version_override() {
		let resp = signed(serde_json::json!({"code": 0}), "hiex_1.3");
		validator()
			.with_client_version(ApiVersion::new(1, 3))
			.validate(&resp)
			.unwrap();
	}
}
