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

//! HMAC-SHA256 request and response signing
//!
//! ```text
//! signature = hex(HMAC-SHA256(secret_key, canonical_payload || timestamp))
//! ```
//!
//! The timestamp travels out of band in `X-APP-TIMESTAMP`. It is part of the
//! signed material but not of the canonical payload. The same construction
//! signs requests and verifies responses; a response is always checked
//! against its own timestamp and signature, never the request's.

use std::sync::Arc;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{
	canonical::canonicalize_map,
	credentials::Credentials,
	error::{ProtocolError, ProtocolResult},
	value::Map,
};

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(secret_key: &[u8], canonical: &[u8], timestamp: &str) -> ProtocolResult<HmacSha256> {
	let mut mac = HmacSha256::new_from_slice(secret_key)
		.map_err(|e| ProtocolError::Integrity(format!("Unusable secret key: {}", e)))?;
	mac.update(canonical);
	mac.update(timestamp.as_bytes());
	Ok(mac)
}

/// Compute the lowercase hex signature of canonical bytes and a timestamp.
pub fn sign(canonical: &[u8], timestamp: &str, secret_key: &[u8]) -> ProtocolResult<String> {
	let mac = keyed_mac(secret_key, canonical, timestamp)?;
	Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check a received hex signature.
///
/// The comparison runs in constant time. A signature that is not valid hex
/// fails exactly like a wrong one.
pub fn verify(
	canonical: &[u8],
	timestamp: &str,
	signature: &str,
	secret_key: &[u8],
) -> ProtocolResult<()> {
	let received = hex::decode(signature.trim())
		.map_err(|e| ProtocolError::Integrity(format!("Signature is not hex: {}", e)))?;
	keyed_mac(secret_key, canonical, timestamp)?
		.verify_slice(&received)
		.map_err(|_| ProtocolError::Integrity(format!("Signature mismatch: {}", signature)))
}

/// Signer bound to one credential pair
#[derive(Debug, Clone)]
pub struct Signer {
	credentials: Arc<Credentials>,
}

impl Signer {
	pub fn new(credentials: Arc<Credentials>) -> Self {
		Self { credentials }
	}

	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	pub fn identity_key(&self) -> &str {
		self.credentials.identity_key()
	}

	/// Sign a payload mapping (the `signature` key, if any, is not signed).
	pub fn sign_payload(&self, payload: &Map, timestamp: &str) -> ProtocolResult<String> {
		let canonical = canonicalize_map(payload)?;
		sign(&canonical, timestamp, self.credentials.secret_key())
	}

	/// Verify a payload mapping against a received signature.
	pub fn verify_payload(&self, payload: &Map, timestamp: &str, signature: &str) -> ProtocolResult<()> {
		let canonical = canonicalize_map(payload)?;
		verify(&canonical, timestamp, signature, self.credentials.secret_key())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Value;

	#[test]
	fn test_rfc4231_vector() {
		// RFC 4231 test case 2, split between canonical bytes and timestamp.
		let sig = sign(b"what do ya want ", "for nothing?", b"Jefe").unwrap();
		assert_eq!(
			sig,
			"5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
		);
	}

	#[test]
	fn test_sign_verify_round_trip() {
		let sig = sign(b"currency1BTC", "1700000000", b"s3cret").unwrap();
		assert_eq!(sig.len(), 64);
		verify(b"currency1BTC", "1700000000", &sig, b"s3cret").unwrap();
	}

	#[test]
	fn test_timestamp_is_signed() {
		let sig = sign(b"currency1BTC", "1700000000", b"s3cret").unwrap();
		let err = verify(b"currency1BTC", "1700000001", &sig, b"s3cret").unwrap_err();
		assert!(matches!(err, ProtocolError::Integrity(_)));
	}

	#[test]
	fn test_non_hex_signature_is_integrity_error() {
		let err = verify(b"x", "1", "not-hex", b"k").unwrap_err();
		assert!(matches!(err, ProtocolError::Integrity(_)));
	}

	#[test]
	fn test_uppercase_hex_is_accepted() {
		let sig = sign(b"x", "1", b"k").unwrap().to_uppercase();
		verify(b"x", "1", &sig, b"k").unwrap();
	}

	#[test]
	fn test_signer_ignores_embedded_signature() {
		let signer = Signer::new(Arc::new(Credentials::new("pub", "s3cret")));
		let mut payload = Map::new();
		payload.insert("code".to_string(), Value::Int(0));
		let sig = signer.sign_payload(&payload, "1700000000").unwrap();

		payload.insert("signature".to_string(), Value::String(sig.clone()));
		signer.verify_payload(&payload, "1700000000", &sig).unwrap();
	}

	#[test]
	fn test_error_never_mentions_secret() {
		let signer = Signer::new(Arc::new(Credentials::new("pub", "top-secret-value")));
		let err = signer
			.verify_payload(&Map::new(), "1", "00")
			.unwrap_err();
		assert!(!err.to_string().contains("top-secret-value"));
	}
}
