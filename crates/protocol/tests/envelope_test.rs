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

//! End-to-end envelope tests
//!
//! A request built by the client is checked the way the server checks it,
//! and a response signed the way the server signs it is run through the
//! client validator.

use std::sync::Arc;

use hiex_protocol::{
	CallOptions, Credentials, EnvelopeBuilder, HEADER_SIGNATURE, HEADER_TIMESTAMP, Map, Params,
	ProtocolError, ResponseValidator, Signer, Timestamp, Value, canonicalize_map, sign_response,
	verify,
};
use rust_decimal::Decimal;

fn credentials() -> Arc<Credentials> {
	Arc::new(Credentials::new("app-public", "s3cret"))
}

#[test]
fn test_pairs_list_request_is_stable() {
	let builder = EnvelopeBuilder::new("https://api.hiex.io/", credentials());
	let params = Params::new()
		.set("currency1", "BTC")
		.set("currency2", "USDT")
		.optional::<Decimal>("amount1", None);

	let req = builder
		.build(
			"pairs/list",
			params,
			&CallOptions::default(),
			Timestamp::from_secs(1_700_000_000),
		)
		.unwrap();

	assert_eq!(
		canonicalize_map(&req.payload).unwrap(),
		b"currency1BTCcurrency2USDT".to_vec()
	);
	assert_eq!(
		req.signature,
		"c02283e9e606d69b4c6c8b00923c57b6158f432370f6073bc5b123537d93a809"
	);
	assert_eq!(req.url, "https://api.hiex.io/pairs/list");
}

#[test]
fn test_server_side_check_of_client_request() {
	let builder =
		EnvelopeBuilder::new("https://api.hiex.io", credentials()).with_lang(Some("uk".into()));
	let params = Params::new()
		.set("currency1", "BTC")
		.set("currency2", "USDT")
		.set("amount1", Decimal::new(1050, 2));

	let req = builder
		.build(
			"pair/amount",
			params,
			&CallOptions::default(),
			Timestamp::from_millis(1_700_000_000_250),
		)
		.unwrap();
	assert_eq!(req.timestamp, "1700000000.25");
	assert_eq!(
		req.signature,
		"04527da4fb932b2952499c66288e5a9a61341860108e8a0f7fefeba22c2deaab"
	);

	// The server re-parses the body it received and checks the headers.
	let received: Value = serde_json::from_slice(&req.body).unwrap();
	let received = received.as_map().unwrap().clone();
	let canonical = canonicalize_map(&received).unwrap();
	verify(
		&canonical,
		req.header(HEADER_TIMESTAMP).unwrap(),
		req.header(HEADER_SIGNATURE).unwrap(),
		b"s3cret",
	)
	.unwrap();
}

#[test]
fn test_response_round_trip_through_validator() {
	let server = Signer::new(credentials());
	let mut payload = Map::new();
	payload.insert("code".into(), Value::Int(0));
	payload.insert(
		"pair".into(),
		serde_json::json!({"price": "41000.5", "kyc_required": false}).into(),
	);

	let resp = sign_response(&server, &payload, "hiex_1.2.3", "1700000001").unwrap();
	let got = ResponseValidator::new(credentials()).validate(&resp).unwrap();
	assert_eq!(got, payload);
}

#[test]
fn test_business_error_requires_valid_signature() {
	let server = Signer::new(credentials());
	let mut payload = Map::new();
	payload.insert("code".into(), Value::Int(-3));
	payload.insert("param".into(), Value::from("exchange_id"));

	let resp = sign_response(&server, &payload, "hiex_1.2", "1").unwrap();
	let validator = ResponseValidator::new(credentials());
	assert_eq!(validator.validate(&resp).unwrap_err().response_code(), Some(-3));

	let stranger = Signer::new(Arc::new(Credentials::new("app-public", "other")));
	let forged = sign_response(&stranger, &payload, "hiex_1.2", "1").unwrap();
	assert!(matches!(
		validator.validate(&forged).unwrap_err(),
		ProtocolError::Integrity(_)
	));
}
