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

//! In-process fake HiEx server
//!
//! Checks every request signature the way the real server does and answers
//! with signed responses from a per-endpoint route table.

#![allow(dead_code)]

use std::{
	collections::HashMap,
	sync::{Arc, Mutex},
};

use async_trait::async_trait;
use hiex_protocol::{
	Credentials, HEADER_PUBLIC_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP, Map, RawResponse,
	SignedRequest, Signer, Value, sign_response,
};
use hiex_sdk::{Transport, TransportError};

pub const PUBLIC_KEY: &str = "app-public";
pub const SECRET_KEY: &str = "app-secret";

pub fn credentials() -> Credentials {
	Credentials::new(PUBLIC_KEY, SECRET_KEY)
}

pub fn object(json: serde_json::Value) -> Map {
	match Value::from(json) {
		Value::Map(m) => m,
		_ => panic!("object expected"),
	}
}

pub fn currency(code: &str) -> serde_json::Value {
	serde_json::json!({
		"code": code,
		"short_name": code,
		"name": code,
		"available_tag": false,
		"round_ndigits": 2,
		"img": null
	})
}

pub fn exchange(exchange_id: &str, status: i64) -> serde_json::Value {
	serde_json::json!({
		"exchange_id": exchange_id,
		"user_id": 42,
		"status": status,
		"amount1": "10",
		"amount2": "405.5",
		"currency1": currency("USDT_TRC20"),
		"currency2": currency("UAH_VISAMASTER"),
		"address": "4149000000000000",
		"tag": null,
		"additional_fields": {},
		"created_at": 1700000000,
		"closed_at": null
	})
}

/// How the fake server mangles its own answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tamper {
	None,
	/// Change the body after signing
	Body,
	/// Announce an API version newer than the client
	Version,
}

#[derive(Debug)]
struct Inner {
	signer: Signer,
	routes: Mutex<HashMap<String, String>>,
	seen: Mutex<Vec<(String, Map)>>,
	tamper: Mutex<Tamper>,
}

/// Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct FakeServer {
	inner: Arc<Inner>,
}

impl FakeServer {
	pub fn new() -> Self {
		Self {
			inner: Arc::new(Inner {
				signer: Signer::new(Arc::new(credentials())),
				routes: Mutex::new(HashMap::new()),
				seen: Mutex::new(Vec::new()),
				tamper: Mutex::new(Tamper::None),
			}),
		}
	}

	/// Answer `endpoint` with `body` (a JSON object; `code` defaults to 0).
	pub fn route(&self, endpoint: &str, body: serde_json::Value) -> &Self {
		let mut payload = object(body);
		payload.entry("code".to_string()).or_insert(Value::Int(0));
		let text = serde_json::to_string(&payload).unwrap();
		self.inner
			.routes
			.lock()
			.unwrap()
			.insert(endpoint.to_string(), text);
		self
	}

	/// Answer `endpoint` with an unsigned raw body.
	pub fn route_raw(&self, endpoint: &str, body: &str) -> &Self {
		self.inner
			.routes
			.lock()
			.unwrap()
			.insert(format!("raw:{}", endpoint), body.to_string());
		self
	}

	pub fn tamper(&self, tamper: Tamper) {
		*self.inner.tamper.lock().unwrap() = tamper;
	}

	/// Endpoints called so far, with the payloads received
	pub fn seen(&self) -> Vec<(String, Map)> {
		self.inner.seen.lock().unwrap().clone()
	}

	pub fn last(&self) -> (String, Map) {
		self.seen().pop().expect("no request received")
	}

	fn signed(&self, payload: &Map) -> RawResponse {
		let tamper = *self.inner.tamper.lock().unwrap();
		let version = if tamper == Tamper::Version {
			"hiex_1.3.0"
		} else {
			"hiex_1.2.0"
		};
		let mut resp = sign_response(&self.inner.signer, payload, version, "1700000100.5").unwrap();
		if tamper == Tamper::Body {
			resp.body = resp.body.replacen("\"code\":0", "\"code\":-1", 1);
		}
		resp
	}

	fn reject(&self, code: i64, param: &str) -> RawResponse {
		self.signed(&object(serde_json::json!({
			"code": code,
			"param": param,
			"detail": "rejected by fake server"
		})))
	}
}

#[async_trait]
impl Transport for FakeServer {
	async fn send(&self, request: &SignedRequest) -> Result<RawResponse, TransportError> {
		let received: Value = serde_json::from_slice(&request.body)
			.map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
		let Value::Map(received) = received else {
			return Ok(self.reject(-400, "body"));
		};

		self.inner
			.seen
			.lock()
			.unwrap()
			.push((request.endpoint.clone(), received.clone()));

		if request.header(HEADER_PUBLIC_KEY) != Some(PUBLIC_KEY) {
			return Ok(self.reject(-401, "public_key"));
		}
		let (Some(ts), Some(sig)) = (
			request.header(HEADER_TIMESTAMP),
			request.header(HEADER_SIGNATURE),
		) else {
			return Ok(self.reject(-401, "signature"));
		};
		if self.inner.signer.verify_payload(&received, ts, sig).is_err() {
			return Ok(self.reject(-401, "signature"));
		}

		let routes = self.inner.routes.lock().unwrap();
		if let Some(raw) = routes.get(&format!("raw:{}", request.endpoint)) {
			return Ok(RawResponse::new(200, raw.clone()));
		}
		let Some(body) = routes.get(&request.endpoint).cloned() else {
			drop(routes);
			return Ok(self.reject(-404, "method"));
		};
		drop(routes);

		let payload = object(serde_json::from_str(&body).unwrap());
		Ok(self.signed(&payload))
	}
}
