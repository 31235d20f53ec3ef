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

//! Webhook notifications sent to an application's `notification_url`
//!
//! Notifications are signed exactly like responses and go through the same
//! validator before they are dispatched on their `method` field.

use hiex_protocol::{Map, ProtocolError, RawResponse, ResponseValidator, Value};
use tracing::debug;

use crate::types::Exchange;

pub const METHOD_KEY: &str = "method";
pub const EXCHANGE_UPDATE: &str = "exchange_update";

/// A verified notification
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
	/// An exchange changed state
	ExchangeUpdate(Exchange),
	/// Any other method, with its full payload
	Other { method: String, payload: Map },
}

/// Verify and decode an incoming notification.
///
/// The caller builds `RawResponse` from the received HTTP request: its body
/// and its `X-APP-*` headers.
pub fn parse_notification(
	validator: &ResponseValidator,
	raw: &RawResponse,
) -> Result<Notification, ProtocolError> {
	let mut payload = validator.validate(raw)?;

	let method = payload
		.get(METHOD_KEY)
		.and_then(Value::as_str)
		.map(str::to_string)
		.ok_or_else(|| ProtocolError::Malformed("Notification has no method".to_string()))?;

	debug!(target: "notification", method = %method, "Verified notification");

	if method == EXCHANGE_UPDATE {
		let exchange = payload
			.remove("exchange")
			.ok_or_else(|| ProtocolError::Malformed("Exchange update without exchange".to_string()))?
			.decode::<Exchange>()
			.map_err(|e| ProtocolError::Malformed(format!("Invalid exchange in notification: {}", e)))?;
		return Ok(Notification::ExchangeUpdate(exchange));
	}

	Ok(Notification::Other { method, payload })
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use hiex_protocol::{Credentials, Signer, sign_response};

	use super::*;

	fn credentials() -> Arc<Credentials> {
		Arc::new(Credentials::new("pub", "s3cret"))
	}

	fn signed(json: serde_json::Value) -> RawResponse {
		let Value::Map(payload) = Value::from(json) else {
			panic!("object expected");
		};
		sign_response(&Signer::new(credentials()), &payload, "hiex_1.2", "1700000000").unwrap()
	}

	fn currency(code: &str) -> serde_json::Value {
		serde_json::json!({
			"code": code, "short_name": code, "name": code,
			"available_tag": false, "round_ndigits": 2
		})
	}

	#[test]
	fn test_exchange_update() {
		let raw = signed(serde_json::json!({
			"code": 0,
			"method": "exchange_update",
			"exchange": {
				"exchange_id": "e1",
				"user_id": 3,
				"status": 4,
				"amount1": "10",
				"amount2": "400",
				"currency1": currency("USDT_TRC20"),
				"currency2": currency("UAH_VISAMASTER"),
				"address": "4149"
			}
		}));
		let n = parse_notification(&ResponseValidator::new(credentials()), &raw).unwrap();
		match n {
			Notification::ExchangeUpdate(exchange) => {
				assert_eq!(exchange.exchange_id, "e1");
				assert_eq!(exchange.status, 4);
			}
			other => panic!("unexpected notification: {:?}", other),
		}
	}

	#[test]
	fn test_other_method_keeps_payload() {
		let raw = signed(serde_json::json!({"code": 0, "method": "balance_update", "balance": "5"}));
		let n = parse_notification(&ResponseValidator::new(credentials()), &raw).unwrap();
		let Notification::Other { method, payload } = n else {
			panic!("expected Other");
		};
		assert_eq!(method, "balance_update");
		assert_eq!(payload.get("balance"), Some(&Value::from("5")));
	}

	#[test]
	fn test_forged_notification_is_rejected() {
		let mut raw = signed(serde_json::json!({"code": 0, "method": "balance_update", "balance": "5"}));
		raw.body = raw.body.replace("\"5\"", "\"500\"");
		let err = parse_notification(&ResponseValidator::new(credentials()), &raw).unwrap_err();
		assert!(matches!(err, ProtocolError::Integrity(_)));
	}

	#[test]
	fn test_missing_method_is_malformed() {
		let raw = signed(serde_json::json!({"code": 0}));
		let err = parse_notification(&ResponseValidator::new(credentials()), &raw).unwrap_err();
		assert!(matches!(err, ProtocolError::Malformed(_)));
	}
}
