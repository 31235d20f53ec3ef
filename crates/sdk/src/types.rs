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

use hiex_protocol::{Map, Value};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::ClientError;

/// Currency (coin) supported by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
	/// Unique currency code (e.g., "USDT_TRC20")
	pub code: String,
	pub short_name: String,
	pub name: String,
	/// Whether a destination tag/memo is accepted
	pub available_tag: bool,
	/// Number of decimal digits amounts are rounded to
	pub round_ndigits: i32,
	#[serde(default)]
	pub img: Option<String>,
}

/// Beneficiary details attached to an exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalFields {
	pub beneficiary_email: Option<String>,
	pub beneficiary_first_name: Option<String>,
	pub beneficiary_last_name: Option<String>,
	pub beneficiary_tin: Option<String>,
	pub beneficiary_phone: Option<String>,
}

/// Payment details for funding an exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
	pub currency: Currency,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub address_qr: Option<String>,
	#[serde(default)]
	pub tag: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	pub amount: Decimal,
}

/// Currency exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
	pub exchange_id: String,
	pub user_id: i64,
	pub status: i64,
	/// Amount deposited, in `currency1`
	pub amount1: Decimal,
	/// Amount paid out, in `currency2`
	pub amount2: Decimal,
	pub currency1: Currency,
	pub currency2: Currency,
	/// Payout address
	pub address: String,
	#[serde(default)]
	pub tag: Option<String>,
	#[serde(default)]
	pub additional_fields: AdditionalFields,
	/// Unix timestamps
	#[serde(default)]
	pub created_at: Option<i64>,
	#[serde(default)]
	pub closed_at: Option<i64>,
}

/// Exchange pair with its limits and current price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
	pub currency1: Currency,
	pub currency2: Currency,
	pub min_amount1: Decimal,
	pub max_amount1: Decimal,
	pub min_amount2: Decimal,
	pub max_amount2: Decimal,
	pub price_factor: Decimal,
	pub price: Decimal,
	pub kyc_required: bool,
	pub available_tag: bool,
	#[serde(default)]
	pub additional_fields_list: Option<Vec<Value>>,
	#[serde(default)]
	pub comment: Option<String>,
}

/// Quote returned by `pair/amount`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairAmount {
	pub amount1: Decimal,
	pub amount2: Decimal,
	pub rate: Decimal,
}

/// Daily statistics row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
	pub day: String,
	pub exchanges_success_count: i64,
	pub exchanges_created_count: i64,
	pub exchanges_success_amount: Decimal,
	#[serde(default)]
	pub application_income: Option<Decimal>,
}

/// End user of an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub user_id: i64,
	pub kyc: bool,
	pub email: String,
	#[serde(default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub last_name: Option<String>,
	pub balance: Decimal,
	#[serde(default)]
	pub referral_token: Option<String>,
	#[serde(default)]
	pub referral_id: Option<i64>,
	pub referrals_count: i64,
	pub referrals_sum_amount: Decimal,
	pub referral_interest: Decimal,
	pub created_at: i64,
	/// Free-form application data; `null` reads as empty
	#[serde(default, deserialize_with = "null_as_empty")]
	pub data: Map,
}

/// Identity verification method offered to users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationService {
	pub name: String,
	/// Sub-options of the method, when it has any
	#[serde(default)]
	pub options: Option<Vec<Value>>,
}

/// A started identity verification
///
/// Depending on the method the user continues at `url` or scans `qr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
	pub method: String,
	#[serde(default)]
	pub option: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub qr: Option<String>,
}

/// State of an e-mail code authorization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
	/// Set once the user entered a valid code
	pub allow: bool,
	pub auth_key: String,
	pub application_id: i64,
	/// Remaining code attempts
	pub code_attempt: i64,
}

/// Application registered with the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
	pub application_id: i64,
	pub user_id: i64,
	pub name: String,
	pub public_key: String,
	/// Percentage taken from exchanges
	pub interest: Decimal,
	pub income: Decimal,
	#[serde(default)]
	pub notification_url: Option<String>,
}

/// User brought in by a referral link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
	pub user_id: i64,
	pub email: String,
	pub created_at: i64,
	pub amount: Decimal,
	pub kyc: bool,
}

/// Server log file entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
	pub name: String,
	/// Whatever else the server reports (size, modification time, ...)
	#[serde(flatten)]
	pub details: Map,
}

/// Exchange list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeGroup {
	Fail,
	Cancel,
	InProcess,
	Success,
}

impl ExchangeGroup {
	pub fn as_str(&self) -> &'static str {
		match self {
			ExchangeGroup::Fail => "fail",
			ExchangeGroup::Cancel => "cancel",
			ExchangeGroup::InProcess => "in_process",
			ExchangeGroup::Success => "success",
		}
	}
}

impl From<ExchangeGroup> for Value {
	fn from(group: ExchangeGroup) -> Self {
		Value::from(group.as_str())
	}
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
	pub items: Vec<T>,
	/// The server returned everything there is to return
	pub is_all: bool,
}

impl<T> Page<T> {
	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T> IntoIterator for Page<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

fn null_as_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Map, D::Error> {
	Ok(Option::<Map>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the record stored under `key` of a validated payload.
pub(crate) fn record<T: DeserializeOwned>(payload: &mut Map, key: &str) -> Result<T, ClientError> {
	let value = payload
		.remove(key)
		.ok_or_else(|| ClientError::decode(key, "field missing from response"))?;
	value.decode().map_err(|e| ClientError::decode(key, e))
}

/// Decode the list stored under `key`, with the optional `is_all` flag.
pub(crate) fn page<T: DeserializeOwned>(payload: &mut Map, key: &str) -> Result<Page<T>, ClientError> {
	let items = match payload.remove(key) {
		Some(Value::Seq(items)) => items,
		Some(Value::Null) | None => Vec::new(),
		Some(_) => return Err(ClientError::decode(key, "expected a list")),
	};
	let items = items
		.into_iter()
		.map(|item| item.decode().map_err(|e| ClientError::decode(key, e)))
		.collect::<Result<Vec<T>, _>>()?;
	let is_all = matches!(payload.get("is_all"), Some(Value::Bool(true)));
	Ok(Page { items, is_all })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn payload(json: serde_json::Value) -> Map {
		match Value::from(json) {
			Value::Map(m) => m,
			_ => panic!("object expected"),
		}
	}

	fn currency_json(code: &str) -> serde_json::Value {
		serde_json::json!({
			"code": code,
			"short_name": code,
			"name": code,
			"available_tag": false,
			"round_ndigits": 2,
			"img": null
		})
	}

	#[test]
	fn test_exchange_decodes_exact_amounts() {
		let mut p = payload(serde_json::json!({
			"code": 0,
			"exchange": {
				"exchange_id": "ab12",
				"user_id": 7,
				"status": 1,
				"amount1": 10.10,
				"amount2": "405.25",
				"currency1": currency_json("USDT_TRC20"),
				"currency2": currency_json("UAH_VISAMASTER"),
				"address": "4149000000000000",
				"tag": null,
				"additional_fields": {"beneficiary_email": "a@b.c"},
				"created_at": 1700000000,
				"closed_at": null
			}
		}));
		let exchange: Exchange = record(&mut p, "exchange").unwrap();
		assert_eq!(exchange.amount1, Decimal::new(101, 1));
		assert_eq!(exchange.amount2, Decimal::new(40525, 2));
		assert_eq!(exchange.currency2.code, "UAH_VISAMASTER");
		assert_eq!(exchange.additional_fields.beneficiary_email.as_deref(), Some("a@b.c"));
		assert_eq!(exchange.additional_fields.beneficiary_tin, None);
		assert_eq!(exchange.closed_at, None);
	}

	#[test]
	fn test_page_with_is_all() {
		let mut p = payload(serde_json::json!({
			"code": 0,
			"coins": [currency_json("BTC"), currency_json("USDT_TRC20")],
			"is_all": true
		}));
		let page: Page<Currency> = page(&mut p, "coins").unwrap();
		assert_eq!(page.len(), 2);
		assert!(page.is_all);
		assert_eq!(page.items[0].code, "BTC");
	}

	#[test]
	fn test_page_without_list_is_empty() {
		let mut p = payload(serde_json::json!({"code": 0}));
		let page: Page<Currency> = page(&mut p, "coins").unwrap();
		assert!(page.is_empty());
		assert!(!page.is_all);
	}

	#[test]
	fn test_missing_record_is_decode_error() {
		let mut p = payload(serde_json::json!({"code": 0}));
		let err = record::<Exchange>(&mut p, "exchange").unwrap_err();
		assert!(matches!(err, ClientError::Decode { .. }));
	}

	#[test]
	fn test_user_null_data_reads_as_empty() {
		let mut p = payload(serde_json::json!({
			"code": 0,
			"user": {
				"user_id": 1,
				"kyc": true,
				"email": "user@example.com",
				"balance": "0",
				"referrals_count": 0,
				"referrals_sum_amount": "0",
				"referral_interest": "0.5",
				"created_at": 1700000000,
				"data": null
			}
		}));
		let user: User = record(&mut p, "user").unwrap();
		assert!(user.data.is_empty());
		assert_eq!(user.first_name, None);
		assert_eq!(user.referral_interest, Decimal::new(5, 1));
	}

	#[test]
	fn test_log_keeps_extra_fields() {
		let mut p = payload(serde_json::json!({
			"code": 0,
			"logs": [{"name": "api.log", "size": 1024}]
		}));
		let logs: Page<Log> = page(&mut p, "logs").unwrap();
		assert_eq!(logs.items[0].name, "api.log");
		assert_eq!(logs.items[0].details.get("size"), Some(&Value::Int(1024)));
	}
}
