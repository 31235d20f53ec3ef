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

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result, bail};
use hiex_protocol::{
	CallOptions, Credentials, EnvelopeBuilder, HEADER_SIGNATURE, HEADER_TIMESTAMP, HEADER_VERSION,
	Params, RawResponse, ResponseValidator, SignedRequest, Timestamp, Value,
};
use hiex_sdk::{Client, ClientConfig, UserLookup};
use tracing::info;

/// Print any serializable value as pretty JSON on stdout.
fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).context("Failed to encode output")?;
	println!("{}", text);
	Ok(())
}

pub async fn coins(client: &Client) -> Result<()> {
	let coins = client
		.admin_coins_list()
		.await
		.context("Failed to list coins")?;
	info!(target: "cli", count = coins.len(), "Listed coins");
	print_json(&coins.items)
}

pub async fn pairs(client: &Client, currency1: Option<&str>, currency2: Option<&str>) -> Result<()> {
	let pairs = client
		.pairs_list(currency1, currency2)
		.await
		.context("Failed to list pairs")?;
	info!(target: "cli", count = pairs.len(), is_all = pairs.is_all, "Listed pairs");
	print_json(&pairs.items)
}

pub async fn exchange(client: &Client, exchange_id: &str) -> Result<()> {
	let exchange = client
		.admin_exchange_get(exchange_id)
		.await
		.with_context(|| format!("Failed to load exchange {}", exchange_id))?;
	print_json(&exchange)
}

pub async fn user(client: &Client, lookup: &UserLookup) -> Result<()> {
	let user = client
		.admin_user_details(lookup)
		.await
		.context("Failed to load user")?;
	print_json(&user)
}

/// Build the signed request for `endpoint` without sending it.
pub fn sign(
	credentials: Credentials,
	config: &ClientConfig,
	endpoint: &str,
	params_json: &str,
	timestamp: Option<u64>,
) -> Result<SignedRequest> {
	let parsed: serde_json::Value =
		serde_json::from_str(params_json).context("--params is not valid JSON")?;
	let Value::Map(params) = Value::from(parsed) else {
		bail!("--params must be a JSON object");
	};

	let timestamp = timestamp.map(Timestamp::from_secs).unwrap_or_else(Timestamp::now);
	let builder = EnvelopeBuilder::new(config.base_url.clone(), Arc::new(credentials))
		.with_lang(config.lang.clone());
	let request = builder
		.build(endpoint, Params::from(params), &CallOptions::default(), timestamp)
		.context("Failed to sign request")?;
	Ok(request)
}

pub fn print_signed(request: &SignedRequest) -> Result<()> {
	println!("POST {}", request.url);
	for (name, value) in &request.headers {
		println!("{}: {}", name, value);
	}
	println!();
	println!("{}", String::from_utf8_lossy(&request.body));
	Ok(())
}

/// Run the response validator on a captured response.
pub fn verify(
	credentials: Credentials,
	body_path: &Path,
	version: &str,
	timestamp: &str,
	signature: &str,
) -> Result<Value> {
	let body = std::fs::read_to_string(body_path)
		.with_context(|| format!("Failed to read {}", body_path.display()))?;
	let raw = RawResponse::new(200, body)
		.with_header(HEADER_VERSION, version)
		.with_header(HEADER_TIMESTAMP, timestamp)
		.with_header(HEADER_SIGNATURE, signature);

	let payload = ResponseValidator::new(Arc::new(credentials))
		.validate(&raw)
		.context("Response rejected")?;
	Ok(Value::Map(payload))
}

pub fn print_value(value: &Value) -> Result<()> {
	print_json(value)
}

#[cfg(test)]
mod tests {
	use hiex_protocol::{Map, Signer, sign_response};

	use super::*;

	fn credentials() -> Credentials {
		Credentials::new("pub", "s3cret")
	}

	#[test]
	fn test_sign_is_deterministic_with_fixed_timestamp() {
		let config = ClientConfig::default();
		let a = sign(
			credentials(),
			&config,
			"pairs/list",
			r#"{"currency2": "USDT", "currency1": "BTC"}"#,
			Some(1_700_000_000),
		)
		.unwrap();
		assert_eq!(
			a.signature,
			"c02283e9e606d69b4c6c8b00923c57b6158f432370f6073bc5b123537d93a809"
		);
		assert_eq!(a.url, "https://api.hiex.io/pairs/list");
	}

	#[test]
	fn test_sign_rejects_non_object_params() {
		let err = sign(credentials(), &ClientConfig::default(), "x", "[1]", Some(1)).unwrap_err();
		assert!(err.to_string().contains("JSON object"));
	}

	#[test]
	fn test_verify_captured_response() {
		let mut payload = Map::new();
		payload.insert("code".into(), Value::Int(0));
		let raw = sign_response(
			&Signer::new(Arc::new(credentials())),
			&payload,
			"hiex_1.2",
			"1700000000",
		)
		.unwrap();

		let path = std::env::temp_dir().join(format!("hiex-cli-verify-{}.json", std::process::id()));
		std::fs::write(&path, &raw.body).unwrap();
		let sig = raw.header(HEADER_SIGNATURE).unwrap().to_string();

		let ok = verify(credentials(), &path, "hiex_1.2", "1700000000", &sig);
		let forged = verify(credentials(), &path, "hiex_1.2", "1700000001", &sig);
		std::fs::remove_file(&path).ok();

		assert_eq!(ok.unwrap().get("code"), Some(&Value::Int(0)));
		assert!(forged.is_err());
	}
}
