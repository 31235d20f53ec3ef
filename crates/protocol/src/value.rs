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

//! Structured values carried by requests and responses
//!
//! `Value` is the only shape the canonicalizer accepts. Mappings are
//! `BTreeMap`s, so key order is lexical no matter how a value was built.
//! That is what keeps the signer and the verifier in step.

use std::{collections::BTreeMap, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};

use crate::error::{ProtocolError, ProtocolResult};

/// Mapping with lexically ordered keys
pub type Map = BTreeMap<String, Value>;

/// A protocol value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	UInt(u64),
	Float(f64),
	Decimal(Decimal),
	String(String),
	Seq(Vec<Value>),
	Map(Map),
}

impl Value {
	/// Convert any serializable type into a `Value`.
	///
	/// Types that serde_json cannot represent (maps with non-string keys, for
	/// instance) are reported as canonicalization errors, before any request
	/// is built.
	pub fn from_serialize<T: Serialize>(value: &T) -> ProtocolResult<Self> {
		serde_json::to_value(value)
			.map(Value::from)
			.map_err(|e| ProtocolError::Canonicalization(format!("Unsupported value: {}", e)))
	}

	/// Decode this value into a typed record.
	pub fn decode<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
		serde_json::from_value(serde_json::Value::from(self))
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Integer view. Decimals with no fractional part count as integers.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Int(i) => Some(*i),
			Value::UInt(u) => i64::try_from(*u).ok(),
			Value::Decimal(d) if d.fract().is_zero() => d.to_i64(),
			_ => None,
		}
	}

	pub fn as_map(&self) -> Option<&Map> {
		match self {
			Value::Map(m) => Some(m),
			_ => None,
		}
	}

	/// Look up a key when this value is a mapping.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_map().and_then(|m| m.get(key))
	}

	/// Build a number from its literal JSON text.
	///
	/// Integers that fit a machine word stay integers; everything else goes
	/// through `Decimal` so the digits the server signed are the digits we
	/// canonicalize. Only literals outside the decimal range fall back to
	/// `f64`.
	fn from_number(n: &serde_json::Number) -> Self {
		if let Some(i) = n.as_i64() {
			return Value::Int(i);
		}
		if let Some(u) = n.as_u64() {
			return Value::UInt(u);
		}
		let text = n.as_str();
		Decimal::from_str(text)
			.or_else(|_| Decimal::from_scientific(text))
			.map(Value::Decimal)
			.unwrap_or_else(|_| n.as_f64().map(Value::Float).unwrap_or(Value::Null))
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => Value::from_number(&n),
			serde_json::Value::String(s) => Value::String(s),
			serde_json::Value::Array(items) => Value::Seq(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(fields) => {
				Value::Map(fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
			}
		}
	}
}

impl From<Value> for serde_json::Value {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => serde_json::Value::Null,
			Value::Bool(b) => serde_json::Value::Bool(b),
			Value::Int(i) => serde_json::Value::from(i),
			Value::UInt(u) => serde_json::Value::from(u),
			Value::Float(f) => serde_json::Number::from_f64(f)
				.map(serde_json::Value::Number)
				.unwrap_or(serde_json::Value::Null),
			Value::Decimal(d) => serde_json::Value::String(d.normalize().to_string()),
			Value::String(s) => serde_json::Value::String(s),
			Value::Seq(items) => {
				serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
			}
			Value::Map(fields) => serde_json::Value::Object(
				fields
					.into_iter()
					.map(|(k, v)| (k, serde_json::Value::from(v)))
					.collect(),
			),
		}
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(b) => serializer.serialize_bool(*b),
			Value::Int(i) => serializer.serialize_i64(*i),
			Value::UInt(u) => serializer.serialize_u64(*u),
			Value::Float(f) => serializer.serialize_f64(*f),
			// Decimals travel as strings so no JSON float parser can touch them.
			Value::Decimal(d) => serializer.serialize_str(&d.normalize().to_string()),
			Value::String(s) => serializer.serialize_str(s),
			Value::Seq(items) => items.serialize(serializer),
			Value::Map(fields) => fields.serialize(serializer),
		}
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		serde_json::Value::deserialize(deserializer).map(Value::from)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v.into())
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::UInt(v.into())
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::UInt(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<Decimal> for Value {
	fn from(v: Decimal) -> Self {
		Value::Decimal(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Value::String(v.clone())
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(v: Vec<T>) -> Self {
		Value::Seq(v.into_iter().map(Into::into).collect())
	}
}

impl From<Map> for Value {
	fn from(v: Map) -> Self {
		Value::Map(v)
	}
}

/// `None` is an explicit JSON `null`, not an omitted field.
/// Use `Params::optional` for omission.
impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Null)
	}
}
