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

//! Request parameters with explicit omission
//!
//! An optional parameter the caller did not supply is `Field::Omitted` and
//! never reaches the wire. `Value::Null` is different: it is transmitted.

use crate::value::{Map, Value};

/// A single request parameter
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Field {
	/// Not supplied by the caller; stripped before signing
	#[default]
	Omitted,
	/// Transmitted as-is, `Value::Null` included
	Present(Value),
}

impl Field {
	pub fn is_omitted(&self) -> bool {
		matches!(self, Field::Omitted)
	}
}

impl<T: Into<Value>> From<Option<T>> for Field {
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => Field::Present(v.into()),
			None => Field::Omitted,
		}
	}
}

/// Parameter mapping for one endpoint call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
	fields: Vec<(String, Field)>,
}

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	/// Always-transmitted parameter. `Value::Null` is sent as `null`.
	pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key.into(), Field::Present(value.into()));
		self
	}

	/// Optional parameter: `None` is omitted from the payload entirely.
	pub fn optional<T: Into<Value>>(mut self, key: impl Into<String>, value: Option<T>) -> Self {
		self.insert(key.into(), value.into());
		self
	}

	/// Raw field, for callers that carry `Field` values through.
	pub fn field(mut self, key: impl Into<String>, field: Field) -> Self {
		self.insert(key.into(), field);
		self
	}

	/// Later writes to the same key replace earlier ones.
	pub fn insert(&mut self, key: String, field: Field) {
		if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
			slot.1 = field;
		} else {
			self.fields.push((key, field));
		}
	}

	pub fn get(&self, key: &str) -> Option<&Field> {
		self.fields.iter().find(|(k, _)| k == key).map(|(_, f)| f)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// The transmitted payload: every omitted field dropped.
	pub fn into_payload(self) -> Map {
		self.fields
			.into_iter()
			.filter_map(|(key, field)| match field {
				Field::Present(value) => Some((key, value)),
				Field::Omitted => None,
			})
			.collect()
	}
}

impl<K: Into<String>, V: Into<Field>> FromIterator<(K, V)> for Params {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Params::new();
		for (k, v) in iter {
			params.insert(k.into(), v.into());
		}
		params
	}
}

impl From<Map> for Params {
	fn from(map: Map) -> Self {
		map.into_iter()
			.map(|(k, v)| (k, Field::Present(v)))
			.collect()
	}
}
