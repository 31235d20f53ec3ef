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

//! Typed parameters for endpoints that take more than a couple of fields
//!
//! Every `Option` field left as `None` is omitted from the request body. To
//! send an explicit `null`, build `Params` by hand and use `Client::request`.

use hiex_protocol::{Params, Value};
use rust_decimal::Decimal;

use crate::{
	error::ClientError,
	types::{AdditionalFields, ExchangeGroup},
};

/// Pagination window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Range {
	pub limit: Option<u32>,
	pub offset: Option<u32>,
}

impl Range {
	pub fn new(limit: u32, offset: u32) -> Self {
		Self {
			limit: Some(limit),
			offset: Some(offset),
		}
	}

	pub fn limit(limit: u32) -> Self {
		Self {
			limit: Some(limit),
			offset: None,
		}
	}

	pub(crate) fn apply(&self, params: Params) -> Params {
		params
			.optional("limit", self.limit)
			.optional("offset", self.offset)
	}
}

/// Filter for exchange lists
///
/// Shared by `admin/exchanges/list`, `application/exchanges/list` and
/// `user/exchanges/list`. `application_id` only means something to the admin
/// list and `user_id` is ignored by the user list, whose user is implied by
/// the auth key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeFilter {
	pub application_id: Option<i64>,
	pub user_id: Option<i64>,
	pub group: Option<ExchangeGroup>,
	/// Only exchanges in one of these statuses
	pub status_list: Option<Vec<i64>>,
	/// Leading characters of the exchange id
	pub short_exchange_id: Option<String>,
	pub range: Range,
}

impl ExchangeFilter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_range(mut self, range: Range) -> Self {
		self.range = range;
		self
	}

	pub fn with_group(mut self, group: ExchangeGroup) -> Self {
		self.group = Some(group);
		self
	}

	pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = i64>) -> Self {
		self.status_list = Some(statuses.into_iter().collect());
		self
	}

	pub fn with_short_exchange_id(mut self, prefix: impl Into<String>) -> Self {
		self.short_exchange_id = Some(prefix.into());
		self
	}

	pub fn for_user(mut self, user_id: i64) -> Self {
		self.user_id = Some(user_id);
		self
	}

	pub(crate) fn to_params(&self) -> Params {
		self.apply(Params::new())
	}

	pub(crate) fn apply(&self, params: Params) -> Params {
		let params = params
			.optional("application_id", self.application_id)
			.optional("user_id", self.user_id)
			.optional("group", self.group)
			.optional("status_list", self.status_list.clone())
			.optional("short_exchange_id", self.short_exchange_id.clone());
		self.range.apply(params)
	}
}

/// Admin user lookup: by id or by e-mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
	Id(i64),
	Email(String),
}

impl UserLookup {
	pub(crate) fn to_params(&self) -> Params {
		match self {
			UserLookup::Id(id) => Params::new().set("user_id", *id),
			UserLookup::Email(email) => Params::new().set("email", email),
		}
	}
}

/// Changes for `admin/user/update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
	pub email: Option<String>,
	pub name: Option<String>,
	pub lastname: Option<String>,
	pub kyc: Option<bool>,
}

impl UserUpdate {
	pub(crate) fn apply(&self, params: Params) -> Params {
		params
			.optional("email", self.email.clone())
			.optional("name", self.name.clone())
			.optional("lastname", self.lastname.clone())
			.optional("kyc", self.kyc)
	}
}

/// Changes for `admin/application/update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationUpdate {
	pub name: Option<String>,
	pub available_methods: Option<Vec<String>>,
	pub balance: Option<Decimal>,
	pub interest: Option<Decimal>,
	/// Generate a fresh key pair for the application
	pub update_keys: Option<bool>,
	pub notification_url: Option<String>,
}

impl ApplicationUpdate {
	pub(crate) fn apply(&self, params: Params) -> Params {
		params
			.optional("name", self.name.clone())
			.optional("available_methods", self.available_methods.clone())
			.optional("balance", self.balance)
			.optional("interest", self.interest)
			.optional("update_keys", self.update_keys)
			.optional("notification_url", self.notification_url.clone())
	}
}

/// Limits shared by pair creation and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSettings {
	pub active: Option<bool>,
	pub comment: Option<String>,
	pub interest: Option<Decimal>,
	pub min_amount1: Option<Decimal>,
	pub max_amount1: Option<Decimal>,
	pub min_amount2: Option<Decimal>,
	pub max_amount2: Option<Decimal>,
	pub kyc_required: Option<bool>,
	/// Convert deposits automatically
	pub swap_deposit: Option<bool>,
}

impl PairSettings {
	pub(crate) fn apply(&self, params: Params) -> Params {
		params
			.optional("active", self.active)
			.optional("comment", self.comment.clone())
			.optional("interest", self.interest)
			.optional("min_amount1", self.min_amount1)
			.optional("max_amount1", self.max_amount1)
			.optional("min_amount2", self.min_amount2)
			.optional("max_amount2", self.max_amount2)
			.optional("kyc_required", self.kyc_required)
			.optional("swap_deposit", self.swap_deposit)
	}
}

/// Parameters for `user/exchange/create`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExchange {
	pub currency1: String,
	pub currency2: String,
	/// Payout address or card number
	pub address: String,
	pub tag: Option<String>,
	/// Exactly one of the amounts is normally given
	pub amount1: Option<Decimal>,
	pub amount2: Option<Decimal>,
	/// Where the user lands after paying by card
	pub return_url: Option<String>,
	pub additional_fields: Option<AdditionalFields>,
}

impl NewExchange {
	pub fn new(
		currency1: impl Into<String>,
		currency2: impl Into<String>,
		address: impl Into<String>,
	) -> Self {
		Self {
			currency1: currency1.into(),
			currency2: currency2.into(),
			address: address.into(),
			tag: None,
			amount1: None,
			amount2: None,
			return_url: None,
			additional_fields: None,
		}
	}

	pub fn with_amount1(mut self, amount: Decimal) -> Self {
		self.amount1 = Some(amount);
		self
	}

	pub fn with_amount2(mut self, amount: Decimal) -> Self {
		self.amount2 = Some(amount);
		self
	}

	pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = Some(tag.into());
		self
	}

	pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
		self.return_url = Some(url.into());
		self
	}

	pub fn with_additional_fields(mut self, fields: AdditionalFields) -> Self {
		self.additional_fields = Some(fields);
		self
	}

	pub(crate) fn apply(&self, params: Params) -> Result<Params, ClientError> {
		let additional_fields = self
			.additional_fields
			.as_ref()
			.map(Value::from_serialize)
			.transpose()?;
		Ok(params
			.set("currency1", &self.currency1)
			.set("currency2", &self.currency2)
			.set("address", &self.address)
			.optional("tag", self.tag.clone())
			.optional("amount1", self.amount1)
			.optional("amount2", self.amount2)
			.optional("return_url", self.return_url.clone())
			.optional("additional_fields", additional_fields))
	}
}
