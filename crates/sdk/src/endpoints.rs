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

//! Typed endpoint facade
//!
//! Thin wrappers over `Client::request`: each builds its parameters, calls
//! one endpoint and decodes the record or list the endpoint returns. The
//! `admin_*` calls need an application with administrative rights.

use hiex_protocol::{Map, Params, Value};
use rust_decimal::Decimal;

use crate::{
	client::{Client, SyncClient},
	error::ClientError,
	requests::{
		ApplicationUpdate, ExchangeFilter, NewExchange, PairSettings, Range, UserLookup, UserUpdate,
	},
	transport::Transport,
	types::{
		Application, Auth, Currency, Exchange, Log, Page, Pair, PairAmount, Payment, Referral, Stat,
		User, Verification, VerificationService, page, record,
	},
};

/// Endpoint paths
pub mod paths {
	pub const ADMIN_COINS_LIST: &str = "admin/coins/list";
	pub const ADMIN_EXCHANGE_GET: &str = "admin/exchange/get";
	pub const ADMIN_EXCHANGE_UPDATE: &str = "admin/exchange/update";
	pub const ADMIN_EXCHANGES_LIST: &str = "admin/exchanges/list";
	pub const ADMIN_LOGS_LIST: &str = "admin/logs/list";
	pub const ADMIN_LOGS_GET: &str = "admin/logs/get";
	pub const ADMIN_STATS_GET: &str = "admin/stats/get";
	pub const ADMIN_APPLICATIONS_LIST: &str = "admin/applications/list";
	pub const ADMIN_APPLICATION_CREATE: &str = "admin/application/create";
	pub const ADMIN_APPLICATION_DETAILS: &str = "admin/application/details";
	pub const ADMIN_APPLICATION_DELETE: &str = "admin/application/delete";
	pub const ADMIN_APPLICATION_UPDATE: &str = "admin/application/update";
	pub const ADMIN_PAIRS_LIST: &str = "admin/pairs/list";
	pub const ADMIN_PAIR_CREATE: &str = "admin/pair/create";
	pub const ADMIN_PAIR_UPDATE: &str = "admin/pair/update";
	pub const ADMIN_PAIR_DELETE: &str = "admin/pair/delete";
	pub const ADMIN_USER_DETAILS: &str = "admin/user/details";
	pub const ADMIN_USER_UPDATE: &str = "admin/user/update";
	pub const ADMIN_SETTING: &str = "admin/setting";

	pub const APPLICATION_GET: &str = "application/get";
	pub const APPLICATION_STATS_LIST: &str = "application/stats/list";
	pub const APPLICATION_EXCHANGES_LIST: &str = "application/exchanges/list";
	pub const APPLICATION_USERS_LIST: &str = "application/users/list";
	pub const APPLICATION_INTEREST_SET: &str = "application/interest/set";

	pub const PAIRS_LIST: &str = "pairs/list";
	pub const PAIR_AMOUNT: &str = "pair/amount";
	pub const USER_AUTH: &str = "user/auth";
	pub const USER_AUTH_CODE: &str = "user/auth/code";
	pub const USER_GET: &str = "user/get";
	pub const USER_LOGOUT: &str = "user/logout";
	pub const USER_KYC_GET: &str = "user/kyc/get";
	pub const USER_KYC_METHODS_LIST: &str = "user/kyc/methods/list";
	pub const USER_DATA_SAVE: &str = "user/data/save";
	pub const USER_REFERRALS_LIST: &str = "user/referrals/list";
	pub const USER_EXCHANGES_LIST: &str = "user/exchanges/list";
	pub const USER_EXCHANGE_CREATE: &str = "user/exchange/create";
	pub const USER_EXCHANGE_CANCEL: &str = "user/exchange/cancel";
	pub const EXCHANGE_GET: &str = "exchange/get";
	pub const EXCHANGE_CANCEL: &str = "exchange/cancel";
	pub const EXCHANGE_PAYMENT_GET: &str = "exchange/payment/get";
}

fn pair_params(currency1: Option<&str>, currency2: Option<&str>) -> Params {
	Params::new()
		.optional("currency1", currency1)
		.optional("currency2", currency2)
}

impl<T: Transport> Client<T> {
	// Administration

	pub async fn admin_coins_list(&self) -> Result<Page<Currency>, ClientError> {
		let mut resp = self.request(paths::ADMIN_COINS_LIST, Params::new()).await?;
		page(&mut resp, "coins")
	}

	pub async fn admin_exchange_get(&self, exchange_id: &str) -> Result<Exchange, ClientError> {
		let params = Params::new().set("exchange_id", exchange_id);
		let mut resp = self.request(paths::ADMIN_EXCHANGE_GET, params).await?;
		record(&mut resp, "exchange")
	}

	/// Move an exchange to the given processing step.
	pub async fn admin_exchange_update(
		&self,
		exchange_id: &str,
		step: Option<i64>,
	) -> Result<Exchange, ClientError> {
		let params = Params::new()
			.set("exchange_id", exchange_id)
			.optional("step", step);
		let mut resp = self.request(paths::ADMIN_EXCHANGE_UPDATE, params).await?;
		record(&mut resp, "exchange")
	}

	pub async fn admin_exchanges_list(
		&self,
		filter: &ExchangeFilter,
	) -> Result<Page<Exchange>, ClientError> {
		let mut resp = self
			.request(paths::ADMIN_EXCHANGES_LIST, filter.to_params())
			.await?;
		page(&mut resp, "exchanges")
	}

	pub async fn admin_logs_list(&self) -> Result<Page<Log>, ClientError> {
		let mut resp = self.request(paths::ADMIN_LOGS_LIST, Params::new()).await?;
		page(&mut resp, "logs")
	}

	/// Download a log file. The body is plain text and is not validated.
	pub async fn admin_logs_get(&self, name: &str) -> Result<String, ClientError> {
		self.request_raw(paths::ADMIN_LOGS_GET, Params::new().set("name", name))
			.await
	}

	pub async fn admin_stats_get(
		&self,
		application_id: Option<i64>,
		range: Range,
	) -> Result<Page<Stat>, ClientError> {
		let params = range.apply(Params::new().optional("application_id", application_id));
		let mut resp = self.request(paths::ADMIN_STATS_GET, params).await?;
		page(&mut resp, "stats")
	}

	pub async fn admin_applications_list(&self) -> Result<Page<Application>, ClientError> {
		let mut resp = self
			.request(paths::ADMIN_APPLICATIONS_LIST, Params::new())
			.await?;
		page(&mut resp, "applications")
	}

	pub async fn admin_application_create(
		&self,
		name: &str,
		available_methods: Vec<String>,
		interest: Decimal,
	) -> Result<Application, ClientError> {
		let params = Params::new()
			.set("name", name)
			.set("available_methods", available_methods)
			.set("interest", interest);
		let mut resp = self.request(paths::ADMIN_APPLICATION_CREATE, params).await?;
		record(&mut resp, "application")
	}

	pub async fn admin_application_details(
		&self,
		application_id: i64,
	) -> Result<Application, ClientError> {
		let params = Params::new().set("application_id", application_id);
		let mut resp = self.request(paths::ADMIN_APPLICATION_DETAILS, params).await?;
		record(&mut resp, "application")
	}

	pub async fn admin_application_delete(&self, application_id: i64) -> Result<(), ClientError> {
		let params = Params::new().set("application_id", application_id);
		self.request(paths::ADMIN_APPLICATION_DELETE, params).await?;
		Ok(())
	}

	pub async fn admin_application_update(
		&self,
		application_id: i64,
		update: &ApplicationUpdate,
	) -> Result<Application, ClientError> {
		let params = update.apply(Params::new().set("application_id", application_id));
		let mut resp = self.request(paths::ADMIN_APPLICATION_UPDATE, params).await?;
		record(&mut resp, "application")
	}

	pub async fn admin_pairs_list(
		&self,
		currency1: Option<&str>,
		currency2: Option<&str>,
	) -> Result<Page<Pair>, ClientError> {
		let mut resp = self
			.request(paths::ADMIN_PAIRS_LIST, pair_params(currency1, currency2))
			.await?;
		page(&mut resp, "pairs")
	}

	pub async fn admin_pair_create(
		&self,
		currency1: &str,
		currency2: &str,
		settings: &PairSettings,
	) -> Result<Pair, ClientError> {
		let params = settings.apply(pair_params(Some(currency1), Some(currency2)));
		let mut resp = self.request(paths::ADMIN_PAIR_CREATE, params).await?;
		record(&mut resp, "pair")
	}

	pub async fn admin_pair_update(
		&self,
		currency1: &str,
		currency2: &str,
		settings: &PairSettings,
	) -> Result<Pair, ClientError> {
		let params = settings.apply(pair_params(Some(currency1), Some(currency2)));
		let mut resp = self.request(paths::ADMIN_PAIR_UPDATE, params).await?;
		record(&mut resp, "pair")
	}

	pub async fn admin_pair_delete(&self, currency1: &str, currency2: &str) -> Result<(), ClientError> {
		self.request(
			paths::ADMIN_PAIR_DELETE,
			pair_params(Some(currency1), Some(currency2)),
		)
		.await?;
		Ok(())
	}

	pub async fn admin_user_details(&self, lookup: &UserLookup) -> Result<User, ClientError> {
		let mut resp = self
			.request(paths::ADMIN_USER_DETAILS, lookup.to_params())
			.await?;
		record(&mut resp, "user")
	}

	pub async fn admin_user_update(
		&self,
		lookup: &UserLookup,
		update: &UserUpdate,
	) -> Result<User, ClientError> {
		let params = update.apply(lookup.to_params());
		let mut resp = self.request(paths::ADMIN_USER_UPDATE, params).await?;
		record(&mut resp, "user")
	}

	/// Read system settings, changing the ones given in `changes`.
	pub async fn admin_setting(&self, changes: Params) -> Result<Map, ClientError> {
		let mut resp = self.request(paths::ADMIN_SETTING, changes).await?;
		match resp.remove("hisettings") {
			Some(Value::Map(settings)) => Ok(settings),
			Some(Value::Null) | None => Ok(Map::new()),
			Some(_) => Err(ClientError::decode("hisettings", "expected an object")),
		}
	}

	// The calling application

	pub async fn application_get(&self) -> Result<Application, ClientError> {
		let mut resp = self.request(paths::APPLICATION_GET, Params::new()).await?;
		record(&mut resp, "application")
	}

	pub async fn application_stats_list(&self, range: Range) -> Result<Page<Stat>, ClientError> {
		let mut resp = self
			.request(paths::APPLICATION_STATS_LIST, range.apply(Params::new()))
			.await?;
		page(&mut resp, "stats")
	}

	/// Exchanges made through this application. `application_id` is not sent.
	pub async fn application_exchanges_list(
		&self,
		filter: &ExchangeFilter,
	) -> Result<Page<Exchange>, ClientError> {
		let filter = ExchangeFilter {
			application_id: None,
			..filter.clone()
		};
		let mut resp = self
			.request(paths::APPLICATION_EXCHANGES_LIST, filter.to_params())
			.await?;
		page(&mut resp, "exchanges")
	}

	pub async fn application_users_list(&self, range: Range) -> Result<Page<User>, ClientError> {
		let mut resp = self
			.request(paths::APPLICATION_USERS_LIST, range.apply(Params::new()))
			.await?;
		page(&mut resp, "users")
	}

	/// Change the share the application takes from exchanges, returning the
	/// value the server stored.
	pub async fn application_interest_set(&self, interest: Decimal) -> Result<Decimal, ClientError> {
		let params = Params::new().set("interest", interest);
		let mut resp = self.request(paths::APPLICATION_INTEREST_SET, params).await?;
		record(&mut resp, "interest")
	}

	// Application users

	pub async fn pairs_list(
		&self,
		currency1: Option<&str>,
		currency2: Option<&str>,
	) -> Result<Page<Pair>, ClientError> {
		let mut resp = self
			.request(paths::PAIRS_LIST, pair_params(currency1, currency2))
			.await?;
		page(&mut resp, "pairs")
	}

	/// Quote a pair: give `amount1` to learn `amount2`, or the other way round.
	pub async fn pair_amount(
		&self,
		currency1: &str,
		currency2: &str,
		amount1: Option<Decimal>,
		amount2: Option<Decimal>,
	) -> Result<PairAmount, ClientError> {
		let params = pair_params(Some(currency1), Some(currency2))
			.optional("amount1", amount1)
			.optional("amount2", amount2);
		let resp = self.request(paths::PAIR_AMOUNT, params).await?;
		Value::Map(resp)
			.decode()
			.map_err(|e| ClientError::decode("pair amount", e))
	}

	/// Start an e-mail code authorization.
	pub async fn user_auth(&self, email: &str) -> Result<Auth, ClientError> {
		let mut resp = self
			.request(paths::USER_AUTH, Params::new().set("email", email))
			.await?;
		record(&mut resp, "auth")
	}

	pub async fn user_auth_code(&self, auth_key: &str, code: &str) -> Result<Auth, ClientError> {
		let params = Params::new().set("auth_key", auth_key).set("code", code);
		let mut resp = self.request(paths::USER_AUTH_CODE, params).await?;
		record(&mut resp, "auth")
	}

	pub async fn user_get(&self, auth_key: &str) -> Result<User, ClientError> {
		let mut resp = self
			.request(paths::USER_GET, Params::new().set("auth_key", auth_key))
			.await?;
		record(&mut resp, "user")
	}

	pub async fn user_logout(&self, auth_key: &str) -> Result<(), ClientError> {
		self.request(paths::USER_LOGOUT, Params::new().set("auth_key", auth_key))
			.await?;
		Ok(())
	}

	/// Start an identity verification with one of the methods from
	/// `user_kyc_methods_list`.
	pub async fn user_kyc_get(
		&self,
		auth_key: &str,
		method: &str,
		option: Option<&str>,
		return_url: Option<&str>,
	) -> Result<Verification, ClientError> {
		let params = Params::new()
			.set("auth_key", auth_key)
			.set("method", method)
			.optional("option", option)
			.optional("return_url", return_url);
		let mut resp = self.request(paths::USER_KYC_GET, params).await?;
		record(&mut resp, "verification")
	}

	pub async fn user_kyc_methods_list(
		&self,
		auth_key: &str,
	) -> Result<Page<VerificationService>, ClientError> {
		let params = Params::new().set("auth_key", auth_key);
		let mut resp = self.request(paths::USER_KYC_METHODS_LIST, params).await?;
		page(&mut resp, "methods")
	}

	/// Store application data on the user. Each field of `data` is saved
	/// under its own key and shows up in `User::data`.
	pub async fn user_data_save(&self, auth_key: &str, data: Params) -> Result<(), ClientError> {
		self.request(paths::USER_DATA_SAVE, data.set("auth_key", auth_key))
			.await?;
		Ok(())
	}

	pub async fn user_referrals_list(
		&self,
		auth_key: &str,
		range: Range,
	) -> Result<Page<Referral>, ClientError> {
		let params = range.apply(Params::new().set("auth_key", auth_key));
		let mut resp = self.request(paths::USER_REFERRALS_LIST, params).await?;
		page(&mut resp, "referrals")
	}

	/// The user's exchanges. `application_id` and `user_id` in the filter are
	/// not sent; the auth key decides whose exchanges these are.
	pub async fn user_exchanges_list(
		&self,
		auth_key: &str,
		filter: &ExchangeFilter,
	) -> Result<Page<Exchange>, ClientError> {
		let filter = ExchangeFilter {
			application_id: None,
			user_id: None,
			..filter.clone()
		};
		let params = filter.apply(Params::new().set("auth_key", auth_key));
		let mut resp = self.request(paths::USER_EXCHANGES_LIST, params).await?;
		page(&mut resp, "exchanges")
	}

	pub async fn user_exchange_create(
		&self,
		auth_key: &str,
		exchange: &NewExchange,
	) -> Result<Exchange, ClientError> {
		let params = exchange.apply(Params::new().set("auth_key", auth_key))?;
		let mut resp = self.request(paths::USER_EXCHANGE_CREATE, params).await?;
		record(&mut resp, "exchange")
	}

	pub async fn user_exchange_cancel(
		&self,
		auth_key: &str,
		exchange_id: &str,
	) -> Result<(), ClientError> {
		let params = Params::new()
			.set("auth_key", auth_key)
			.set("exchange_id", exchange_id);
		self.request(paths::USER_EXCHANGE_CANCEL, params).await?;
		Ok(())
	}

	/// Fetch an exchange, on behalf of a user when `auth_key` is given.
	pub async fn exchange_get(
		&self,
		exchange_id: &str,
		auth_key: Option<&str>,
	) -> Result<Exchange, ClientError> {
		let params = Params::new()
			.set("exchange_id", exchange_id)
			.optional("auth_key", auth_key);
		let mut resp = self.request(paths::EXCHANGE_GET, params).await?;
		record(&mut resp, "exchange")
	}

	/// Cancel an exchange without a user session.
	pub async fn exchange_cancel(&self, exchange_id: &str) -> Result<(), ClientError> {
		let params = Params::new().set("exchange_id", exchange_id);
		self.request(paths::EXCHANGE_CANCEL, params).await?;
		Ok(())
	}

	/// Payment details for funding an exchange
	pub async fn exchange_payment_get(&self, exchange_id: &str) -> Result<Payment, ClientError> {
		let params = Params::new().set("exchange_id", exchange_id);
		let mut resp = self.request(paths::EXCHANGE_PAYMENT_GET, params).await?;
		record(&mut resp, "payment")
	}
}

impl<T: Transport> SyncClient<T> {
	pub fn admin_coins_list(&self) -> Result<Page<Currency>, ClientError> {
		self.block_on(self.client().admin_coins_list())
	}

	pub fn admin_exchange_get(&self, exchange_id: &str) -> Result<Exchange, ClientError> {
		self.block_on(self.client().admin_exchange_get(exchange_id))
	}

	pub fn admin_exchange_update(
		&self,
		exchange_id: &str,
		step: Option<i64>,
	) -> Result<Exchange, ClientError> {
		self.block_on(self.client().admin_exchange_update(exchange_id, step))
	}

	pub fn admin_exchanges_list(
		&self,
		filter: &ExchangeFilter,
	) -> Result<Page<Exchange>, ClientError> {
		self.block_on(self.client().admin_exchanges_list(filter))
	}

	pub fn admin_logs_list(&self) -> Result<Page<Log>, ClientError> {
		self.block_on(self.client().admin_logs_list())
	}

	pub fn admin_logs_get(&self, name: &str) -> Result<String, ClientError> {
		self.block_on(self.client().admin_logs_get(name))
	}

	pub fn admin_stats_get(
		&self,
		application_id: Option<i64>,
		range: Range,
	) -> Result<Page<Stat>, ClientError> {
		self.block_on(self.client().admin_stats_get(application_id, range))
	}

	pub fn admin_applications_list(&self) -> Result<Page<Application>, ClientError> {
		self.block_on(self.client().admin_applications_list())
	}

	pub fn admin_application_create(
		&self,
		name: &str,
		available_methods: Vec<String>,
		interest: Decimal,
	) -> Result<Application, ClientError> {
		self.block_on(
			self.client()
				.admin_application_create(name, available_methods, interest),
		)
	}

	pub fn admin_application_details(&self, application_id: i64) -> Result<Application, ClientError> {
		self.block_on(self.client().admin_application_details(application_id))
	}

	pub fn admin_application_delete(&self, application_id: i64) -> Result<(), ClientError> {
		self.block_on(self.client().admin_application_delete(application_id))
	}

	pub fn admin_application_update(
		&self,
		application_id: i64,
		update: &ApplicationUpdate,
	) -> Result<Application, ClientError> {
		self.block_on(self.client().admin_application_update(application_id, update))
	}

	pub fn admin_pairs_list(
		&self,
		currency1: Option<&str>,
		currency2: Option<&str>,
	) -> Result<Page<Pair>, ClientError> {
		self.block_on(self.client().admin_pairs_list(currency1, currency2))
	}

	pub fn admin_pair_create(
		&self,
		currency1: &str,
		currency2: &str,
		settings: &PairSettings,
	) -> Result<Pair, ClientError> {
		self.block_on(self.client().admin_pair_create(currency1, currency2, settings))
	}

	pub fn admin_pair_update(
		&self,
		currency1: &str,
		currency2: &str,
		settings: &PairSettings,
	) -> Result<Pair, ClientError> {
		self.block_on(self.client().admin_pair_update(currency1, currency2, settings))
	}

	pub fn admin_pair_delete(&self, currency1: &str, currency2: &str) -> Result<(), ClientError> {
		self.block_on(self.client().admin_pair_delete(currency1, currency2))
	}

	pub fn admin_user_details(&self, lookup: &UserLookup) -> Result<User, ClientError> {
		self.block_on(self.client().admin_user_details(lookup))
	}

	pub fn admin_user_update(
		&self,
		lookup: &UserLookup,
		update: &UserUpdate,
	) -> Result<User, ClientError> {
		self.block_on(self.client().admin_user_update(lookup, update))
	}

	pub fn admin_setting(&self, changes: Params) -> Result<Map, ClientError> {
		self.block_on(self.client().admin_setting(changes))
	}

	pub fn application_get(&self) -> Result<Application, ClientError> {
		self.block_on(self.client().application_get())
	}

	pub fn application_stats_list(&self, range: Range) -> Result<Page<Stat>, ClientError> {
		self.block_on(self.client().application_stats_list(range))
	}

	pub fn application_exchanges_list(
		&self,
		filter: &ExchangeFilter,
	) -> Result<Page<Exchange>, ClientError> {
		self.block_on(self.client().application_exchanges_list(filter))
	}

	pub fn application_users_list(&self, range: Range) -> Result<Page<User>, ClientError> {
		self.block_on(self.client().application_users_list(range))
	}

	pub fn application_interest_set(&self, interest: Decimal) -> Result<Decimal, ClientError> {
		self.block_on(self.client().application_interest_set(interest))
	}

	pub fn pairs_list(
		&self,
		currency1: Option<&str>,
		currency2: Option<&str>,
	) -> Result<Page<Pair>, ClientError> {
		self.block_on(self.client().pairs_list(currency1, currency2))
	}

	pub fn pair_amount(
		&self,
		currency1: &str,
		currency2: &str,
		amount1: Option<Decimal>,
		amount2: Option<Decimal>,
	) -> Result<PairAmount, ClientError> {
		self.block_on(
			self.client()
				.pair_amount(currency1, currency2, amount1, amount2),
		)
	}

	pub fn user_auth(&self, email: &str) -> Result<Auth, ClientError> {
		self.block_on(self.client().user_auth(email))
	}

	pub fn user_auth_code(&self, auth_key: &str, code: &str) -> Result<Auth, ClientError> {
		self.block_on(self.client().user_auth_code(auth_key, code))
	}

	pub fn user_get(&self, auth_key: &str) -> Result<User, ClientError> {
		self.block_on(self.client().user_get(auth_key))
	}

	pub fn user_logout(&self, auth_key: &str) -> Result<(), ClientError> {
		self.block_on(self.client().user_logout(auth_key))
	}

	pub fn user_kyc_get(
		&self,
		auth_key: &str,
		method: &str,
		option: Option<&str>,
		return_url: Option<&str>,
	) -> Result<Verification, ClientError> {
		self.block_on(
			self.client()
				.user_kyc_get(auth_key, method, option, return_url),
		)
	}

	pub fn user_kyc_methods_list(
		&self,
		auth_key: &str,
	) -> Result<Page<VerificationService>, ClientError> {
		self.block_on(self.client().user_kyc_methods_list(auth_key))
	}

	pub fn user_data_save(&self, auth_key: &str, data: Params) -> Result<(), ClientError> {
		self.block_on(self.client().user_data_save(auth_key, data))
	}

	pub fn user_referrals_list(
		&self,
		auth_key: &str,
		range: Range,
	) -> Result<Page<Referral>, ClientError> {
		self.block_on(self.client().user_referrals_list(auth_key, range))
	}

	pub fn user_exchanges_list(
		&self,
		auth_key: &str,
		filter: &ExchangeFilter,
	) -> Result<Page<Exchange>, ClientError> {
		self.block_on(self.client().user_exchanges_list(auth_key, filter))
	}

	pub fn user_exchange_create(
		&self,
		auth_key: &str,
		exchange: &NewExchange,
	) -> Result<Exchange, ClientError> {
		self.block_on(self.client().user_exchange_create(auth_key, exchange))
	}

	pub fn user_exchange_cancel(&self, auth_key: &str, exchange_id: &str) -> Result<(), ClientError> {
		self.block_on(self.client().user_exchange_cancel(auth_key, exchange_id))
	}

	pub fn exchange_get(
		&self,
		exchange_id: &str,
		auth_key: Option<&str>,
	) -> Result<Exchange, ClientError> {
		self.block_on(self.client().exchange_get(exchange_id, auth_key))
	}

	pub fn exchange_cancel(&self, exchange_id: &str) -> Result<(), ClientError> {
		self.block_on(self.client().exchange_cancel(exchange_id))
	}

	pub fn exchange_payment_get(&self, exchange_id: &str) -> Result<Payment, ClientError> {
		self.block_on(self.client().exchange_payment_get(exchange_id))
	}
}

impl Pair {
	/// Quote this pair through `client`.
	pub async fn amount<T: Transport>(
		&self,
		client: &Client<T>,
		amount1: Option<Decimal>,
		amount2: Option<Decimal>,
	) -> Result<PairAmount, ClientError> {
		client
			.pair_amount(&self.currency1.code, &self.currency2.code, amount1, amount2)
			.await
	}
}
