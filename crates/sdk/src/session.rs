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

//! Handles that carry a user's auth key between calls
//!
//! ```text
//! client.user_auth(email) -> AuthFlow --submit_code--> allowed
//!                                                     |
//!                                                     v
//!                            UserSession --exchange_create--> ExchangeHandle
//! ```

use hiex_protocol::Params;

use crate::{
	client::Client,
	error::ClientError,
	requests::{ExchangeFilter, NewExchange, Range},
	transport::{HttpTransport, Transport},
	types::{Auth, Exchange, Page, Payment, Referral, User, Verification, VerificationService},
};

/// E-mail code authorization in progress
#[derive(Debug)]
pub struct AuthFlow<'a, T: Transport = HttpTransport> {
	client: &'a Client<T>,
	auth: Auth,
}

impl<'a, T: Transport> AuthFlow<'a, T> {
	pub fn new(client: &'a Client<T>, auth: Auth) -> Self {
		Self { client, auth }
	}

	/// Request a code for `email`.
	pub async fn start(client: &'a Client<T>, email: &str) -> Result<Self, ClientError> {
		let auth = client.user_auth(email).await?;
		Ok(Self::new(client, auth))
	}

	pub fn auth(&self) -> &Auth {
		&self.auth
	}

	pub fn is_allowed(&self) -> bool {
		self.auth.allow
	}

	pub fn attempts_left(&self) -> i64 {
		self.auth.code_attempt
	}

	/// Submit the code from the e-mail and refresh the authorization state.
	pub async fn submit_code(&mut self, code: &str) -> Result<&Auth, ClientError> {
		self.auth = self
			.client
			.user_auth_code(&self.auth.auth_key, code)
			.await?;
		Ok(&self.auth)
	}

	/// Load the authorized user.
	pub async fn user(&self) -> Result<User, ClientError> {
		self.client.user_get(&self.auth.auth_key).await
	}

	/// Session for the authorized user.
	pub fn into_session(self) -> UserSession<'a, T> {
		UserSession::new(self.client, self.auth.auth_key)
	}
}

/// Calls made on behalf of one authorized user
#[derive(Debug)]
pub struct UserSession<'a, T: Transport = HttpTransport> {
	client: &'a Client<T>,
	auth_key: String,
}

impl<T: Transport> Clone for UserSession<'_, T> {
	fn clone(&self) -> Self {
		Self {
			client: self.client,
			auth_key: self.auth_key.clone(),
		}
	}
}

impl<'a, T: Transport> UserSession<'a, T> {
	pub fn new(client: &'a Client<T>, auth_key: impl Into<String>) -> Self {
		Self {
			client,
			auth_key: auth_key.into(),
		}
	}

	pub fn auth_key(&self) -> &str {
		&self.auth_key
	}

	pub async fn user(&self) -> Result<User, ClientError> {
		self.client.user_get(&self.auth_key).await
	}

	/// End the session on the server. The auth key is unusable afterwards.
	pub async fn logout(self) -> Result<(), ClientError> {
		self.client.user_logout(&self.auth_key).await
	}

	pub async fn referrals(&self, range: Range) -> Result<Page<Referral>, ClientError> {
		self.client.user_referrals_list(&self.auth_key, range).await
	}

	pub async fn exchanges(&self, filter: &ExchangeFilter) -> Result<Page<Exchange>, ClientError> {
		self.client.user_exchanges_list(&self.auth_key, filter).await
	}

	/// Verification methods the user can pick from.
	pub async fn kyc_methods(&self) -> Result<Page<VerificationService>, ClientError> {
		self.client.user_kyc_methods_list(&self.auth_key).await
	}

	pub async fn kyc_get(
		&self,
		method: &str,
		option: Option<&str>,
		return_url: Option<&str>,
	) -> Result<Verification, ClientError> {
		self.client
			.user_kyc_get(&self.auth_key, method, option, return_url)
			.await
	}

	pub async fn data_save(&self, data: Params) -> Result<(), ClientError> {
		self.client.user_data_save(&self.auth_key, data).await
	}

	pub async fn exchange(&self, exchange_id: &str) -> Result<ExchangeHandle<'a, T>, ClientError> {
		let exchange = self
			.client
			.exchange_get(exchange_id, Some(&self.auth_key))
			.await?;
		Ok(ExchangeHandle::new(self.clone(), exchange))
	}

	pub async fn exchange_create(
		&self,
		request: &NewExchange,
	) -> Result<ExchangeHandle<'a, T>, ClientError> {
		let exchange = self
			.client
			.user_exchange_create(&self.auth_key, request)
			.await?;
		Ok(ExchangeHandle::new(self.clone(), exchange))
	}

	pub async fn exchange_cancel(&self, exchange_id: &str) -> Result<(), ClientError> {
		self.client
			.user_exchange_cancel(&self.auth_key, exchange_id)
			.await
	}
}

/// An exchange owned by a session
#[derive(Debug)]
pub struct ExchangeHandle<'a, T: Transport = HttpTransport> {
	session: UserSession<'a, T>,
	exchange: Exchange,
}

impl<'a, T: Transport> ExchangeHandle<'a, T> {
	pub fn new(session: UserSession<'a, T>, exchange: Exchange) -> Self {
		Self { session, exchange }
	}

	/// Last known state
	pub fn exchange(&self) -> &Exchange {
		&self.exchange
	}

	pub fn into_exchange(self) -> Exchange {
		self.exchange
	}

	/// Fetch the current state from the server.
	pub async fn reload(&mut self) -> Result<&Exchange, ClientError> {
		self.exchange = self
			.session
			.client
			.exchange_get(&self.exchange.exchange_id, Some(&self.session.auth_key))
			.await?;
		Ok(&self.exchange)
	}

	pub async fn payment(&self) -> Result<Payment, ClientError> {
		self.session
			.client
			.exchange_payment_get(&self.exchange.exchange_id)
			.await
	}

	pub async fn cancel(&self) -> Result<(), ClientError> {
		self.session.exchange_cancel(&self.exchange.exchange_id).await
	}
}
