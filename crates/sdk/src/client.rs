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

use std::{future::Future, sync::Arc};

use hiex_protocol::{
	CallOptions, Credentials, EnvelopeBuilder, Map, Params, ResponseValidator,
};
use tracing::debug;

use crate::{
	config::ClientConfig,
	error::ClientError,
	transport::{HttpTransport, Transport},
};

/// Client for the HiEx API
///
/// Every call goes through the same envelope: parameters are signed with the
/// application credentials, sent by the transport, and the response is
/// validated before any field of it is looked at.
///
/// The client holds no mutable state and can be shared between tasks.
#[derive(Debug, Clone)]
pub struct Client<T: Transport = HttpTransport> {
	envelope: EnvelopeBuilder,
	validator: ResponseValidator,
	transport: T,
	config: ClientConfig,
}

impl Client<HttpTransport> {
	/// Create a client with the default configuration
	pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
		Self::with_config(credentials, ClientConfig::default())
	}

	/// Create a client with custom configuration
	pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, ClientError> {
		let transport = HttpTransport::new(config.timeout())?;
		Self::with_transport(credentials, config, transport)
	}
}

impl<T: Transport> Client<T> {
	/// Create a client over any transport
	pub fn with_transport(
		credentials: Credentials,
		config: ClientConfig,
		transport: T,
	) -> Result<Self, ClientError> {
		if config.base_url.trim().is_empty() {
			return Err(ClientError::Configuration("base_url must not be empty".to_string()));
		}
		if credentials.identity_key().is_empty() {
			return Err(ClientError::Configuration(
				"public key must not be empty".to_string(),
			));
		}

		let credentials = Arc::new(credentials);
		let envelope =
			EnvelopeBuilder::new(config.base_url.clone(), credentials.clone()).with_lang(config.lang.clone());
		let validator = ResponseValidator::new(credentials);

		Ok(Self {
			envelope,
			validator,
			transport,
			config,
		})
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn envelope(&self) -> &EnvelopeBuilder {
		&self.envelope
	}

	/// Validator bound to this client's credentials, also usable for
	/// incoming notifications.
	pub fn validator(&self) -> &ResponseValidator {
		&self.validator
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// A copy of this client that asks for responses in `lang`.
	///
	/// Credentials and the transport are shared with `self`, so this is cheap
	/// enough to call per request. `None` stops sending a language at all.
	/// `CallOptions` given to `request_with` still take precedence.
	pub fn with_lang(&self, lang: Option<String>) -> Self
	where
		T: Clone,
	{
		let mut client = self.clone();
		client.envelope = client.envelope.with_lang(lang.clone());
		client.config.lang = lang;
		client
	}

	/// Call an endpoint and return the validated payload
	pub async fn request(&self, endpoint: &str, params: Params) -> Result<Map, ClientError> {
		self.request_with(endpoint, params, &CallOptions::default())
			.await
	}

	/// Call an endpoint with per-call options
	pub async fn request_with(
		&self,
		endpoint: &str,
		params: Params,
		options: &CallOptions,
	) -> Result<Map, ClientError> {
		let request = self.envelope.build_now(endpoint, params, options)?;
		let response = self.transport.send(&request).await?;

		let payload = self.validator.validate(&response).inspect_err(|e| {
			debug!(target: "client", endpoint, error = %e, "Call failed");
		})?;

		debug!(target: "client", endpoint, status = response.status, "Call succeeded");
		Ok(payload)
	}

	/// Call an endpoint whose response is not a signed JSON document
	///
	/// The request is signed as usual; the body is returned as-is without any
	/// validation.
	pub async fn request_raw(&self, endpoint: &str, params: Params) -> Result<String, ClientError> {
		let request = self
			.envelope
			.build_now(endpoint, params, &CallOptions::default())?;
		let response = self.transport.send(&request).await?;
		debug!(
			target: "client",
			endpoint,
			status = response.status,
			bytes = response.body.len(),
			"Raw call finished"
		);
		Ok(response.body)
	}
}

/// Synchronous client wrapper
///
/// This wraps the async client and runs it in an owned tokio runtime.
/// It must not be used from inside an async context; prefer `Client` there.
#[derive(Debug)]
pub struct SyncClient<T: Transport = HttpTransport> {
	client: Client<T>,
	runtime: tokio::runtime::Runtime,
}

impl SyncClient<HttpTransport> {
	/// Create a synchronous client with the default configuration
	pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
		Self::from_client(Client::new(credentials)?)
	}

	/// Create a synchronous client with custom configuration
	pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, ClientError> {
		Self::from_client(Client::with_config(credentials, config)?)
	}
}

impl<T: Transport> SyncClient<T> {
	pub fn from_client(client: Client<T>) -> Result<Self, ClientError> {
		let runtime = tokio::runtime::Runtime::new()
			.map_err(|e| ClientError::Configuration(format!("Failed to create tokio runtime: {}", e)))?;
		Ok(Self { client, runtime })
	}

	/// The wrapped async client
	pub fn client(&self) -> &Client<T> {
		&self.client
	}

	pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
		self.runtime.block_on(future)
	}

	/// Call an endpoint (synchronous)
	pub fn request(&self, endpoint: &str, params: Params) -> Result<Map, ClientError> {
		self.block_on(self.client.request(endpoint, params))
	}

	/// Call an endpoint with per-call options (synchronous)
	pub fn request_with(
		&self,
		endpoint: &str,
		params: Params,
		options: &CallOptions,
	) -> Result<Map, ClientError> {
		self.block_on(self.client.request_with(endpoint, params, options))
	}

	/// Call an endpoint without response validation (synchronous)
	pub fn request_raw(&self, endpoint: &str, params: Params) -> Result<String, ClientError> {
		self.block_on(self.client.request_raw(endpoint, params))
	}
}
