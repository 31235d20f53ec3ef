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

use std::{env, fmt};

use anyhow::{Context, Result, bail};
use hiex_sdk::{ClientConfig, Credentials};

// Logging configuration constants
/// Default log level (can be overridden by RUST_LOG environment variable)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log directory component name
pub const LOG_COMPONENT_NAME: &str = "cli";

/// Default console output enabled (can be overridden by LOG_TO_CONSOLE environment variable)
pub const DEFAULT_LOG_TO_CONSOLE: bool = false;

/// Application public key (required for every command)
pub const ENV_PUBLIC_KEY: &str = "HIEX_PUBLIC_KEY";
/// Application secret key (required for every command)
pub const ENV_SECRET_KEY: &str = "HIEX_SECRET_KEY";

/// Command-line runtime configuration
///
/// Client settings (`HIEX_BASE_URL`, `HIEX_LANG`, `HIEX_TIMEOUT_MS`) come from
/// `ClientConfig::from_env`; only the credentials are read here.
pub struct CliConfig {
	pub client: ClientConfig,
	public_key: Option<String>,
	secret_key: Option<String>,
}

impl CliConfig {
	/// Load configuration from `.env` and the process environment
	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();
		let client = ClientConfig::from_env().context("Invalid HIEX_* client configuration")?;
		Ok(Self::with_client(client, |name| env::var(name).ok()))
	}

	/// Combine client settings with credentials from an arbitrary lookup
	pub fn with_client(client: ClientConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
		Self {
			client,
			public_key: lookup(ENV_PUBLIC_KEY),
			secret_key: lookup(ENV_SECRET_KEY),
		}
	}

	/// Apply command-line overrides.
	pub fn override_with(&mut self, base_url: Option<String>, lang: Option<String>) {
		if let Some(base_url) = base_url {
			self.client.base_url = base_url;
		}
		if lang.is_some() {
			self.client.lang = lang;
		}
	}

	pub fn credentials(&self) -> Result<Credentials> {
		let Some(public_key) = self.public_key.as_deref().filter(|k| !k.is_empty()) else {
			bail!("{} is not set", ENV_PUBLIC_KEY);
		};
		let Some(secret_key) = self.secret_key.as_deref().filter(|k| !k.is_empty()) else {
			bail!("{} is not set", ENV_SECRET_KEY);
		};
		Ok(Credentials::new(public_key, secret_key))
	}
}

impl fmt::Debug for CliConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CliConfig")
			.field("client", &self.client)
			.field("public_key", &self.public_key)
			.field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}
