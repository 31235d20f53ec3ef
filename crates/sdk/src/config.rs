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

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default API root (can be overridden by HIEX_BASE_URL)
pub const DEFAULT_BASE_URL: &str = "https://api.hiex.io/";

/// Default request timeout in milliseconds (can be overridden by HIEX_TIMEOUT_MS)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment prefix used by `from_env` and `from_file`
pub const ENV_PREFIX: &str = "HIEX";

/// Client configuration
///
/// Credentials are deliberately not part of it; they are always passed in
/// programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// API root every endpoint path is joined to
	pub base_url: String,
	/// Per-request timeout
	pub timeout_ms: u64,
	/// Language preference sent as the `lang` body field
	pub lang: Option<String>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout_ms: DEFAULT_TIMEOUT_MS,
			lang: None,
		}
	}
}

impl ClientConfig {
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = Some(lang.into());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout_ms = timeout.as_millis() as u64;
		self
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}

	/// Load configuration from `HIEX_*` environment variables
	///
	/// `HIEX_BASE_URL`, `HIEX_TIMEOUT_MS` and `HIEX_LANG` map onto the fields
	/// of the same name; other `HIEX_*` variables are ignored. An empty
	/// `HIEX_LANG` counts as unset.
	pub fn from_env() -> Result<Self, config::ConfigError> {
		Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
	}

	fn from_environment(env: config::Environment) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder().add_source(env).build()?;

		let mut loaded: Self = cfg.try_deserialize()?;
		loaded.lang = loaded.lang.filter(|l| !l.is_empty());
		Ok(loaded)
	}

	/// Load configuration from file, with `HIEX_*` variables taking precedence
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		cfg.try_deserialize()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn test_defaults() {
		let cfg = ClientConfig::default();
		assert_eq!(cfg.base_url, "https://api.hiex.io/");
		assert_eq!(cfg.timeout(), Duration::from_secs(30));
		assert_eq!(cfg.lang, None);
	}

	fn environment(vars: &[(&str, &str)]) -> config::Environment {
		config::Environment::with_prefix(ENV_PREFIX).source(Some(
			vars.iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
		))
	}

	#[test]
	fn test_from_env_reads_prefixed_variables() {
		let cfg = ClientConfig::from_environment(environment(&[
			("HIEX_BASE_URL", "http://localhost:9000/"),
			("HIEX_TIMEOUT_MS", "1500"),
			("HIEX_LANG", "uk"),
			("HIEX_SECRET_KEY", "not-a-config-field"),
			("OTHER_LANG", "en"),
		]))
		.unwrap();

		assert_eq!(cfg.base_url, "http://localhost:9000/");
		assert_eq!(cfg.timeout_ms, 1500);
		assert_eq!(cfg.lang.as_deref(), Some("uk"));
	}

	#[test]
	fn test_from_env_defaults_and_empty_lang() {
		let cfg = ClientConfig::from_environment(environment(&[("HIEX_LANG", "")])).unwrap();
		assert_eq!(cfg, ClientConfig::default());
	}

	#[test]
	fn test_from_env_rejects_bad_timeout() {
		assert!(ClientConfig::from_environment(environment(&[("HIEX_TIMEOUT_MS", "soon")])).is_err());
	}

	#[test]
	fn test_from_file_fills_missing_fields() {
		let path = std::env::temp_dir().join(format!("hiex-sdk-config-{}.json", std::process::id()));
		let mut file = std::fs::File::create(&path).unwrap();
		writeln!(file, "{{\"base_url\": \"http://127.0.0.1:9000\", \"lang\": \"uk\"}}").unwrap();
		drop(file);

		let cfg = ClientConfig::from_file(path.to_str().unwrap()).unwrap();
		std::fs::remove_file(&path).ok();

		assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
		assert_eq!(cfg.lang.as_deref(), Some("uk"));
		assert_eq!(cfg.timeout_ms, DEFAULT_TIMEOUT_MS);
	}
}
