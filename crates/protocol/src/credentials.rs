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

use std::fmt;

use zeroize::Zeroizing;

/// Application credential pair
///
/// The identity key is public and travels in `X-APP-PUBLIC-KEY`. The secret
/// key only feeds the local HMAC; it is wiped on drop and redacted from
/// `Debug` output.
#[derive(Clone)]
pub struct Credentials {
	identity_key: String,
	secret_key: Zeroizing<Vec<u8>>,
}

impl Credentials {
	pub fn new(identity_key: impl Into<String>, secret_key: impl AsRef<[u8]>) -> Self {
		Self {
			identity_key: identity_key.into(),
			secret_key: Zeroizing::new(secret_key.as_ref().to_vec()),
		}
	}

	/// Public identity key
	pub fn identity_key(&self) -> &str {
		&self.identity_key
	}

	pub(crate) fn secret_key(&self) -> &[u8] {
		&self.secret_key
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("identity_key", &self.identity_key)
			.field("secret_key", &"<redacted>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_debug_redacts_secret() {
		let creds = Credentials::new("pub-key", "s3cret");
		let printed = format!("{:?}", creds);
		assert!(printed.contains("pub-key"));
		assert!(!printed.contains("s3cret"));
	}

	#[test]
	fn test_accessors() {
		let creds = Credentials::new("pub-key", b"raw-bytes");
		assert_eq!(creds.identity_key(), "pub-key");
		assert_eq!(creds.secret_key(), b"raw-bytes");
	}
}
