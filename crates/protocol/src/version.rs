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

//! API version gate
//!
//! The server announces its API version as `<name>_<major>.<minor>[.<patch>]`
//! (for example `hiex_1.2.7`). Only major.minor take part in the comparison.
//! The check is directional: a server newer than the client means the
//! library is outdated; an older or equal server is accepted.

use std::fmt;

use crate::error::{ProtocolError, ProtocolResult};

/// Major/minor API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
	pub major: u32,
	pub minor: u32,
}

impl ApiVersion {
	/// API version this library was built against.
	pub const CLIENT: ApiVersion = ApiVersion::new(1, 2);

	pub const fn new(major: u32, minor: u32) -> Self {
		Self { major, minor }
	}

	/// Parse a server version announcement.
	///
	/// Accepts `name_1.2.3`, `name_1.2` and bare `1.2.3`. The patch
	/// component, when present, is ignored but must not be empty.
	pub fn parse(announced: &str) -> ProtocolResult<Self> {
		let announced = announced.trim();
		let number = announced
			.rsplit_once('_')
			.map(|(_, n)| n)
			.unwrap_or(announced);

		let mut parts = number.split('.');
		let major = parse_component(parts.next(), announced)?;
		let minor = parse_component(parts.next(), announced)?;
		if parts.any(str::is_empty) {
			return Err(malformed(announced));
		}
		Ok(Self { major, minor })
	}

	/// Fail with a version error when `server` is newer than `self`.
	pub fn check_server(&self, server: ApiVersion) -> ProtocolResult<()> {
		if server > *self {
			return Err(ProtocolError::Version {
				server: server.to_string(),
				client: self.to_string(),
			});
		}
		Ok(())
	}
}

impl fmt::Display for ApiVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}

fn parse_component(part: Option<&str>, announced: &str) -> ProtocolResult<u32> {
	part.and_then(|p| p.parse::<u32>().ok())
		.ok_or_else(|| malformed(announced))
}

fn malformed(announced: &str) -> ProtocolError {
	ProtocolError::Malformed(format!("Invalid API version: {:?}", announced))
}
