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

//! Canonical serialization for signing
//!
//! The canonical form is the byte string both sides hash. It must be
//! byte-identical on the client and on the server, so every rule here is part
//! of the wire protocol:
//!
//! - Mappings: keys in lexical byte order, each emitted as `key` followed by
//!   the canonical value. The reserved key `signature` is skipped at every
//!   nesting level so a message never signs its own signature.
//! - Sequences: a mapping from positional index (`"0"`, `"1"`, ...) to
//!   element, in positional order.
//! - `null`, `true`, `false` render as those words.
//! - Integers render in base 10.
//! - Decimals render normalized: plain notation, no trailing zeros, no `-0`.
//! - Floats render in shortest round-trip plain notation; NaN and infinities
//!   are rejected.
//! - Strings render as their UTF-8 bytes.
//!
//! Empty mappings and sequences contribute nothing.

use crate::{
	error::{ProtocolError, ProtocolResult},
	value::{Map, Value},
};

/// Reserved key excluded from its own signing input
pub const SIGNATURE_KEY: &str = "signature";

/// Canonical bytes of a value.
pub fn canonicalize(value: &Value) -> ProtocolResult<Vec<u8>> {
	let mut out = Vec::new();
	write_value(&mut out, value)?;
	Ok(out)
}

/// Canonical bytes of a payload mapping.
pub fn canonicalize_map(map: &Map) -> ProtocolResult<Vec<u8>> {
	let mut out = Vec::new();
	write_map(&mut out, map)?;
	Ok(out)
}

/// Canonical form as a string (the form is always valid UTF-8).
pub fn canonical_string(value: &Value) -> ProtocolResult<String> {
	canonicalize(value).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

fn write_value(out: &mut Vec<u8>, value: &Value) -> ProtocolResult<()> {
	match value {
		Value::Null => out.extend_from_slice(b"null"),
		Value::Bool(true) => out.extend_from_slice(b"true"),
		Value::Bool(false) => out.extend_from_slice(b"false"),
		Value::Int(i) => out.extend_from_slice(i.to_string().as_bytes()),
		Value::UInt(u) => out.extend_from_slice(u.to_string().as_bytes()),
		Value::Float(f) => out.extend_from_slice(render_float(*f)?.as_bytes()),
		Value::Decimal(d) => out.extend_from_slice(d.normalize().to_string().as_bytes()),
		Value::String(s) => out.extend_from_slice(s.as_bytes()),
		Value::Seq(items) => {
			for (index, item) in items.iter().enumerate() {
				out.extend_from_slice(index.to_string().as_bytes());
				write_value(out, item)?;
			}
		}
		Value::Map(map) => write_map(out, map)?,
	}
	Ok(())
}

fn write_map(out: &mut Vec<u8>, map: &Map) -> ProtocolResult<()> {
	for (key, value) in map {
		if key == SIGNATURE_KEY {
			continue;
		}
		out.extend_from_slice(key.as_bytes());
		write_value(out, value)?;
	}
	Ok(())
}

fn render_float(f: f64) -> ProtocolResult<String> {
	if !f.is_finite() {
		return Err(ProtocolError::Canonicalization(format!(
			"Non-finite number cannot be signed: {}",
			f
		)));
	}
	if f == 0.0 {
		return Ok("0".to_string());
	}
	// `Display` for f64 never switches to exponent notation.
	Ok(format!("{}", f))
}
