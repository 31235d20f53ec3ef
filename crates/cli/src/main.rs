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

//! HiEx operator CLI
//!
//! Online commands call the API with the application credentials from
//! `HIEX_PUBLIC_KEY` / `HIEX_SECRET_KEY`. The `sign` and `verify` commands
//! work offline and are meant for debugging signature mismatches.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hiex_sdk::{Client, UserLookup};
use tracing::info;

use crate::{config::CliConfig, logging::init_logging};

#[derive(Debug, Parser)]
#[command(name = "hiex", version, about = "HiEx API command-line client")]
struct Cli {
	/// API root, overrides HIEX_BASE_URL
	#[arg(long, global = true)]
	base_url: Option<String>,

	/// Language preference, overrides HIEX_LANG
	#[arg(long, global = true)]
	lang: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// List supported coins
	Coins,
	/// List exchange pairs
	Pairs {
		#[arg(long)]
		currency1: Option<String>,
		#[arg(long)]
		currency2: Option<String>,
	},
	/// Show one exchange
	Exchange { exchange_id: String },
	/// Show a user, by e-mail or id
	User {
		#[arg(long, conflicts_with = "user_id", required_unless_present = "user_id")]
		email: Option<String>,
		#[arg(long)]
		user_id: Option<i64>,
	},
	/// Print the signed request for an endpoint without sending it
	Sign {
		endpoint: String,
		/// Parameters as a JSON object
		#[arg(long, default_value = "{}")]
		params: String,
		/// Seconds since the epoch (default: now)
		#[arg(long)]
		timestamp: Option<u64>,
	},
	/// Validate a captured response
	Verify {
		/// File holding the response body
		#[arg(long)]
		body: PathBuf,
		/// X-APP-VERSION header value
		#[arg(long)]
		version: String,
		/// X-APP-TIMESTAMP header value
		#[arg(long)]
		timestamp: String,
		/// X-APP-SIGNATURE header value
		#[arg(long)]
		signature: String,
	},
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	let mut cfg = CliConfig::from_env()?;
	init_logging()?;
	cfg.override_with(cli.base_url, cli.lang);
	let credentials = cfg.credentials()?;

	info!(
		target: "cli",
		base_url = %cfg.client.base_url,
		public_key = credentials.identity_key(),
		"Starting"
	);

	match cli.command {
		Command::Sign {
			endpoint,
			params,
			timestamp,
		} => {
			let request = commands::sign(credentials, &cfg.client, &endpoint, &params, timestamp)?;
			commands::print_signed(&request)
		}
		Command::Verify {
			body,
			version,
			timestamp,
			signature,
		} => {
			let payload = commands::verify(credentials, &body, &version, &timestamp, &signature)?;
			commands::print_value(&payload)
		}
		online => {
			let client = Client::with_config(credentials, cfg.client.clone())
				.context("Failed to create client")?;
			run_online(&client, online).await
		}
	}
}

async fn run_online(client: &Client, command: Command) -> Result<()> {
	match command {
		Command::Coins => commands::coins(client).await,
		Command::Pairs {
			currency1,
			currency2,
		} => commands::pairs(client, currency1.as_deref(), currency2.as_deref()).await,
		Command::Exchange { exchange_id } => commands::exchange(client, &exchange_id).await,
		Command::User { email, user_id } => {
			let lookup = match (email, user_id) {
				(Some(email), _) => UserLookup::Email(email),
				(None, Some(id)) => UserLookup::Id(id),
				(None, None) => anyhow::bail!("--email or --user-id is required"),
			};
			commands::user(client, &lookup).await
		}
		Command::Sign { .. } | Command::Verify { .. } => {
			anyhow::bail!("offline command dispatched online")
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn test_cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_user_requires_a_lookup() {
		assert!(Cli::try_parse_from(["hiex", "user"]).is_err());
		assert!(Cli::try_parse_from(["hiex", "user", "--email", "a@b.c", "--user-id", "1"]).is_err());
		let cli = Cli::try_parse_from(["hiex", "user", "--user-id", "7"]).unwrap();
		assert!(matches!(cli.command, Command::User { user_id: Some(7), .. }));
	}

	#[test]
	fn test_global_overrides() {
		let cli = Cli::try_parse_from([
			"hiex",
			"pairs",
			"--currency1",
			"BTC",
			"--lang",
			"uk",
		])
		.unwrap();
		assert_eq!(cli.lang.as_deref(), Some("uk"));
		assert!(matches!(
			cli.command,
			Command::Pairs { currency1: Some(ref c), currency2: None } if c == "BTC"
		));
	}
}
