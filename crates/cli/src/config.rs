//! Immutable per-invocation configuration.

use std::time::Duration;

use obs_switch::SessionConfig;

use crate::cli::Cli;

/// Settings shared by every command, built once from the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub session: SessionConfig,
	pub verbosity: u8,
}

impl From<&Cli> for Config {
	fn from(cli: &Cli) -> Self {
		let session = SessionConfig::new(cli.server.clone())
			.with_password(cli.password.clone())
			.with_timeout(Duration::from_millis(cli.timeout_ms));

		Self {
			session,
			verbosity: cli.verbose,
		}
	}
}
