//! Command dispatch.
//!
//! Every command returns `Result<Option<Output>>`; [`dispatch`] renders the
//! output, if any, in the command's format.


pub mod dump_code;
pub mod list;
pub mod scene;
pub mod version;

use std::io::Write;

use obs_switch::Connector;

use crate::cli::Commands;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputFormat;

/// Runs `command` against `connector` and writes its output to `out`.
pub async fn dispatch<C: Connector>(
	command: &Commands,
	config: &Config,
	connector: &C,
	out: &mut impl Write,
) -> Result<()> {
	let (output, format) = match command {
		Commands::Version(args) => (version::run(connector, config).await?, args.format),
		Commands::Scene(args) => (scene::run(connector, config, args).await?, OutputFormat::Text),
		Commands::List(args) => (list::run(connector, config).await?, args.format),
		Commands::DumpCode => (dump_code::run(), OutputFormat::Text),
	};

	match output {
		Some(output) => output.write_to(format, out),
		None => Ok(()),
	}
}
