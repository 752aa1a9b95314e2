#[cfg(test)]
mod tests;

use clap::{Args, CommandFactory, Parser, Subcommand};
use obs_switch::DEFAULT_SERVER;

use crate::output::OutputFormat;
use crate::styles::cli_styles;

/// Default for `--timeout-ms`.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Root CLI for obs-switch.
#[derive(Parser, Debug)]
#[command(name = "obs-switch")]
#[command(about = "Switch, toggle and list OBS scenes over obs-websocket")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// obs-websocket address, host:port or a ws:// URL
	#[arg(short, long, global = true, value_name = "ADDRESS", default_value = DEFAULT_SERVER)]
	pub server: String,

	/// obs-websocket password
	#[arg(
		short = 'P',
		long,
		global = true,
		value_name = "PASSWORD",
		env = "OBS_SWITCH_PASSWORD",
		hide_env_values = true
	)]
	pub password: Option<String>,

	/// Timeout for connecting and for each request, in milliseconds
	#[arg(long, global = true, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
	pub timeout_ms: u64,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Print the OBS and obs-websocket versions
	#[command(visible_alias = "obs-version")]
	Version(FormatArgs),
	/// Switch the program scene by index, or toggle to the next one
	Scene(SceneArgs),
	/// List scenes, top of the scene dock first
	#[command(visible_alias = "ls")]
	List(FormatArgs),
	/// Print the source of the scene switching engine
	#[command(visible_aliases = ["dump", "code"])]
	DumpCode,
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
	/// Output format
	#[arg(short, long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Json)]
	pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
#[command(after_help = "Scenes are numbered from 0, starting at the top of the OBS scene dock.")]
pub struct SceneArgs {
	/// Toggle to the next scene instead of switching by index
	#[arg(short, long)]
	pub toggle: bool,

	/// With --toggle, go to the previous scene instead
	#[arg(short, long)]
	pub backwards: bool,

	/// Scene index
	#[arg(value_name = "INDEX", allow_negative_numbers = true)]
	pub index: Vec<String>,
}

/// Help text of the `scene` subcommand, as `obs-switch scene --help` shows it.
pub fn scene_help() -> String {
	let mut command = Cli::command();
	command.build();
	command
		.find_subcommand_mut("scene")
		.map(|scene| scene.render_help().to_string())
		.unwrap_or_default()
}
