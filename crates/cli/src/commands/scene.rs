use obs_switch::{Connector, SwitchIntent, parse_index, switch_scene};

use crate::cli::{SceneArgs, scene_help};
use crate::config::Config;
use crate::error::Result;
use crate::output::Output;

/// Switches the program scene. Prints nothing on success.
///
/// Argument problems are caught here, before any connection is opened.
pub async fn run<C: Connector>(connector: &C, config: &Config, args: &SceneArgs) -> Result<Option<Output>> {
	let Some(intent) = intent_from_args(args)? else {
		return Ok(Some(Output::Help(scene_help())));
	};

	let scene = switch_scene(connector, &config.session, intent).await?;
	tracing::info!(scene = %scene.name, index = scene.service_index, "program scene switched");
	Ok(None)
}

/// Turns the `scene` arguments into an intent.
///
/// `Ok(None)` means there is not exactly one index and no `--toggle`, which
/// is answered with the command's help rather than an error.
pub fn intent_from_args(args: &SceneArgs) -> Result<Option<SwitchIntent>> {
	if args.toggle {
		if !args.index.is_empty() {
			tracing::warn!(ignored = ?args.index, "index arguments are ignored with --toggle");
		}
		return Ok(Some(SwitchIntent::toggle(args.backwards)));
	}

	if args.backwards {
		tracing::warn!("--backwards has no effect without --toggle");
	}

	match args.index.as_slice() {
		[token] => Ok(Some(SwitchIntent::ByIndex(parse_index(token)?))),
		_ => Ok(None),
	}
}
