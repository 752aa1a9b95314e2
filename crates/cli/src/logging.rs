use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Installs the stderr subscriber. Stdout carries command output only.
pub fn init_logging(verbosity: u8) {
	let filter = filter_for(verbosity);
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(verbosity > 1)
		.with_level(true)
		.compact()
		.init();
}

/// Default directives when `RUST_LOG` is unset.
///
/// 0 = errors only, with websocket frame noise off entirely
/// 1 (-v) = info for the engine, warn for the websocket layer
/// 2+ (-vv) = debug everywhere
fn filter_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "error,obs_switch_runtime=off,tungstenite=off",
		1 => "info,obs_switch_runtime=warn,tungstenite=warn",
		_ => "debug",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_levels_parse_as_filters() {
		for level in 0..4 {
			assert!(EnvFilter::try_new(filter_for(level)).is_ok(), "level {level}");
		}
		assert_eq!(filter_for(7), "debug");
	}
}
