use crate::output::Output;

/// Needs no connection.
pub fn run() -> Option<Output> {
	Some(Output::Source(obs_switch::EMBEDDED_SOURCE))
}
