use obs_switch::Connector;

use crate::config::Config;
use crate::error::Result;
use crate::output::Output;

/// Lists scenes in presentation order.
pub async fn run<C: Connector>(connector: &C, config: &Config) -> Result<Option<Output>> {
	let scenes = obs_switch::list_scenes(connector, &config.session).await?;
	Ok(Some(Output::Scenes(scenes)))
}
