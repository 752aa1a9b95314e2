use obs_switch::Connector;

use crate::config::Config;
use crate::error::Result;
use crate::output::Output;

pub async fn run<C: Connector>(connector: &C, config: &Config) -> Result<Option<Output>> {
	let info = obs_switch::version(connector, &config.session).await?;
	tracing::debug!(obs = %info.obs_version, websocket = %info.websocket_version, "version");
	Ok(Some(Output::Version(info)))
}
