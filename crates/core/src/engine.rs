//! Engine operations: one session per call, strictly fetch-before-mutate.


use crate::error::{Result, SceneAction};
use crate::intent::SwitchIntent;
use crate::resolver::{ensure_not_empty, presentation_order, resolve_by_index, resolve_toggle};
use crate::scene::{SceneCollection, SceneRef, VersionInfo};
use crate::session::{Connector, SceneService, SessionConfig, with_session};

/// Switches the program scene according to `intent` and returns the scene
/// that was put on air.
///
/// Nothing is mutated when the scene list is empty or the target cannot be
/// resolved.
pub async fn switch_scene<C: Connector>(connector: &C, config: &SessionConfig, intent: SwitchIntent) -> Result<SceneRef> {
	with_session(connector, config, async |session| {
		let raw = session.scene_list().await?;
		ensure_not_empty(&raw, SceneAction::Switch)?;

		let target = match intent {
			SwitchIntent::ByIndex(index) => resolve_by_index(&presentation_order(&raw), index)?,
			SwitchIntent::ToggleForward | SwitchIntent::ToggleBackward => {
				let current = session.current_program_scene().await?;
				resolve_toggle(&raw, &current, intent == SwitchIntent::ToggleBackward)?
			}
		};

		tracing::info!(scene = %target.name, ?intent, "switching program scene");
		session.set_current_program_scene(&target.name).await?;
		Ok(target)
	})
	.await
}

/// Scenes in presentation order.
pub async fn list_scenes<C: Connector>(connector: &C, config: &SessionConfig) -> Result<SceneCollection> {
	with_session(connector, config, async |session| {
		let raw = session.scene_list().await?;
		ensure_not_empty(&raw, SceneAction::List)?;
		Ok(presentation_order(&raw))
	})
	.await
}

/// Name of the scene currently on air.
pub async fn current_scene<C: Connector>(connector: &C, config: &SessionConfig) -> Result<String> {
	with_session(connector, config, async |session| session.current_program_scene().await).await
}

pub async fn version<C: Connector>(connector: &C, config: &SessionConfig) -> Result<VersionInfo> {
	with_session(connector, config, async |session| session.version().await).await
}
