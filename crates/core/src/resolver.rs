//! Scene Resolver: service order vs. presentation order, and target selection.
//!
//! OBS lists scenes bottom-up: the scene at the top of the editor's scene
//! dock comes last. Operators count from the top, so everything shown to or
//! indexed by the operator uses [`presentation_order`], the reverse of what
//! OBS sends.
//!
//! Toggling is the one exception. A forward toggle walks presentation order;
//! a backward toggle walks the raw service order with the same "next, with
//! wraparound" rule, which lands on the scene a forward toggle came from.

#[cfg(test)]
mod tests;

use crate::error::{Error, IndexError, Result, SceneAction, ToggleError};
use crate::scene::{SceneCollection, SceneRef};

/// Operator-facing order: the reverse of service order.
pub fn presentation_order(raw: &SceneCollection) -> SceneCollection {
	raw.reversed()
}

/// Fails with [`Error::EmptyCollection`] when there is nothing to act on.
pub fn ensure_not_empty(scenes: &SceneCollection, action: SceneAction) -> Result<()> {
	if scenes.is_empty() {
		return Err(Error::EmptyCollection(action));
	}
	Ok(())
}

/// Picks `ordered[index]`.
pub fn resolve_by_index(ordered: &SceneCollection, index: usize) -> Result<SceneRef> {
	ensure_not_empty(ordered, SceneAction::Switch)?;
	ordered.get(index).cloned().ok_or_else(|| {
		IndexError::OutOfBounds {
			index,
			len: ordered.len(),
		}
		.into()
	})
}

/// Picks the scene after `current` in the toggle view, wrapping at the end.
///
/// `raw` is in service order. The view is presentation order for a forward
/// toggle and service order for a backward one.
pub fn resolve_toggle(raw: &SceneCollection, current: &str, backward: bool) -> Result<SceneRef> {
	ensure_not_empty(raw, SceneAction::Switch)?;

	let view = if backward { raw.clone() } else { presentation_order(raw) };
	let found = view
		.position(current)
		.ok_or_else(|| ToggleError::CurrentSceneUnknown(current.to_string()))?;
	let next = (found + 1) % view.len();

	tracing::debug!(current, found, next, backward, "resolved toggle");
	Ok(view.as_slice()[next].clone())
}
