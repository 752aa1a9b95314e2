//! Switch intents and operator input parsing.

use crate::error::IndexError;

/// What the operator asked the `scene` command to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchIntent {
	/// Switch to the scene at this presentation-order position.
	ByIndex(usize),
	/// Advance one scene through presentation order, wrapping at the end.
	ToggleForward,
	/// Advance one scene through service order, undoing a forward toggle.
	ToggleBackward,
}

impl SwitchIntent {
	/// Builds a toggle intent from the `--backwards` flag.
	pub fn toggle(backward: bool) -> Self {
		if backward {
			SwitchIntent::ToggleBackward
		} else {
			SwitchIntent::ToggleForward
		}
	}
}

/// Parses a positional scene index.
///
/// Runs before any connection is opened, so a typo never touches OBS.
/// A leading sign is accepted (`+1`, `-0`); whitespace, fractions, negative
/// values and anything out of `i64` range are not.
pub fn parse_index(token: &str) -> Result<usize, IndexError> {
	token
		.parse::<i64>()
		.ok()
		.and_then(|value| usize::try_from(value).ok())
		.ok_or_else(|| IndexError::NotInteger(token.to_string()))
}
