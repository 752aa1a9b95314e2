//! Scene snapshot types.
//!
//! A [`SceneCollection`] is a snapshot of one `GetSceneList` answer. It is
//! built fresh on every fetch and dropped when the command finishes; nothing
//! here is cached between invocations.

use serde::Serialize;

/// One scene as reported by OBS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneRef {
	/// Scene name, unique within a collection.
	pub name: String,
	/// Position reported by OBS (`sceneIndex`).
	pub service_index: i64,
}

impl SceneRef {
	pub fn new(name: impl Into<String>, service_index: i64) -> Self {
		Self {
			name: name.into(),
			service_index,
		}
	}
}

/// Ordered scenes, either in service order or in presentation order
/// depending on where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SceneCollection(Vec<SceneRef>);

impl SceneCollection {
	pub fn new(scenes: Vec<SceneRef>) -> Self {
		Self(scenes)
	}

	/// Builds a collection from names, numbering `service_index` by position.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		names
			.into_iter()
			.enumerate()
			.map(|(i, name)| SceneRef::new(name, i as i64))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&SceneRef> {
		self.0.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SceneRef> {
		self.0.iter()
	}

	pub fn as_slice(&self) -> &[SceneRef] {
		&self.0
	}

	/// Position of the first scene called `name`.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.0.iter().position(|scene| scene.name == name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|scene| scene.name.as_str())
	}

	/// A reversed copy; `self` is left untouched.
	pub fn reversed(&self) -> Self {
		Self(self.0.iter().rev().cloned().collect())
	}
}

impl FromIterator<SceneRef> for SceneCollection {
	fn from_iter<T: IntoIterator<Item = SceneRef>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a SceneCollection {
	type Item = &'a SceneRef;
	type IntoIter = std::slice::Iter<'a, SceneRef>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl IntoIterator for SceneCollection {
	type Item = SceneRef;
	type IntoIter = std::vec::IntoIter<SceneRef>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Versions reported by `GetVersion`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionInfo {
	pub obs_version: String,
	pub websocket_version: String,
}
