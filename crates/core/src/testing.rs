//! In-memory OBS for exercising the engine without a network.
//!
//! [`MockObs`] is a [`Connector`]; every session it opens shares the same
//! state, so a test can switch scenes in one session and observe the result
//! in the next. Every call is recorded as a [`MockCall`].
//!
//! ```ignore
//! use obs_switch::testing::{MockCall, MockObs};
//!
//! let obs = MockObs::with_scenes(["C", "B", "A"]);
//! obs.set_current("A");
//! // ... run an engine operation against &obs
//! assert_eq!(obs.calls().last(), Some(&MockCall::Disconnect));
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::scene::{SceneCollection, VersionInfo};
use crate::session::{Connector, SceneService, SessionConfig};

/// One recorded interaction with the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
	Open,
	GetSceneList,
	GetCurrentProgramScene,
	SetCurrentProgramScene(String),
	GetVersion,
	Disconnect,
}

#[derive(Debug, Default)]
struct MockState {
	scenes: SceneCollection,
	current: Option<String>,
	version: VersionInfo,
	refuse_connections: bool,
	reject_scene_changes: bool,
	fail_disconnect: bool,
	calls: Vec<MockCall>,
}

/// Scriptable stand-in for an OBS instance.
#[derive(Debug, Clone, Default)]
pub struct MockObs {
	state: Arc<Mutex<MockState>>,
}

impl MockObs {
	pub fn new() -> Self {
		let obs = Self::default();
		obs.set_version("30.2.3", "5.5.2");
		obs
	}

	/// Builds a mock whose scene list is `names` in service order.
	///
	/// The program scene starts as the last one, which is the first in
	/// presentation order.
	pub fn with_scenes<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let obs = Self::new();
		obs.set_scenes(names);
		obs
	}

	pub fn set_scenes<I, S>(&self, names: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let scenes = SceneCollection::from_names(names);
		let mut state = self.state();
		state.current = scenes.iter().last().map(|scene| scene.name.clone());
		state.scenes = scenes;
	}

	pub fn set_current(&self, name: &str) {
		self.state().current = Some(name.to_string());
	}

	pub fn set_version(&self, obs_version: &str, websocket_version: &str) {
		self.state().version = VersionInfo {
			obs_version: obs_version.to_string(),
			websocket_version: websocket_version.to_string(),
		};
	}

	/// Makes every subsequent `open` fail as if nothing were listening.
	pub fn refuse_connections(&self) {
		self.state().refuse_connections = true;
	}

	/// Makes `SetCurrentProgramScene` fail as if the scene had vanished.
	pub fn reject_scene_changes(&self) {
		self.state().reject_scene_changes = true;
	}

	pub fn fail_disconnect(&self) {
		self.state().fail_disconnect = true;
	}

	/// Program scene as the mock currently sees it.
	pub fn current(&self) -> Option<String> {
		self.state().current.clone()
	}

	pub fn calls(&self) -> Vec<MockCall> {
		self.state().calls.clone()
	}

	/// How many times `call` was recorded.
	pub fn count(&self, call: &MockCall) -> usize {
		self.state().calls.iter().filter(|recorded| *recorded == call).count()
	}

	fn state(&self) -> MutexGuard<'_, MockState> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}

	fn record(&self, call: MockCall) {
		self.state().calls.push(call);
	}
}

#[async_trait]
impl Connector for MockObs {
	type Session = MockSession;

	async fn open(&self, config: &SessionConfig) -> Result<MockSession> {
		self.record(MockCall::Open);
		if self.state().refuse_connections {
			return Err(Error::Connection {
				endpoint: config.server.clone(),
				source: obs_switch_runtime::Error::ConnectionFailed {
					url: obs_switch_runtime::endpoint_url(&config.server),
					reason: "Connection refused (os error 111)".to_string(),
				},
			});
		}
		Ok(MockSession { obs: self.clone() })
	}
}

/// Session handed out by [`MockObs`].
#[derive(Debug)]
pub struct MockSession {
	obs: MockObs,
}

#[async_trait]
impl SceneService for MockSession {
	async fn scene_list(&mut self) -> Result<SceneCollection> {
		self.obs.record(MockCall::GetSceneList);
		Ok(self.obs.state().scenes.clone())
	}

	async fn current_program_scene(&mut self) -> Result<String> {
		self.obs.record(MockCall::GetCurrentProgramScene);
		self.obs
			.current()
			.ok_or_else(|| Error::Protocol("no current program scene".to_string()))
	}

	async fn set_current_program_scene(&mut self, name: &str) -> Result<()> {
		self.obs.record(MockCall::SetCurrentProgramScene(name.to_string()));

		let mut state = self.obs.state();
		if state.reject_scene_changes || state.scenes.position(name).is_none() {
			return Err(Error::Remote {
				request_type: "SetCurrentProgramScene".to_string(),
				code: 600,
				comment: format!("No source was found by the name of `{name}`."),
			});
		}
		state.current = Some(name.to_string());
		Ok(())
	}

	async fn version(&mut self) -> Result<VersionInfo> {
		self.obs.record(MockCall::GetVersion);
		Ok(self.obs.state().version.clone())
	}

	async fn disconnect(&mut self) -> Result<()> {
		self.obs.record(MockCall::Disconnect);
		if self.obs.state().fail_disconnect {
			return Err(Error::Connection {
				endpoint: "mock".to_string(),
				source: obs_switch_runtime::Error::ChannelClosed,
			});
		}
		Ok(())
	}
}
