//! Session Manager: scoped access to the remote scene service.
//!
//! [`with_session`] opens a session, runs a body against it, and closes the
//! session on every exit path. Opening and the remote calls themselves sit
//! behind [`Connector`] and [`SceneService`], so the lifecycle is the same
//! whether the other end is OBS or [`crate::testing::MockObs`].

use std::time::Duration;

use async_trait::async_trait;
use obs_switch_protocol::{GetCurrentProgramScene, GetSceneList, GetVersion, SetCurrentProgramScene};
use obs_switch_runtime::{ConnectOptions, Connection, DEFAULT_TIMEOUT};

use crate::error::{Error, Result};
use crate::scene::{SceneCollection, SceneRef, VersionInfo};

/// Address used when none is given.
pub const DEFAULT_SERVER: &str = "localhost:4455";

/// Where and how to open a session. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
	/// `host:port`, or a full `ws://`/`wss://` URL.
	pub server: String,
	/// `None` means the endpoint is unauthenticated.
	pub password: Option<String>,
	/// Bound on opening the session and on each request.
	pub timeout: Duration,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self::new(DEFAULT_SERVER)
	}
}

impl SessionConfig {
	pub fn new(server: impl Into<String>) -> Self {
		Self {
			server: server.into(),
			password: None,
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Sets the credential; an empty string counts as none.
	pub fn with_password(mut self, password: Option<String>) -> Self {
		self.password = password.filter(|p| !p.is_empty());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

/// Remote operations available inside a session.
#[async_trait]
pub trait SceneService: Send {
	/// Scenes in service order.
	async fn scene_list(&mut self) -> Result<SceneCollection>;

	/// Name of the scene currently on air.
	async fn current_program_scene(&mut self) -> Result<String>;

	async fn set_current_program_scene(&mut self, name: &str) -> Result<()>;

	async fn version(&mut self) -> Result<VersionInfo>;

	/// Releases the session. Called exactly once by [`with_session`].
	async fn disconnect(&mut self) -> Result<()>;
}

/// Opens sessions.
#[async_trait]
pub trait Connector: Send + Sync {
	type Session: SceneService;

	async fn open(&self, config: &SessionConfig) -> Result<Self::Session>;
}

/// Runs `body` inside a session and always closes it afterwards.
///
/// The body's result is returned unchanged. A failure to close is logged and
/// never replaces the body's outcome. If opening fails, `body` never runs and
/// there is nothing to close.
pub async fn with_session<C, T>(
	connector: &C,
	config: &SessionConfig,
	body: impl AsyncFnOnce(&mut C::Session) -> Result<T>,
) -> Result<T>
where
	C: Connector,
{
	let mut session = connector.open(config).await?;
	tracing::debug!(server = %config.server, "session open");

	let outcome = body(&mut session).await;

	if let Err(e) = session.disconnect().await {
		tracing::warn!(error = %e, "session did not close cleanly");
	}
	tracing::debug!(ok = outcome.is_ok(), "session closed");

	outcome
}

/// [`Connector`] for a real obs-websocket server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObsConnector;

#[async_trait]
impl Connector for ObsConnector {
	type Session = ObsSession;

	async fn open(&self, config: &SessionConfig) -> Result<ObsSession> {
		let options = ConnectOptions {
			password: config.password.clone(),
			timeout: config.timeout,
		};
		let connection = Connection::connect(&config.server, &options)
			.await
			.map_err(|source| Error::Connection {
				endpoint: config.server.clone(),
				source,
			})?;
		tracing::info!(server = %config.server, obs_websocket = connection.server_version(), "connected");

		Ok(ObsSession {
			connection,
			endpoint: config.server.clone(),
		})
	}
}

/// Live obs-websocket session.
pub struct ObsSession {
	connection: Connection,
	endpoint: String,
}

#[async_trait]
impl SceneService for ObsSession {
	async fn scene_list(&mut self) -> Result<SceneCollection> {
		let list = self
			.connection
			.call(&GetSceneList)
			.await
			.map_err(|e| Error::from_runtime(&self.endpoint, e))?;

		Ok(list
			.scenes
			.into_iter()
			.map(|scene| SceneRef::new(scene.scene_name, scene.scene_index))
			.collect())
	}

	async fn current_program_scene(&mut self) -> Result<String> {
		let current = self
			.connection
			.call(&GetCurrentProgramScene)
			.await
			.map_err(|e| Error::from_runtime(&self.endpoint, e))?;
		Ok(current.current_program_scene_name)
	}

	async fn set_current_program_scene(&mut self, name: &str) -> Result<()> {
		let request = SetCurrentProgramScene {
			scene_name: name.to_string(),
		};
		self.connection
			.call(&request)
			.await
			.map_err(|e| Error::from_runtime(&self.endpoint, e))
	}

	async fn version(&mut self) -> Result<VersionInfo> {
		let version = self
			.connection
			.call(&GetVersion)
			.await
			.map_err(|e| Error::from_runtime(&self.endpoint, e))?;
		Ok(VersionInfo {
			obs_version: version.obs_version,
			websocket_version: version.obs_web_socket_version,
		})
	}

	async fn disconnect(&mut self) -> Result<()> {
		self.connection
			.close()
			.await
			.map_err(|e| Error::from_runtime(&self.endpoint, e))
	}
}
