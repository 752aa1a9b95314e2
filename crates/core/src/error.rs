//! Error taxonomy for the Scene Switch Engine.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// What the operator was trying to do when the scene list came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
	List,
	Switch,
}

impl fmt::Display for SceneAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SceneAction::List => write!(f, "list"),
			SceneAction::Switch => write!(f, "switch between"),
		}
	}
}

#[derive(Debug, Error)]
pub enum Error {
	/// Session could not be opened, or the socket failed mid-session.
	#[error("connection to {endpoint} failed: {source}")]
	Connection {
		endpoint: String,
		source: obs_switch_runtime::Error,
	},

	#[error("no scenes to {0}")]
	EmptyCollection(SceneAction),

	#[error(transparent)]
	Index(#[from] IndexError),

	#[error(transparent)]
	Toggle(#[from] ToggleError),

	/// OBS understood the request but refused it.
	#[error("{request_type} rejected by OBS (code {code}): {comment}")]
	Remote {
		request_type: String,
		code: u16,
		comment: String,
	},

	/// OBS answered with a payload that does not match the request.
	#[error("unexpected response from OBS: {0}")]
	Protocol(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
	#[error("argument must be an integer, got {0:?}")]
	NotInteger(String),

	#[error("index out-of-bounds, there are only {len} scenes")]
	OutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
	#[error("current program scene {0:?} is not in the scene list")]
	CurrentSceneUnknown(String),
}

impl Error {
	/// Lifts a runtime error raised while talking to `endpoint`.
	pub(crate) fn from_runtime(endpoint: &str, err: obs_switch_runtime::Error) -> Self {
		use obs_switch_runtime::Error as RuntimeError;

		match err {
			RuntimeError::Request {
				request_type,
				code,
				comment,
			} => Error::Remote {
				request_type,
				code,
				comment,
			},
			RuntimeError::Json(e) => Error::Protocol(e.to_string()),
			RuntimeError::ProtocolError(msg) => Error::Protocol(msg),
			other => Error::Connection {
				endpoint: endpoint.to_string(),
				source: other,
			},
		}
	}

	pub fn is_connection_error(&self) -> bool {
		matches!(self, Error::Connection { .. })
	}
}
