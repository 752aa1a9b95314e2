//! Error types for the obs-websocket runtime.

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to an obs-websocket server.
#[derive(Debug, Error)]
pub enum Error {
	/// The socket could not be opened (refused, unresolvable host, bad URL).
	#[error("Failed to connect to {url}: {reason}")]
	ConnectionFailed { url: String, reason: String },

	/// The server asked for authentication but no password was configured.
	#[error("Server requires a password but none was provided")]
	PasswordRequired,

	/// Handshake did not follow the Hello/Identify/Identified sequence.
	#[error("Handshake failed: {0}")]
	HandshakeFailed(String),

	/// Server closed the socket with a close frame.
	#[error("Connection closed by server ({code}): {reason}")]
	Closed { code: u16, reason: String },

	/// Socket ended without a close frame.
	#[error("Connection closed unexpectedly")]
	ChannelClosed,

	/// WebSocket-level I/O failure.
	#[error("Transport error: {0}")]
	TransportError(String),

	/// Frame could not be interpreted as an obs-websocket message.
	#[error("Protocol error: {0}")]
	ProtocolError(String),

	/// Server answered a request with a failed status.
	#[error("{request_type} failed (code {code}): {comment}")]
	Request {
		request_type: String,
		code: u16,
		comment: String,
	},

	/// Timeout waiting for the server.
	#[error("Timeout: {0}")]
	Timeout(String),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Returns true if this error means the session itself is unusable,
	/// as opposed to a single request being rejected.
	pub fn is_connection_error(&self) -> bool {
		!matches!(self, Error::Request { .. } | Error::Json(_))
	}

	/// Returns true if this is a timeout error.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Error::Timeout(_))
	}

	/// Status code of a rejected request.
	pub fn request_code(&self) -> Option<u16> {
		match self {
			Error::Request { code, .. } => Some(*code),
			_ => None,
		}
	}
}
