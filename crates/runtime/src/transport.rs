//! WebSocket transport carrying obs-websocket envelopes.
//!
//! Each envelope travels as one JSON text frame. The transport knows nothing
//! about opcodes beyond decoding the `{op, d}` shape; sequencing is the
//! [`Connection`](crate::Connection)'s job.


use futures_util::{SinkExt, StreamExt};
use obs_switch_protocol::{CloseCode, Envelope};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Error as WsError;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use crate::error::{Error, Result};

/// Envelope-level wrapper around a [`WebSocketStream`].
pub struct WebSocketTransport<S = MaybeTlsStream<TcpStream>> {
	ws: WebSocketStream<S>,
}

impl WebSocketTransport {
	/// Opens a WebSocket to `url` (`ws://` or `wss://`).
	pub async fn connect(url: &str) -> Result<Self> {
		tracing::debug!(url, "opening websocket");
		let (ws, response) = connect_async(url).await.map_err(|e| Error::ConnectionFailed {
			url: url.to_string(),
			reason: e.to_string(),
		})?;
		tracing::debug!(status = %response.status(), "websocket upgraded");
		Ok(Self { ws })
	}
}

impl<S> WebSocketTransport<S>
where
	S: AsyncRead + AsyncWrite + Unpin,
{
	/// Wraps an already-upgraded stream.
	pub fn from_stream(ws: WebSocketStream<S>) -> Self {
		Self { ws }
	}

	/// Sends one envelope as a text frame.
	pub async fn send(&mut self, envelope: &Envelope) -> Result<()> {
		let text = serde_json::to_string(envelope)?;
		tracing::trace!(%text, "send");
		self.ws.send(Message::Text(text)).await.map_err(map_ws_error)
	}

	/// Receives the next envelope, skipping control frames.
	///
	/// A close frame from the server becomes [`Error::Closed`] carrying the
	/// close code, so callers can report why the session ended.
	pub async fn recv(&mut self) -> Result<Envelope> {
		loop {
			let message = match self.ws.next().await {
				Some(Ok(message)) => message,
				Some(Err(e)) => return Err(map_ws_error(e)),
				None => return Err(Error::ChannelClosed),
			};

			match message {
				Message::Text(text) => {
					tracing::trace!(%text, "recv");
					return decode(text.as_bytes());
				}
				Message::Binary(bytes) => return decode(&bytes),
				Message::Close(Some(frame)) => {
					let code = u16::from(frame.code);
					let reason = if frame.reason.is_empty() {
						CloseCode::from_code(code).map(CloseCode::describe).unwrap_or("no reason given").to_string()
					} else {
						frame.reason.into_owned()
					};
					return Err(Error::Closed { code, reason });
				}
				Message::Close(None) => return Err(Error::ChannelClosed),
				Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
			}
		}
	}

	/// Sends a close frame and drains until the peer acknowledges it.
	pub async fn close(&mut self) -> Result<()> {
		match self.ws.close(None).await {
			Ok(()) | Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => {}
			Err(e) => return Err(map_ws_error(e)),
		}

		while let Some(message) = self.ws.next().await {
			if let Err(e) = message {
				tracing::debug!(error = %e, "socket ended while draining close");
				break;
			}
		}
		Ok(())
	}
}

fn decode(bytes: &[u8]) -> Result<Envelope> {
	serde_json::from_slice(bytes).map_err(|e| Error::ProtocolError(format!("malformed frame: {e}")))
}

fn map_ws_error(err: WsError) -> Error {
	match err {
		WsError::ConnectionClosed | WsError::AlreadyClosed => Error::ChannelClosed,
		other => Error::TransportError(other.to_string()),
	}
}
