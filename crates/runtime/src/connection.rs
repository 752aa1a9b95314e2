//! Identified obs-websocket session.
//!
//! This module implements the session layer on top of the transport:
//! - The Hello/Identify/Identified handshake, including authentication
//! - Generating sequential request IDs
//! - Correlating each response with the request in flight
//! - Skipping events and stray responses
//!
//! # Message Flow
//!
//! 1. [`Connection::connect`] opens the socket and waits for `Hello`
//! 2. `Identify` is sent (with the auth digest when the server asks for one)
//! 3. The server answers `Identified`, or closes the socket with a close code
//! 4. [`Connection::call`] sends one `Request` and reads frames until the
//!    `RequestResponse` with the same ID arrives
//!
//! Only one request is ever in flight; callers drive the session strictly in
//! order, so no background reader task is needed.


use std::time::Duration;

use obs_switch_protocol::{
	ClientMessage, Hello, Identified, Identify, ObsRequest, RPC_VERSION, Request, RequestResponse, ServerMessage,
	authentication_string,
};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_tungstenite::MaybeTlsStream;

use crate::error::{Error, Result};
use crate::transport::WebSocketTransport;

/// Default bound on opening the session and on each request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for [`Connection::connect`].
#[derive(Debug, Clone)]
pub struct ConnectOptions {
	/// Password for servers with authentication enabled. Empty means none.
	pub password: Option<String>,
	/// Upper bound for the handshake and for each request.
	pub timeout: Duration,
}

impl Default for ConnectOptions {
	fn default() -> Self {
		Self {
			password: None,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

impl ConnectOptions {
	fn password(&self) -> Option<&str> {
		self.password.as_deref().filter(|p| !p.is_empty())
	}
}

/// Turns a `host:port` address into a WebSocket URL.
///
/// Addresses that already carry a `ws://` or `wss://` scheme pass through.
pub fn endpoint_url(address: &str) -> String {
	if address.starts_with("ws://") || address.starts_with("wss://") {
		address.to_string()
	} else {
		format!("ws://{address}")
	}
}

/// An identified session with an obs-websocket server.
pub struct Connection<S = MaybeTlsStream<TcpStream>> {
	transport: WebSocketTransport<S>,
	last_id: u64,
	timeout: Duration,
	hello: Hello,
	identified: Identified,
	closed: bool,
}

impl Connection {
	/// Connects to `address` and completes the handshake.
	///
	/// Both the socket open and the handshake are bounded by
	/// [`ConnectOptions::timeout`].
	pub async fn connect(address: &str, options: &ConnectOptions) -> Result<Self> {
		let url = endpoint_url(address);
		let transport = tokio::time::timeout(options.timeout, WebSocketTransport::connect(&url))
			.await
			.map_err(|_| Error::Timeout(format!("no answer from {url} after {}ms", options.timeout.as_millis())))??;
		Self::identify(transport, options).await
	}
}

impl<S> Connection<S>
where
	S: AsyncRead + AsyncWrite + Unpin,
{
	/// Runs the handshake over an open transport.
	///
	/// On failure the transport is closed before the error is returned, so a
	/// partially opened session never outlives this call.
	pub async fn identify(mut transport: WebSocketTransport<S>, options: &ConnectOptions) -> Result<Self> {
		let outcome = tokio::time::timeout(options.timeout, handshake(&mut transport, options.password())).await;

		let failure = match outcome {
			Ok(Ok((hello, identified))) => {
				tracing::debug!(
					server = %hello.obs_web_socket_version,
					rpc = identified.negotiated_rpc_version,
					"identified"
				);
				return Ok(Self {
					transport,
					last_id: 0,
					timeout: options.timeout,
					hello,
					identified,
					closed: false,
				});
			}
			Ok(Err(e)) => e,
			Err(_) => Error::Timeout(format!("handshake did not complete within {}ms", options.timeout.as_millis())),
		};

		if !matches!(failure, Error::Closed { .. } | Error::ChannelClosed) {
			if let Err(e) = tokio::time::timeout(options.timeout, transport.close()).await.unwrap_or(Ok(())) {
				tracing::debug!(error = %e, "failed to close socket after handshake error");
			}
		}
		Err(failure)
	}

	/// obs-websocket version announced in `Hello`.
	pub fn server_version(&self) -> &str {
		&self.hello.obs_web_socket_version
	}

	/// RPC version agreed in `Identified`.
	pub fn negotiated_rpc_version(&self) -> u32 {
		self.identified.negotiated_rpc_version
	}

	/// Sends a typed request and decodes its response.
	pub async fn call<R: ObsRequest>(&mut self, request: &R) -> Result<R::Response> {
		let data = serde_json::to_value(request)?;
		let data = (!data.is_null()).then_some(data);
		let value = self.request(R::REQUEST_TYPE, data).await?;
		Ok(serde_json::from_value(value)?)
	}

	/// Sends a request by name and returns the raw `responseData`
	/// (`null` when the server sent none).
	pub async fn request(&mut self, request_type: &str, request_data: Option<Value>) -> Result<Value> {
		if self.closed {
			return Err(Error::ChannelClosed);
		}

		self.last_id += 1;
		let request_id = self.last_id.to_string();
		tracing::debug!(id = %request_id, request_type, "sending request");

		let message = ClientMessage::Request(Request {
			request_type: request_type.to_string(),
			request_id: request_id.clone(),
			request_data,
		});
		self.transport.send(&message.to_envelope()?).await?;

		let timeout = self.timeout;
		let response = tokio::time::timeout(timeout, self.await_response(&request_id))
			.await
			.map_err(|_| Error::Timeout(format!("no response to {request_type} after {}ms", timeout.as_millis())))??;

		let status = response.request_status;
		if !status.result {
			return Err(Error::Request {
				request_type: response.request_type,
				code: status.code,
				comment: status.comment.unwrap_or_default(),
			});
		}

		tracing::debug!(id = %request_id, code = status.code, "request succeeded");
		Ok(response.response_data.unwrap_or(Value::Null))
	}

	async fn await_response(&mut self, request_id: &str) -> Result<RequestResponse> {
		loop {
			let envelope = self.transport.recv().await?;
			match ServerMessage::from_envelope(&envelope)? {
				ServerMessage::RequestResponse(response) if response.request_id == request_id => return Ok(response),
				ServerMessage::RequestResponse(response) => {
					tracing::warn!(id = %response.request_id, "ignoring response for unknown request");
				}
				ServerMessage::Event(_) => tracing::trace!("ignoring event"),
				other => tracing::debug!(message = ?other, "ignoring unexpected message"),
			}
		}
	}

	/// Closes the session. Calling this more than once is a no-op.
	pub async fn close(&mut self) -> Result<()> {
		if self.closed {
			return Ok(());
		}
		self.closed = true;
		tracing::debug!("closing connection");

		tokio::time::timeout(self.timeout, self.transport.close())
			.await
			.map_err(|_| Error::Timeout("close handshake did not complete".to_string()))?
	}

	/// Returns true once [`close`](Self::close) has run.
	pub fn is_closed(&self) -> bool {
		self.closed
	}
}

async fn handshake<S>(transport: &mut WebSocketTransport<S>, password: Option<&str>) -> Result<(Hello, Identified)>
where
	S: AsyncRead + AsyncWrite + Unpin,
{
	let hello = match ServerMessage::from_envelope(&transport.recv().await?)? {
		ServerMessage::Hello(hello) => hello,
		other => return Err(Error::HandshakeFailed(format!("expected Hello, got {other:?}"))),
	};

	let authentication = match (&hello.authentication, password) {
		(Some(challenge), Some(password)) => Some(authentication_string(password, challenge)),
		(Some(_), None) => return Err(Error::PasswordRequired),
		(None, _) => None,
	};

	tracing::debug!(authenticated = authentication.is_some(), "sending identify");
	let identify = ClientMessage::Identify(Identify {
		rpc_version: RPC_VERSION,
		authentication,
		event_subscriptions: 0,
	});
	transport.send(&identify.to_envelope()?).await?;

	loop {
		match ServerMessage::from_envelope(&transport.recv().await?)? {
			ServerMessage::Identified(identified) => return Ok((hello, identified)),
			other => tracing::debug!(message = ?other, "ignoring message before identified"),
		}
	}
}
