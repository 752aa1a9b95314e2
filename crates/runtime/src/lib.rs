//! obs-websocket runtime: transport and connection.
//!
//! This crate provides the low-level plumbing for talking to an obs-websocket
//! server:
//!
//! - **Transport**: JSON envelopes over a WebSocket text channel
//! - **Connection**: the Hello/Identify handshake and sequential
//!   request/response correlation on top of the transport
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  obs-switch  │  Scene Switch Engine (SceneService impl)
//! └──────┬───────┘
//!        │ Connection::call(&request)
//! ┌──────▼───────┐
//! │   runtime    │  This crate
//! │  ┌────────┐  │
//! │  │ Conn   │  │  handshake + requestId correlation
//! │  └────────┘  │
//! │  ┌────────┐  │
//! │  │ Trans  │  │  WebSocket framing
//! │  └────────┘  │
//! └──────────────┘
//! ```

pub mod connection;
pub mod error;
pub mod transport;

pub use connection::{ConnectOptions, Connection, DEFAULT_TIMEOUT, endpoint_url};
pub use error::{Error, Result};
pub use transport::WebSocketTransport;
