//! Wire types for the obs-websocket v5 protocol.
//!
//! This crate contains the serde-serializable types exchanged with an
//! obs-websocket server. They are the "protocol layer": the shapes of data as
//! they appear on the wire, with no connection behavior.
//!
//! - [`message`]: the `{op, d}` envelope and the handshake/request payloads
//! - [`requests`]: typed requests used by obs-switch and their responses
//! - [`auth`]: the challenge/response digest used during identification

pub mod auth;
pub mod message;
pub mod requests;

pub use auth::authentication_string;
pub use message::*;
pub use requests::*;
