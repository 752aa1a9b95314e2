//! Message envelope and session payloads for obs-websocket v5.
//!
//! Every frame on the socket is a JSON text message of the form
//! `{"op": <opcode>, "d": {...}}`. The session runs in three phases:
//!
//! 1. Server sends [`Hello`], optionally carrying an [`AuthChallenge`]
//! 2. Client answers with [`Identify`]; server confirms with [`Identified`]
//!    or closes the socket with a [`CloseCode`]
//! 3. Client sends [`Request`]s, each answered by a [`RequestResponse`]
//!    with the same `requestId`
//!
//! Events (op 5) may be interleaved at any time after identification.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RPC version spoken by this client.
pub const RPC_VERSION: u32 = 1;

/// Operation code carried in the `op` field of every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OpCode {
	Hello = 0,
	Identify = 1,
	Identified = 2,
	Reidentify = 3,
	Event = 5,
	Request = 6,
	RequestResponse = 7,
	RequestBatch = 8,
	RequestBatchResponse = 9,
}

/// An `op` value outside the v5 opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOpCode(pub u8);

impl fmt::Display for UnknownOpCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown opcode {}", self.0)
	}
}

impl std::error::Error for UnknownOpCode {}

impl TryFrom<u8> for OpCode {
	type Error = UnknownOpCode;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(OpCode::Hello),
			1 => Ok(OpCode::Identify),
			2 => Ok(OpCode::Identified),
			3 => Ok(OpCode::Reidentify),
			5 => Ok(OpCode::Event),
			6 => Ok(OpCode::Request),
			7 => Ok(OpCode::RequestResponse),
			8 => Ok(OpCode::RequestBatch),
			9 => Ok(OpCode::RequestBatchResponse),
			other => Err(UnknownOpCode(other)),
		}
	}
}

impl From<OpCode> for u8 {
	fn from(op: OpCode) -> Self {
		op as u8
	}
}

/// Raw `{op, d}` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
	pub op: OpCode,
	#[serde(default)]
	pub d: Value,
}

impl Envelope {
	/// Wraps a payload under the given opcode.
	pub fn new<T: Serialize>(op: OpCode, payload: &T) -> serde_json::Result<Self> {
		Ok(Self {
			op,
			d: serde_json::to_value(payload)?,
		})
	}

	/// Decodes the `d` field into a concrete payload type.
	pub fn payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
		T::deserialize(&self.d)
	}
}

/// First message from the server after the socket opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hello {
	/// obs-websocket plugin version (e.g. `"5.4.2"`).
	pub obs_web_socket_version: String,
	/// Latest RPC version the server supports.
	pub rpc_version: u32,
	/// Present only when the server requires a password.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub authentication: Option<AuthChallenge>,
}

/// Challenge and salt used to derive the [`Identify::authentication`] string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthChallenge {
	pub challenge: String,
	pub salt: String,
}

/// Client reply to [`Hello`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identify {
	pub rpc_version: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub authentication: Option<String>,
	/// Bitmask of event categories; obs-switch subscribes to none.
	#[serde(default)]
	pub event_subscriptions: u32,
}

/// Server confirmation that identification succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identified {
	pub negotiated_rpc_version: u32,
}

/// A single request (op 6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
	pub request_type: String,
	pub request_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub request_data: Option<Value>,
}

/// Server answer to a [`Request`] (op 7).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
	pub request_type: String,
	pub request_id: String,
	pub request_status: RequestStatus,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub response_data: Option<Value>,
}

/// Outcome block of a [`RequestResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStatus {
	pub result: bool,
	pub code: u16,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub comment: Option<String>,
}

/// Messages a client receives, decoded from an [`Envelope`].
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
	Hello(Hello),
	Identified(Identified),
	Event(Value),
	RequestResponse(RequestResponse),
	/// Any other opcode; clients are expected to skip these.
	Other(OpCode),
}

impl ServerMessage {
	pub fn from_envelope(envelope: &Envelope) -> serde_json::Result<Self> {
		Ok(match envelope.op {
			OpCode::Hello => ServerMessage::Hello(envelope.payload()?),
			OpCode::Identified => ServerMessage::Identified(envelope.payload()?),
			OpCode::Event => ServerMessage::Event(envelope.d.clone()),
			OpCode::RequestResponse => ServerMessage::RequestResponse(envelope.payload()?),
			other => ServerMessage::Other(other),
		})
	}
}

/// Messages a client sends.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientMessage {
	Identify(Identify),
	Request(Request),
}

impl ClientMessage {
	pub fn to_envelope(&self) -> serde_json::Result<Envelope> {
		match self {
			ClientMessage::Identify(identify) => Envelope::new(OpCode::Identify, identify),
			ClientMessage::Request(request) => Envelope::new(OpCode::Request, request),
		}
	}
}

/// WebSocket close codes the server uses to end a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseCode {
	UnknownReason,
	MessageDecodeError,
	MissingDataField,
	InvalidDataFieldType,
	InvalidDataFieldValue,
	UnknownOpCode,
	NotIdentified,
	AlreadyIdentified,
	AuthenticationFailed,
	UnsupportedRpcVersion,
	SessionInvalidated,
	UnsupportedFeature,
}

impl CloseCode {
	pub fn from_code(code: u16) -> Option<Self> {
		Some(match code {
			4000 => CloseCode::UnknownReason,
			4002 => CloseCode::MessageDecodeError,
			4003 => CloseCode::MissingDataField,
			4004 => CloseCode::InvalidDataFieldType,
			4005 => CloseCode::InvalidDataFieldValue,
			4006 => CloseCode::UnknownOpCode,
			4007 => CloseCode::NotIdentified,
			4008 => CloseCode::AlreadyIdentified,
			4009 => CloseCode::AuthenticationFailed,
			4010 => CloseCode::UnsupportedRpcVersion,
			4011 => CloseCode::SessionInvalidated,
			4012 => CloseCode::UnsupportedFeature,
			_ => return None,
		})
	}

	pub fn describe(self) -> &'static str {
		match self {
			CloseCode::UnknownReason => "unknown reason",
			CloseCode::MessageDecodeError => "server could not decode a message",
			CloseCode::MissingDataField => "message was missing a required field",
			CloseCode::InvalidDataFieldType => "message field had the wrong type",
			CloseCode::InvalidDataFieldValue => "message field had an invalid value",
			CloseCode::UnknownOpCode => "server did not recognize an opcode",
			CloseCode::NotIdentified => "request sent before identification",
			CloseCode::AlreadyIdentified => "client already identified",
			CloseCode::AuthenticationFailed => "authentication failed",
			CloseCode::UnsupportedRpcVersion => "unsupported rpc version",
			CloseCode::SessionInvalidated => "session invalidated by the server",
			CloseCode::UnsupportedFeature => "requested feature is not supported",
		}
	}
}
