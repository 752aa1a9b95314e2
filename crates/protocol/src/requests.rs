//! Typed requests and their response payloads.
//!
//! Each request type implements [`ObsRequest`], tying the `requestType`
//! string to the shape of its `requestData` and `responseData`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A request that can be sent over an identified session.
///
/// The implementing type is serialized as `requestData`; unit structs
/// serialize to `null`, which is sent as no data at all.
pub trait ObsRequest: Serialize {
	const REQUEST_TYPE: &'static str;

	/// Decoded `responseData`. Requests that return nothing use `()`.
	type Response: DeserializeOwned;
}

/// `GetSceneList`: all scenes, in the server's native order.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetSceneList;

impl ObsRequest for GetSceneList {
	const REQUEST_TYPE: &'static str = "GetSceneList";
	type Response = SceneList;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneList {
	#[serde(default)]
	pub current_program_scene_name: Option<String>,
	#[serde(default)]
	pub current_preview_scene_name: Option<String>,
	pub scenes: Vec<SceneEntry>,
}

/// One scene as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEntry {
	pub scene_name: String,
	pub scene_index: i64,
}

/// `GetCurrentProgramScene`: the scene currently on air.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetCurrentProgramScene;

impl ObsRequest for GetCurrentProgramScene {
	const REQUEST_TYPE: &'static str = "GetCurrentProgramScene";
	type Response = CurrentProgramScene;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentProgramScene {
	pub current_program_scene_name: String,
}

/// `SetCurrentProgramScene`: put the named scene on air.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCurrentProgramScene {
	pub scene_name: String,
}

impl ObsRequest for SetCurrentProgramScene {
	const REQUEST_TYPE: &'static str = "SetCurrentProgramScene";
	type Response = ();
}

/// `GetVersion`: OBS and plugin version information.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetVersion;

impl ObsRequest for GetVersion {
	const REQUEST_TYPE: &'static str = "GetVersion";
	type Response = Version;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
	pub obs_version: String,
	pub obs_web_socket_version: String,
	#[serde(default)]
	pub rpc_version: Option<u32>,
	#[serde(default)]
	pub platform: Option<String>,
}
