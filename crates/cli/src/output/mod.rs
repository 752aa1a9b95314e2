//! Command output and error codes.
//!
//! Successful commands print one [`Output`] to stdout. `list` and `version`
//! honor `--format`:
//!
//! ```json
//! {"scenes":[{"index":2,"name":"Live"},{"index":1,"name":"BRB"}]}
//! {"obs":"30.2.3","websocket":"5.5.2"}
//! ```
//!
//! Failures go to stderr as `Error [CODE]: message`; see [`ErrorCode`].

#[cfg(test)]
mod tests;

use std::io::Write;

use obs_switch::{SceneCollection, VersionInfo};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output format for `list` and `version`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Compact JSON on one line
	#[default]
	Json,
	/// Plain lines for humans and shell pipelines
	Text,
}

impl std::str::FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"json" => Ok(OutputFormat::Json),
			"text" => Ok(OutputFormat::Text),
			_ => Err(format!("format must be json or text, got {s:?}")),
		}
	}
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Text => write!(f, "text"),
		}
	}
}

/// What a successful command has to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
	/// Scenes in presentation order.
	Scenes(SceneCollection),
	Version(VersionInfo),
	/// Embedded engine source, printed verbatim.
	Source(&'static str),
	/// Help text, printed verbatim regardless of format.
	Help(String),
}

#[derive(Serialize)]
struct SceneListJson<'a> {
	scenes: Vec<SceneJson<'a>>,
}

#[derive(Serialize)]
struct SceneJson<'a> {
	index: i64,
	name: &'a str,
}

#[derive(Serialize)]
struct VersionJson<'a> {
	obs: &'a str,
	websocket: &'a str,
}

impl Output {
	/// Renders the full stdout text, trailing newline included.
	pub fn render(&self, format: OutputFormat) -> Result<String> {
		let rendered = match (self, format) {
			(Output::Scenes(scenes), OutputFormat::Json) => {
				let body = SceneListJson {
					scenes: scenes
						.iter()
						.map(|scene| SceneJson {
							index: scene.service_index,
							name: &scene.name,
						})
						.collect(),
				};
				format!("{}\n", serde_json::to_string(&body)?)
			}
			(Output::Scenes(scenes), OutputFormat::Text) => scenes.names().map(|name| format!("{name}\n")).collect(),
			(Output::Version(info), OutputFormat::Json) => {
				let body = VersionJson {
					obs: &info.obs_version,
					websocket: &info.websocket_version,
				};
				format!("{}\n", serde_json::to_string(&body)?)
			}
			(Output::Version(info), OutputFormat::Text) => format!(
				"OBS version: {}\nOBS websocket version: {}\n",
				info.obs_version, info.websocket_version
			),
			(Output::Source(source), _) => source.to_string(),
			(Output::Help(help), _) => help.clone(),
		};
		Ok(rendered)
	}

	pub fn write_to(&self, format: OutputFormat, out: &mut impl Write) -> Result<()> {
		out.write_all(self.render(format)?.as_bytes())?;
		out.flush()?;
		Ok(())
	}
}

/// Error information for failed commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
	pub code: ErrorCode,
	pub message: String,
}

/// Stable error codes, printed in brackets before the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Could not open or keep the session (refused, auth, handshake, timeout)
	ConnectionFailed,
	/// OBS has no scenes
	NoScenes,
	/// Scene index is not a non-negative integer
	InvalidIndex,
	/// Scene index past the end of the list
	IndexOutOfBounds,
	/// Program scene is missing from the scene list
	UnknownCurrentScene,
	/// Unrecognized output format
	InvalidFormat,
	/// OBS rejected a request
	RemoteError,
	/// Writing output failed
	IoError,
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::ConnectionFailed => write!(f, "CONNECTION_FAILED"),
			ErrorCode::NoScenes => write!(f, "NO_SCENES"),
			ErrorCode::InvalidIndex => write!(f, "INVALID_INDEX"),
			ErrorCode::IndexOutOfBounds => write!(f, "INDEX_OUT_OF_BOUNDS"),
			ErrorCode::UnknownCurrentScene => write!(f, "UNKNOWN_CURRENT_SCENE"),
			ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
			ErrorCode::RemoteError => write!(f, "REMOTE_ERROR"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}

pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}
