use thiserror::Error;

use crate::output::{CommandError, ErrorCode, OutputFormat};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Engine(#[from] obs_switch::Error),

	#[error("{0}")]
	Format(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl CliError {
	/// Convert this error to a [`CommandError`] for reporting.
	pub fn to_command_error(&self) -> CommandError {
		use obs_switch::{Error, IndexError};

		let code = match self {
			CliError::Engine(err) => match err {
				Error::Connection { .. } => ErrorCode::ConnectionFailed,
				Error::EmptyCollection(_) => ErrorCode::NoScenes,
				Error::Index(IndexError::NotInteger(_)) => ErrorCode::InvalidIndex,
				Error::Index(IndexError::OutOfBounds { .. }) => ErrorCode::IndexOutOfBounds,
				Error::Toggle(_) => ErrorCode::UnknownCurrentScene,
				Error::Remote { .. } => ErrorCode::RemoteError,
				Error::Protocol(_) => ErrorCode::InternalError,
			},
			CliError::Format(_) => ErrorCode::InvalidFormat,
			CliError::Io(_) => ErrorCode::IoError,
			CliError::Json(_) => ErrorCode::InternalError,
		};

		CommandError {
			code,
			message: self.to_string(),
		}
	}
}

impl CliError {
	/// Recognizes a rejected `--format` value among argument parsing errors.
	///
	/// Other parse errors are left to clap, which prints usage and exits.
	pub fn from_parse_error(err: &clap::Error) -> Option<Self> {
		use clap::error::{ContextKind, ContextValue, ErrorKind};

		if err.kind() != ErrorKind::InvalidValue {
			return None;
		}
		match err.get(ContextKind::InvalidArg) {
			Some(ContextValue::String(arg)) if arg.starts_with("--format") => {}
			_ => return None,
		}
		let value = match err.get(ContextKind::InvalidValue) {
			Some(ContextValue::String(value)) => value.as_str(),
			_ => "",
		};
		value.parse::<OutputFormat>().err().map(CliError::Format)
	}
}

impl From<obs_switch::IndexError> for CliError {
	fn from(err: obs_switch::IndexError) -> Self {
		CliError::Engine(err.into())
	}
}
