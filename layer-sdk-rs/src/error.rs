use layer_types::error::PlatformError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("Platform Error: `{0}`")]
	Platform(#[from] PlatformError),
	#[error("Transport Error: `{0}`")]
	Transport(#[from] reqwest::Error),
	#[error("Serialization Error: `{0}`")]
	Json(#[from] serde_json::Error),
	#[error("Invalid Bearer Token: `{0}`")]
	InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
	/// The normalized platform failure, when that is what this error is.
	pub fn as_platform(&self) -> Option<&PlatformError> {
		match self {
			Error::Platform(error) => Some(error),
			_ => None,
		}
	}
}
