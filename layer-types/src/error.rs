use serde::Deserialize;
use thiserror::Error;

/// Error document returned by the platform alongside non-success statuses.
#[derive(Deserialize, Debug)]
struct ErrorBody {
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	code: Option<String>,
	#[serde(default)]
	id: Option<String>,
}

/// Normalized form of every non-success API response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
	"API Error ({http_status}), message: `{message:?}`, code: `{code:?}`, id: `{error_id:?}`"
)]
pub struct PlatformError {
	pub message: Option<String>,
	pub http_status: u16,
	pub code: Option<String>,
	pub error_id: Option<String>,
}

impl PlatformError {
	/// Builds the error from a non-success response body. A JSON body
	/// contributes the fields the platform documents; anything else is
	/// carried verbatim as the message.
	pub fn from_response(http_status: u16, body: &str) -> Self {
		match serde_json::from_str::<ErrorBody>(body) {
			Ok(error) => Self {
				message: error.message,
				http_status,
				code: error.code,
				error_id: error.id,
			},
			Err(_) => Self {
				message: Some(body.to_owned()),
				http_status,
				code: None,
				error_id: None,
			},
		}
	}
}
