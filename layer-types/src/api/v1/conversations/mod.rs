pub mod create;
pub mod messages;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::id::HasId;

pub const SEGMENT: &str = "conversations";

/// A conversation between a fixed set of participants, as returned by the
/// fetch and create endpoints.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Conversation {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub messages_url: Option<String>,
	#[serde(default, with = "crate::serde::time::optional")]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(
		default,
		deserialize_with = "crate::serde::option::default_on_null::deserialize"
	)]
	pub participants: Vec<String>,
	#[serde(
		default,
		deserialize_with = "crate::serde::option::default_on_null::deserialize"
	)]
	pub distinct: bool,
	/// Free-form data the platform passes through to clients untouched.
	#[serde(default)]
	pub metadata: Option<serde_json::Value>,
}

impl HasId for Conversation {
	fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}
}
