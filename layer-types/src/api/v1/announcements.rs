use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::{
	api::v1::{MessagePart, PushNotification, Sender},
	id::HasId,
};

pub const SEGMENT: &str = "announcements";

/// Announcement-side view of a sender. The endpoint only addresses senders
/// by display name, so the user id is never forwarded even when set.
#[derive(Debug, Clone)]
pub struct SenderName<'a>(pub &'a Sender);

impl Serialize for SenderName<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut state = serializer.serialize_struct("Sender", 1)?;
		state.serialize_field("name", &self.0.name)?;
		state.end()
	}
}

/// Body for sending an announcement to a list of recipients.
#[derive(Serialize, Debug, Clone)]
pub struct Request<'a> {
	pub sender: SenderName<'a>,
	pub recipients: &'a [String],
	pub parts: &'a [MessagePart],
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notification: Option<&'a PushNotification>,
}

/// The platform's record of a sent announcement.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default, with = "crate::serde::time::optional")]
	pub sent_at: Option<DateTime<Utc>>,
	#[serde(
		default,
		deserialize_with = "crate::serde::option::default_on_null::deserialize"
	)]
	pub recipients: Vec<String>,
	#[serde(default)]
	pub sender: Option<Sender>,
	#[serde(
		default,
		deserialize_with = "crate::serde::option::default_on_null::deserialize"
	)]
	pub parts: Vec<MessagePart>,
}

impl HasId for Announcement {
	fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}
}
