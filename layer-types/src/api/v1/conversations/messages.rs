use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Conversation;
use crate::{
	api::v1::{MessagePart, PushNotification, Sender},
	id::HasId,
};

pub const SEGMENT: &str = "messages";

/// Body for sending a message to a conversation's messages sub-resource.
#[derive(Serialize, Debug, Clone)]
pub struct Request<'a> {
	pub sender: &'a Sender,
	pub parts: &'a [MessagePart],
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notification: Option<&'a PushNotification>,
}

/// A message as returned by the platform after sending.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default, with = "crate::serde::time::optional")]
	pub sent_at: Option<DateTime<Utc>>,
	#[serde(default)]
	pub sender: Option<Sender>,
	/// Snapshot of the parent conversation, not a live reference.
	#[serde(default)]
	pub conversation: Option<Conversation>,
	#[serde(
		default,
		deserialize_with = "crate::serde::option::default_on_null::deserialize"
	)]
	pub parts: Vec<MessagePart>,
	/// Delivery status keyed by recipient id.
	#[serde(
		default,
		deserialize_with = "crate::serde::option::default_on_null::deserialize"
	)]
	pub recipient_status: HashMap<String, String>,
}

impl HasId for Message {
	fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn decodes_sent_message() {
		let message: Message = serde_json::from_value(json!({
			"id": "layer:///messages/940de862-3c96-11e4-baad-164230d1df67",
			"url": "https://api.layer.com/apps/app/messages/940de862-3c96-11e4-baad-164230d1df67",
			"sent_at": "2014-09-09T04:44:47+00:00",
			"sender": {"name": "t-bone"},
			"conversation": {
				"id": "layer:///conversations/f3cc7b32-3c92-11e4-baad-164230d1df67"
			},
			"parts": [
				{"body": "Hello, World!", "mime_type": "text/plain"}
			],
			"recipient_status": {
				"777": "sent",
				"999": "read"
			}
		}))
		.unwrap();

		assert_eq!(message.uuid(), Some("940de862-3c96-11e4-baad-164230d1df67"));
		assert_eq!(
			message.sender,
			Some(Sender::with_name("t-bone"))
		);
		assert_eq!(
			message
				.conversation
				.as_ref()
				.and_then(|conversation| conversation.uuid()),
			Some("f3cc7b32-3c92-11e4-baad-164230d1df67")
		);
		assert_eq!(message.parts, vec![MessagePart::text("Hello, World!")]);
		assert_eq!(
			message.recipient_status.get("999").map(String::as_str),
			Some("read")
		);
	}

	#[test]
	fn null_nested_entities_decode_to_absent() {
		let message: Message = serde_json::from_value(json!({
			"id": null,
			"sender": null,
			"conversation": null,
			"parts": null,
			"recipient_status": null
		}))
		.unwrap();
		assert_eq!(message.sender, None);
		assert_eq!(message.conversation, None);
		assert!(message.parts.is_empty());
		assert!(message.recipient_status.is_empty());
	}

	#[test]
	fn request_skips_absent_notification() {
		let sender = Sender::with_id("u1");
		let parts = vec![MessagePart::text("hi")];
		let request = Request {
			sender: &sender,
			parts: &parts,
			notification: None,
		};
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"sender": {"user_id": "u1"},
				"parts": [{"body": "hi", "mime_type": "text/plain"}]
			})
		);
	}
}
