pub mod announcements;
pub mod conversations;

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

pub const MIME_TEXT_PLAIN: &str = "text/plain";

fn mime_text_plain() -> String {
	MIME_TEXT_PLAIN.to_owned()
}

fn mime_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(mime_text_plain))
}

/// Message originator. Carries either a platform user id or a bare display
/// name; the wire format never holds both at once.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Sender {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
}

impl Sender {
	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			id: Some(id.into()),
			name: None,
		}
	}

	pub fn with_name(name: impl Into<String>) -> Self {
		Self {
			id: None,
			name: Some(name.into()),
		}
	}
}

impl Serialize for Sender {
	// The platform rejects payloads carrying both fields, so the id wins
	// when both are set client-side.
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut state = serializer.serialize_struct("Sender", 1)?;
		match &self.id {
			Some(id) => state.serialize_field("user_id", id)?,
			None => state.serialize_field("name", &self.name)?,
		}
		state.end()
	}
}

/// A single chunk of a message.
///
/// The platform caps part bodies at 2KiB; larger content must be split into
/// several parts by the caller before sending. Non-text content goes out
/// base64 encoded with the `encoding` field set.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessagePart {
	#[serde(
		default,
		deserialize_with = "crate::serde::option::default_on_null::deserialize"
	)]
	pub body: String,
	#[serde(default = "mime_text_plain", deserialize_with = "mime_or_default")]
	pub mime_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub encoding: Option<String>,
}

impl MessagePart {
	pub fn new(
		body: impl Into<String>,
		mime_type: impl Into<String>,
		encoding: Option<String>,
	) -> Self {
		Self {
			body: body.into(),
			mime_type: mime_type.into(),
			encoding,
		}
	}

	/// A plain `text/plain` part.
	pub fn text(body: impl Into<String>) -> Self {
		Self::new(body, MIME_TEXT_PLAIN, None)
	}
}

/// Push payload delivered alongside a message or announcement.
///
/// `recipients` customizes the notification per recipient id. Overrides are
/// reduced to text and sound on the wire; an override carrying its own
/// `recipients` map is stripped rather than sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushNotification {
	pub text: String,
	pub sound: Option<String>,
	pub recipients: HashMap<String, PushNotification>,
}

impl PushNotification {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Default::default()
		}
	}
}

impl Serialize for PushNotification {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		#[derive(Serialize)]
		struct Override<'a> {
			text: &'a str,
			sound: Option<&'a str>,
		}

		let mut len = 1;
		if self.sound.is_some() {
			len += 1;
		}
		if !self.recipients.is_empty() {
			len += 1;
		}
		let mut state = serializer.serialize_struct("PushNotification", len)?;
		state.serialize_field("text", &self.text)?;
		if let Some(sound) = &self.sound {
			state.serialize_field("sound", sound)?;
		}
		if !self.recipients.is_empty() {
			let recipients: HashMap<&str, Override> = self
				.recipients
				.iter()
				.map(|(recipient, notification)| {
					(
						recipient.as_str(),
						Override {
							text: &notification.text,
							sound: notification.sound.as_deref(),
						},
					)
				})
				.collect();
			state.serialize_field("recipients", &recipients)?;
		}
		state.end()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn sender_id_takes_precedence_over_name() {
		let sender = Sender {
			id: Some("u1".to_owned()),
			name: Some("Alice".to_owned()),
		};
		assert_eq!(
			serde_json::to_value(&sender).unwrap(),
			json!({"user_id": "u1"})
		);
	}

	#[test]
	fn sender_without_id_encodes_name() {
		let sender = Sender::with_name("Alice");
		assert_eq!(
			serde_json::to_value(&sender).unwrap(),
			json!({"name": "Alice"})
		);
	}

	#[test]
	fn message_part_round_trips() {
		let part = MessagePart::text("hello");
		let encoded = serde_json::to_value(&part).unwrap();
		assert_eq!(encoded, json!({"body": "hello", "mime_type": "text/plain"}));
		let decoded: MessagePart = serde_json::from_value(encoded).unwrap();
		assert_eq!(decoded, part);
	}

	#[test]
	fn message_part_emits_encoding_only_when_set() {
		let part = MessagePart::new("aGk=", "image/png", Some("base64".to_owned()));
		assert_eq!(
			serde_json::to_value(&part).unwrap(),
			json!({"body": "aGk=", "mime_type": "image/png", "encoding": "base64"})
		);
	}

	#[test]
	fn message_part_decode_defaults_mime_type() {
		let part: MessagePart = serde_json::from_value(json!({"body": "hi"})).unwrap();
		assert_eq!(part.mime_type, MIME_TEXT_PLAIN);
		let part: MessagePart =
			serde_json::from_value(json!({"body": "hi", "mime_type": null})).unwrap();
		assert_eq!(part.mime_type, MIME_TEXT_PLAIN);
	}

	#[test]
	fn push_notification_skips_absent_sound() {
		let notification = PushNotification::new("ping");
		assert_eq!(
			serde_json::to_value(&notification).unwrap(),
			json!({"text": "ping"})
		);
	}

	#[test]
	fn push_notification_reduces_recipient_overrides() {
		let mut nested = PushNotification::new("inner");
		nested.recipients.insert(
			"u2".to_owned(),
			PushNotification::new("should never reach the wire"),
		);
		let mut notification = PushNotification::new("ping");
		notification.sound = Some("chime.aiff".to_owned());
		notification.recipients.insert("u1".to_owned(), nested);

		assert_eq!(
			serde_json::to_value(&notification).unwrap(),
			json!({
				"text": "ping",
				"sound": "chime.aiff",
				"recipients": {
					"u1": {"text": "inner", "sound": null}
				}
			})
		);
	}
}
