use layer_types::{
	api::v1::{
		MessagePart, PushNotification, Sender,
		conversations::{Conversation, messages},
	},
	id::HasId,
};

use crate::{api, client::PlatformClient, error::Error, http::Transport};

impl<T: Transport> PlatformClient<T> {
	/// Sends a message to a conversation.
	///
	/// Returns `Ok(None)` without touching the network when the
	/// conversation, the sender or the parts are missing. A conversation
	/// whose identifier carries no UUID cannot be addressed and counts as
	/// missing.
	pub fn send_message(
		&self,
		conversation: Option<&Conversation>,
		sender: Option<&Sender>,
		parts: &[MessagePart],
		notification: Option<&PushNotification>,
	) -> Result<Option<messages::Message>, Error> {
		let Some(conversation) = conversation else {
			return Ok(None);
		};
		let Some(sender) = sender else {
			return Ok(None);
		};
		if parts.is_empty() {
			return Ok(None);
		}
		let Some(conversation_uuid) = conversation.uuid() else {
			return Ok(None);
		};

		api::v1::conversations::messages::post(
			self,
			conversation_uuid,
			&messages::Request {
				sender,
				parts,
				notification,
			},
		)
		.map(Some)
	}
}
