use layer_types::api::v1::conversations::{Conversation, create};
use serde_json::Value;

use crate::{api, client::PlatformClient, error::Error, http::Transport};

impl<T: Transport> PlatformClient<T> {
	/// Fetches an existing conversation by UUID.
	pub fn get_conversation(&self, conversation_uuid: &str) -> Result<Conversation, Error> {
		api::v1::conversations::get(self, conversation_uuid)
	}

	/// Deletes a conversation. Affects all participants in the conversation
	/// across all of their devices.
	pub fn delete_conversation(&self, conversation_uuid: &str) -> Result<(), Error> {
		api::v1::conversations::delete(self, conversation_uuid)
	}

	/// Creates a new conversation.
	///
	/// With `distinct` set the platform reuses an existing conversation for
	/// the same participant set instead of creating another one. `metadata`
	/// is passed through to clients untouched.
	pub fn create_conversation(
		&self,
		participants: &[String],
		distinct: bool,
		metadata: Option<&Value>,
	) -> Result<Conversation, Error> {
		api::v1::conversations::create::post(
			self,
			&create::Request {
				participants,
				distinct,
				metadata,
			},
		)
	}
}
