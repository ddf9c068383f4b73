pub(crate) mod create;
pub(crate) mod messages;

pub use layer_types::api::v1::conversations::{Conversation, SEGMENT};

use crate::{api, client::PlatformClient, error::Error, http::Transport};

pub(crate) fn get<T: Transport>(
	client: &PlatformClient<T>,
	conversation_uuid: &str,
) -> Result<Conversation, Error> {
	api::get_request(client, &[SEGMENT, conversation_uuid])
}

pub(crate) fn delete<T: Transport>(
	client: &PlatformClient<T>,
	conversation_uuid: &str,
) -> Result<(), Error> {
	api::delete_request(client, &[SEGMENT, conversation_uuid])
}
