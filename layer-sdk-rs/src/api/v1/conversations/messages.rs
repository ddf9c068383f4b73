pub use layer_types::api::v1::conversations::messages::{Message, Request, SEGMENT};

use crate::{api, client::PlatformClient, error::Error, http::Transport};

pub(crate) fn post<T: Transport>(
	client: &PlatformClient<T>,
	conversation_uuid: &str,
	request: &Request<'_>,
) -> Result<Message, Error> {
	api::post_request(client, &[super::SEGMENT, conversation_uuid, SEGMENT], request)
}
