pub use layer_types::api::v1::conversations::create::Request;

use layer_types::api::v1::conversations::Conversation;

use crate::{api, client::PlatformClient, error::Error, http::Transport};

pub(crate) fn post<T: Transport>(
	client: &PlatformClient<T>,
	request: &Request<'_>,
) -> Result<Conversation, Error> {
	api::post_request(client, &[super::SEGMENT], request)
}
