pub use layer_types::api::v1::announcements::{Announcement, Request, SEGMENT};

use crate::{api, client::PlatformClient, error::Error, http::Transport};

pub(crate) fn post<T: Transport>(
	client: &PlatformClient<T>,
	request: &Request<'_>,
) -> Result<Announcement, Error> {
	api::post_request(client, &[SEGMENT], request)
}
