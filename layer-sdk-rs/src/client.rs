use layer_types::auth::{AppId, BearerToken};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::{consts, error::Error, http::Transport};

/// Client to the server-side platform API.
///
/// Holds only immutable configuration; every operation is a single
/// stateless request/response round trip, so one client can be shared
/// freely by the caller's own concurrency layer.
pub struct PlatformClient<T = reqwest::blocking::Client> {
	app_id: AppId,
	bearer_token: BearerToken,
	transport: T,
}

impl PlatformClient {
	pub fn new(app_id: impl Into<AppId>, bearer_token: impl Into<BearerToken>) -> Self {
		Self::with_transport(app_id, bearer_token, reqwest::blocking::Client::new())
	}
}

impl<T: Transport> PlatformClient<T> {
	/// Builds a client over a caller-supplied transport.
	pub fn with_transport(
		app_id: impl Into<AppId>,
		bearer_token: impl Into<BearerToken>,
		transport: T,
	) -> Self {
		Self {
			app_id: app_id.into(),
			bearer_token: bearer_token.into(),
			transport,
		}
	}

	pub fn app_id(&self) -> &AppId {
		&self.app_id
	}

	pub(crate) fn transport(&self) -> &T {
		&self.transport
	}

	pub(crate) fn url(&self, segments: &[&str]) -> String {
		consts::app_url(self.app_id.as_str(), segments)
	}

	pub(crate) fn headers(&self) -> Result<HeaderMap, Error> {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static(consts::ACCEPT_MEDIA_TYPE));
		headers.insert(
			AUTHORIZATION,
			HeaderValue::from_str(&format!("Bearer {}", self.bearer_token.as_str()))?,
		);
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		Ok(headers)
	}
}
