use layer_types::error::PlatformError;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
	client::PlatformClient,
	error::Error,
	http::{HttpRequest, HttpResponse, Transport},
};

pub(crate) mod v1;

fn execute<T: Transport>(
	client: &PlatformClient<T>,
	method: Method,
	segments: &[&str],
	body: Option<String>,
) -> Result<HttpResponse, Error> {
	let url = client.url(segments);
	log::debug!("{method} {url}");
	let response = client.transport().execute(HttpRequest {
		method,
		url,
		headers: client.headers()?,
		body,
	})?;
	if response.status.is_success() {
		return Ok(response);
	}
	let error = PlatformError::from_response(response.status.as_u16(), &response.body);
	log::warn!("Request failed: {error}");
	Err(error.into())
}

pub(crate) fn get_request<T: Transport, U: DeserializeOwned>(
	client: &PlatformClient<T>,
	segments: &[&str],
) -> Result<U, Error> {
	let response = execute(client, Method::GET, segments, None)?;
	Ok(serde_json::from_str(&response.body)?)
}

pub(crate) fn post_request<T: Transport, R: Serialize, U: DeserializeOwned>(
	client: &PlatformClient<T>,
	segments: &[&str],
	request: &R,
) -> Result<U, Error> {
	let body = serde_json::to_string(request)?;
	let response = execute(client, Method::POST, segments, Some(body))?;
	Ok(serde_json::from_str(&response.body)?)
}

pub(crate) fn delete_request<T: Transport>(
	client: &PlatformClient<T>,
	segments: &[&str],
) -> Result<(), Error> {
	// the response body, if any, is intentionally discarded
	execute(client, Method::DELETE, segments, None)?;
	Ok(())
}
