use reqwest::{Method, StatusCode, header::HeaderMap};

use crate::error::Error;

/// A fully described outgoing call. The transport adds nothing beyond
/// delivery.
#[derive(Debug, Clone)]
pub struct HttpRequest {
	pub method: Method,
	pub url: String,
	pub headers: HeaderMap,
	pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
	pub status: StatusCode,
	pub body: String,
}

/// Thin synchronous HTTP seam.
///
/// The client drives exactly one call per operation through this trait.
/// Timeout and connection policy belong to the implementation.
pub trait Transport {
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

impl Transport for reqwest::blocking::Client {
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
		let mut builder = self
			.request(request.method, request.url.as_str())
			.headers(request.headers);
		if let Some(body) = request.body {
			builder = builder.body(body);
		}
		let response = builder.send()?;
		let status = response.status();
		let body = response.text()?;
		Ok(HttpResponse { status, body })
	}
}
