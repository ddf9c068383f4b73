use std::{cell::RefCell, collections::VecDeque};

use layer_sdk_rs::{
	Error,
	http::{HttpRequest, HttpResponse, Transport},
};
use reqwest::StatusCode;

/// Transport stand-in that replays queued responses and records every
/// request it is asked to execute.
#[derive(Default)]
pub struct MockTransport {
	requests: RefCell<Vec<HttpRequest>>,
	responses: RefCell<VecDeque<HttpResponse>>,
}

impl MockTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a canned response for the next executed request.
	pub fn push_response(&self, status: u16, body: impl Into<String>) {
		self.responses.borrow_mut().push_back(HttpResponse {
			status: StatusCode::from_u16(status).expect("valid status code"),
			body: body.into(),
		});
	}

	/// Everything executed so far, in order.
	pub fn requests(&self) -> Vec<HttpRequest> {
		self.requests.borrow().clone()
	}

	pub fn request_count(&self) -> usize {
		self.requests.borrow().len()
	}

	fn handle(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
		self.requests.borrow_mut().push(request);
		Ok(self
			.responses
			.borrow_mut()
			.pop_front()
			.expect("unexpected request: no response queued"))
	}
}

impl Transport for MockTransport {
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
		self.handle(request)
	}
}

impl Transport for &MockTransport {
	fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
		self.handle(request)
	}
}
