use serde::Serialize;

/// Body for creating a conversation. With `distinct` set the platform
/// reuses an existing conversation with the same participant set.
#[derive(Serialize, Debug, Clone)]
pub struct Request<'a> {
	pub participants: &'a [String],
	pub distinct: bool,
	// the platform reads explicit null metadata as "none", so the field is
	// always emitted
	pub metadata: Option<&'a serde_json::Value>,
}
