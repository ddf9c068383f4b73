/// Pulls the UUID out of a resource identifier.
///
/// The platform never returns a raw UUID, only an identifier URI of the form
/// `layer:///conversations/f3cc7b32-3c92-11e4-baad-164230d1df67`. The UUID is
/// only present when the path holds exactly a resource type and a 36
/// character final segment.
pub fn extract_uuid(id: &str) -> Option<&str> {
	let (_, path) = id.split_once("://")?;
	let segments: Vec<&str> = path.split('/').collect();
	if segments.len() == 3 && segments[2].len() == 36 {
		Some(segments[2])
	} else {
		None
	}
}

/// Implemented by every response entity addressed by an identifier URI.
pub trait HasId {
	fn id(&self) -> Option<&str>;

	/// The UUID derived from the identifier URI, when it has the expected
	/// shape.
	fn uuid(&self) -> Option<&str> {
		self.id().and_then(extract_uuid)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_uuid_from_identifier() {
		assert_eq!(
			extract_uuid("layer:///conversations/f3cc7b32-3c92-11e4-baad-164230d1df67"),
			Some("f3cc7b32-3c92-11e4-baad-164230d1df67")
		);
	}

	#[test]
	fn rejects_wrong_segment_counts() {
		assert_eq!(extract_uuid("layer:///conversations"), None);
		assert_eq!(
			extract_uuid(
				"layer:///conversations/f3cc7b32-3c92-11e4-baad-164230d1df67/messages"
			),
			None
		);
		assert_eq!(extract_uuid("f3cc7b32-3c92-11e4-baad-164230d1df67"), None);
	}

	#[test]
	fn rejects_short_final_segment() {
		assert_eq!(extract_uuid("layer:///conversations/f3cc7b32"), None);
	}
}
