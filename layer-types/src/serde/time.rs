pub mod optional {
	use chrono::{DateTime, Utc};
	use serde::Deserialize;

	/// Best-effort ISO 8601 parsing. Absent, empty and unparseable
	/// datestamps all decode to `None`.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = Option::<String>::deserialize(deserializer)?;
		Ok(value
			.filter(|date| !date.is_empty())
			.and_then(|date| DateTime::parse_from_rfc3339(&date).ok())
			.map(|date| date.with_timezone(&Utc)))
	}

	pub fn serialize<S>(
		value: &Option<DateTime<Utc>>,
		serializer: S,
	) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match value {
			Some(time) => serializer.serialize_str(&time.to_rfc3339()),
			None => serializer.serialize_none(),
		}
	}
}
