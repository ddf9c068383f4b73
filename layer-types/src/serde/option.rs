pub(crate) mod default_on_null {
	use serde::{Deserialize, Deserializer};

	/// The platform emits explicit nulls where a field would otherwise be
	/// missing; both decode to the field's default.
	pub fn deserialize<'de, D: Deserializer<'de>, T: Deserialize<'de> + Default>(
		deserializer: D,
	) -> Result<T, D::Error> {
		Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
	}
}
