use std::fmt::Display;

/// Application identifier, as shown in the developer dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppId(pub String);

impl AppId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for AppId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for AppId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for AppId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

/// Authorization token generated by the developer dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl BearerToken {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<String> for BearerToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for BearerToken {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
