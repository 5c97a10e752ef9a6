//! Redacting wrapper for the `access_token` and `refresh_token` strings.

// self
use crate::_prelude::*;

const REDACTED: &str = "<redacted>";
const ABSENT: &str = "<absent>";

/// Credential string issued by the provider.
///
/// Formatting never reveals the value; an empty secret (field missing from the payload)
/// renders as `<absent>` so logs still show whether the provider sent one.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw value for use in a provider request. Never log it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Whether the provider omitted the value.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn placeholder(&self) -> &'static str {
		if self.is_empty() { ABSENT } else { REDACTED }
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&self.placeholder()).finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.placeholder())
	}
}
