//! Authorization scopes understood by the provider.

// self
use crate::_prelude::*;

/// Delimiter the provider uses when echoing granted scopes.
pub const SCOPE_DELIMITER: char = ',';

/// Requested or granted permission level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
	/// `snsapi_base`: silent authorization, yields the open ID only.
	Base,
	/// `snsapi_userinfo`: explicit consent, unlocks the user profile endpoint.
	UserInfo,
	/// Any scope string the client does not model.
	Other(String),
}
impl Scope {
	/// Returns the wire value used in authorization URLs and token responses.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Base => "snsapi_base",
			Self::UserInfo => "snsapi_userinfo",
			Self::Other(value) => value.as_str(),
		}
	}

	/// Splits the provider's comma-separated scope string, skipping empty entries.
	pub fn parse_list(raw: &str) -> Vec<Scope> {
		raw.split(SCOPE_DELIMITER)
			.map(str::trim)
			.filter(|value| !value.is_empty())
			.map(Scope::from)
			.collect()
	}
}
impl From<&str> for Scope {
	fn from(value: &str) -> Self {
		match value {
			"snsapi_base" => Self::Base,
			"snsapi_userinfo" => Self::UserInfo,
			other => Self::Other(other.to_owned()),
		}
	}
}
impl From<String> for Scope {
	fn from(value: String) -> Self {
		match value.as_str() {
			"snsapi_base" => Self::Base,
			"snsapi_userinfo" => Self::UserInfo,
			_ => Self::Other(value),
		}
	}
}
impl From<Scope> for String {
	fn from(value: Scope) -> Self {
		match value {
			Scope::Other(value) => value,
			known => known.as_str().to_owned(),
		}
	}
}
impl FromStr for Scope {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from(s))
	}
}
impl Display for Scope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
