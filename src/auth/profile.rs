//! User profile returned by the `sns/userinfo` endpoint.

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Gender reported on the profile (`0` unknown, `1` male, `2` female).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Sex {
	#[default]
	/// Not disclosed, or a value the client does not recognize.
	Unknown,
	/// `1`.
	Male,
	/// `2`.
	Female,
}
impl From<i64> for Sex {
	fn from(value: i64) -> Self {
		match value {
			1 => Self::Male,
			2 => Self::Female,
			_ => Self::Unknown,
		}
	}
}
impl From<Sex> for i64 {
	fn from(value: Sex) -> Self {
		match value {
			Sex::Unknown => 0,
			Sex::Male => 1,
			Sex::Female => 2,
		}
	}
}

/// Profile of the user who granted `snsapi_userinfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	/// User identifier scoped to the requesting application.
	#[serde(rename = "openid")]
	pub open_id: String,
	/// Display name.
	#[serde(default)]
	pub nickname: String,
	/// Gender.
	#[serde(default)]
	pub sex: Sex,
	/// Province from the user's profile.
	#[serde(default)]
	pub province: String,
	/// City from the user's profile.
	#[serde(default)]
	pub city: String,
	/// Country code, e.g. `CN`.
	#[serde(default)]
	pub country: String,
	/// Square avatar URL; the trailing path segment selects the size (`0`, `46`, `64`, `96`,
	/// `132`). Empty when the user has no avatar.
	#[serde(rename = "headimgurl", default)]
	pub avatar_url: String,
	/// Privilege labels, in provider order.
	#[serde(rename = "privilege", default, deserialize_with = "null_as_default")]
	pub privileges: Vec<String>,
	/// Cross-application identifier, present only when the account is bound to an open
	/// platform account.
	#[serde(
		rename = "unionid",
		default,
		deserialize_with = "empty_as_none",
		skip_serializing_if = "Option::is_none"
	)]
	pub union_id: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn decode(raw: &str) -> UserProfile {
		serde_json::from_str(raw).expect("User profile fixture should decode.")
	}

	#[test]
	fn decodes_full_profile() {
		let profile = decode(
			"{\"openid\":\"O\",\"nickname\":\"N\",\"sex\":2,\"province\":\"P\",\"city\":\"C\",\"country\":\"CN\",\"headimgurl\":\"https://img/0\",\"privilege\":[\"chinaunicom\",\"vip\"],\"unionid\":\"U\"}",
		);

		assert_eq!(profile.open_id, "O");
		assert_eq!(profile.nickname, "N");
		assert_eq!(profile.sex, Sex::Female);
		assert_eq!(profile.avatar_url, "https://img/0");
		assert_eq!(profile.privileges, vec!["chinaunicom".to_owned(), "vip".to_owned()]);
		assert_eq!(profile.union_id.as_deref(), Some("U"));
	}

	#[test]
	fn missing_or_empty_union_id_is_none() {
		assert_eq!(decode("{\"openid\":\"O\"}").union_id, None);
		assert_eq!(decode("{\"openid\":\"O\",\"unionid\":\"\"}").union_id, None);
		assert_eq!(decode("{\"openid\":\"O\",\"unionid\":null}").union_id, None);
	}

	#[test]
	fn null_privileges_and_unknown_sex_fall_back() {
		let profile = decode("{\"openid\":\"O\",\"privilege\":null,\"sex\":7}");

		assert!(profile.privileges.is_empty());
		assert_eq!(profile.sex, Sex::Unknown);
	}

	#[test]
	fn sex_serializes_as_integer() {
		assert_eq!(serde_json::to_string(&Sex::Male).expect("Sex should serialize."), "1");
	}
}
