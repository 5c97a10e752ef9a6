//! Access token issued by the code exchange, plus lifetime helpers.

// self
use crate::{
	_prelude::*,
	auth::{Scope, token::secret::TokenSecret},
};

/// Credential returned by the `sns/oauth2/access_token` endpoint.
///
/// The client never caches or refreshes it; callers own the lifetime. `issued_at` is not
/// part of the provider payload and is stamped when the response is decoded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessToken {
	/// Web authorization access token; callers must avoid logging it.
	#[serde(rename = "access_token")]
	pub token: TokenSecret,
	/// Lifetime in seconds, as reported by the provider.
	#[serde(default)]
	pub expires_in: i64,
	/// Refresh token paired with the access token.
	#[serde(default)]
	pub refresh_token: TokenSecret,
	/// User identifier scoped to the requesting application.
	#[serde(rename = "openid")]
	pub open_id: String,
	/// Comma-separated scopes the user granted.
	#[serde(default)]
	pub scope: String,
	/// Instant the token was received.
	#[serde(default = "OffsetDateTime::now_utc")]
	pub issued_at: OffsetDateTime,
}
impl AccessToken {
	/// Absolute expiry derived from `issued_at` and `expires_in`.
	///
	/// `None` when the reported lifetime runs past the representable date range.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		self.issued_at.checked_add(Duration::seconds(self.expires_in))
	}

	/// Returns `true` if the token has expired at the provided instant.
	///
	/// A lifetime beyond the representable date range never expires.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at().is_some_and(|expires_at| instant >= expires_at)
	}

	/// Returns `true` if the token is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Granted scopes parsed from the comma-separated `scope` field.
	pub fn scopes(&self) -> Vec<Scope> {
		Scope::parse_list(&self.scope)
	}

	/// Returns `true` if the grant covers the profile endpoint.
	pub fn allows_user_info(&self) -> bool {
		self.scopes().contains(&Scope::UserInfo)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	fn decode(raw: &str) -> AccessToken {
		serde_json::from_str(raw).expect("Access token fixture should decode.")
	}

	#[test]
	fn decodes_provider_field_names() {
		let token = decode(
			"{\"access_token\":\"T\",\"expires_in\":7200,\"refresh_token\":\"R\",\"openid\":\"O\",\"scope\":\"snsapi_userinfo\"}",
		);

		assert_eq!(token.token.expose(), "T");
		assert_eq!(token.expires_in, 7200);
		assert_eq!(token.refresh_token.expose(), "R");
		assert_eq!(token.open_id, "O");
		assert_eq!(token.scope, "snsapi_userinfo");
		assert!(token.allows_user_info());
	}

	#[test]
	fn optional_fields_default_when_missing() {
		let token = decode("{\"access_token\":\"T\",\"openid\":\"O\"}");

		assert_eq!(token.expires_in, 0);
		assert!(token.refresh_token.is_empty());
		assert!(token.scopes().is_empty());
		assert!(!token.allows_user_info());
	}

	#[test]
	fn expiry_is_relative_to_issue_instant() {
		let mut token = decode("{\"access_token\":\"T\",\"openid\":\"O\",\"expires_in\":7200}");

		token.issued_at = datetime!(2024-01-01 00:00 UTC);

		assert_eq!(token.expires_at(), Some(datetime!(2024-01-01 02:00 UTC)));
		assert!(!token.is_expired_at(datetime!(2024-01-01 01:59:59 UTC)));
		assert!(token.is_expired_at(datetime!(2024-01-01 02:00 UTC)));
	}

	#[test]
	fn out_of_range_lifetime_never_expires() {
		let token = decode(
			"{\"access_token\":\"T\",\"openid\":\"O\",\"expires_in\":9223372036854775807}",
		);

		assert_eq!(token.expires_at(), None);
		assert!(!token.is_expired());
		assert!(!token.is_expired_at(datetime!(9999-12-31 23:59:59 UTC)));
	}

	#[test]
	fn debug_output_redacts_secrets() {
		let token = decode("{\"access_token\":\"very-secret\",\"openid\":\"O\"}");
		let rendered = format!("{token:?}");

		assert!(!rendered.contains("very-secret"));
		assert!(rendered.contains("<redacted>"));
	}
}
