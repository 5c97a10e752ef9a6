//! Authorization redirect URL builders and CSRF `state` helpers.
//!
//! These helpers never touch the network. `app_id` and `state` are inserted verbatim;
//! only the redirect URI is percent-encoded (`application/x-www-form-urlencoded`, so a
//! space becomes `+`).

// crates.io
use rand::{Rng, distr::Alphanumeric};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::Scope,
	provider::{AUTHORIZE_FRAGMENT, AUTHORIZE_URL},
};

const STATE_LEN: usize = 32;

/// Builds a `snsapi_base` authorization URL against the production endpoint.
pub fn build_base_authorization_url(app_id: &str, redirect_uri: &str, state: &str) -> String {
	build_authorization_url(app_id, redirect_uri, &Scope::Base, state)
}

/// Builds a `snsapi_userinfo` authorization URL against the production endpoint.
pub fn build_user_info_authorization_url(
	app_id: &str,
	redirect_uri: &str,
	state: &str,
) -> String {
	build_authorization_url(app_id, redirect_uri, &Scope::UserInfo, state)
}

/// Builds an authorization URL for an arbitrary scope against the production endpoint.
pub fn build_authorization_url(
	app_id: &str,
	redirect_uri: &str,
	scope: &Scope,
	state: &str,
) -> String {
	format_authorization_url(AUTHORIZE_URL, app_id, redirect_uri, scope, state)
}

pub(crate) fn format_authorization_url(
	endpoint: &str,
	app_id: &str,
	redirect_uri: &str,
	scope: &Scope,
	state: &str,
) -> String {
	let redirect = form_urlencoded::byte_serialize(redirect_uri.as_bytes()).collect::<String>();

	format!(
		"{endpoint}?appid={app_id}&redirect_uri={redirect}&response_type=code&scope={scope}&state={state}#{AUTHORIZE_FRAGMENT}"
	)
}

/// Generates a random alphanumeric `state` value for CSRF protection.
pub fn generate_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}

/// Validates the `state` echoed back on the redirect against the issued one.
pub fn verify_state(expected: &str, returned: &str) -> Result<()> {
	if expected == returned { Ok(()) } else { Err(Error::StateMismatch) }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const APP_ID: &str = "sn123fdsbnj934uq13";
	const REDIRECT: &str = "https://www.example.com/wechat/authorize?from=menu";

	#[test]
	fn base_url_matches_provider_template() {
		assert_eq!(
			build_base_authorization_url(APP_ID, REDIRECT, "1"),
			"https://open.weixin.qq.com/connect/oauth2/authorize?appid=sn123fdsbnj934uq13&redirect_uri=https%3A%2F%2Fwww.example.com%2Fwechat%2Fauthorize%3Ffrom%3Dmenu&response_type=code&scope=snsapi_base&state=1#wechat_redirect"
		);
	}

	#[test]
	fn scopes_are_the_only_difference() {
		let base = build_base_authorization_url(APP_ID, REDIRECT, "xyz");
		let user_info = build_user_info_authorization_url(APP_ID, REDIRECT, "xyz");

		assert_ne!(base, user_info);
		assert_eq!(base.replace("scope=snsapi_base", "scope=snsapi_userinfo"), user_info);
	}

	#[test]
	fn redirect_spaces_encode_as_plus() {
		let url = build_base_authorization_url(APP_ID, "https://a.example/cb?q=a b", "s");

		assert!(url.contains("redirect_uri=https%3A%2F%2Fa.example%2Fcb%3Fq%3Da+b&"));
	}

	#[test]
	fn generated_states_are_alphanumeric_and_verifiable() {
		let state = generate_state();

		assert_eq!(state.len(), STATE_LEN);
		assert!(state.chars().all(|ch| ch.is_ascii_alphanumeric()));
		assert!(verify_state(&state, &state).is_ok());
		assert!(matches!(verify_state(&state, "forged"), Err(Error::StateMismatch)));
	}
}
