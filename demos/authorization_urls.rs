//! Prints both consent URL variants for the production endpoint. No network access.

// self
use wechat_oauth2::{
	build_base_authorization_url, build_user_info_authorization_url, generate_state,
};

fn main() {
	let app_id = "wx520c15f417810387";
	let redirect_uri = "https://app.example.com/wechat/callback?from=menu";
	let state = generate_state();

	println!(
		"Silent (openid only):\n{}",
		build_base_authorization_url(app_id, redirect_uri, &state)
	);
	println!(
		"Consent (full profile):\n{}",
		build_user_info_authorization_url(app_id, redirect_uri, &state)
	);
}
