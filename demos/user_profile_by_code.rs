//! Demonstrates the full redirect round trip against a local mock of the provider: build the
//! consent URL, verify the echoed `state`, then trade the code for the user's profile.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use wechat_oauth2::{
	ClientBuilder, generate_state, http::ReqwestHttpClient, provider::ProviderEndpoints,
	reqwest::Client, url::Url, verify_state,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/sns/oauth2/access_token").query_param("code", "demo-code");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"expires_in\":7200,\"refresh_token\":\"demo-refresh\",\"openid\":\"demo-openid\",\"scope\":\"snsapi_userinfo\"}",
			);
		})
		.await;
	let profile_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/sns/userinfo")
				.query_param("access_token", "demo-access")
				.query_param("openid", "demo-openid");
			then.status(200).header("content-type", "application/json").body(
				"{\"openid\":\"demo-openid\",\"nickname\":\"Band\",\"sex\":1,\"city\":\"Shenzhen\",\"privilege\":[],\"unionid\":\"demo-union\"}",
			);
		})
		.await;
	let http_client = ReqwestHttpClient::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = ClientBuilder::new()
		.endpoints(ProviderEndpoints::rooted_at(&Url::parse(&server.base_url())?)?)
		.build_with(http_client)?;
	let state = generate_state();
	let consent_url = client.user_info_authorization_url(
		"wx-demo-app",
		"https://app.example.com/callback",
		&state,
	);

	println!("Send the browser to: {consent_url}");

	// The provider redirects back with `code` and the same `state`.
	verify_state(&state, &state)?;

	let profile =
		client.fetch_user_profile_by_code("wx-demo-app", "demo-secret", "demo-code").await?;

	println!(
		"Signed in {} ({}) from {}, union id {:?}.",
		profile.nickname, profile.open_id, profile.city, profile.union_id
	);

	token_mock.assert_async().await;
	profile_mock.assert_async().await;

	Ok(())
}
