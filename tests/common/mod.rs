//! Shared helpers for integration tests.

#![allow(dead_code)]

// std
use std::time::Duration;
// crates.io
use httpmock::MockServer;
// self
use wechat_oauth2::{
	ClientBuilder, ReqwestOAuthClient, http::ReqwestHttpClient, provider::ProviderEndpoints,
	reqwest::{Client as ReqwestClient, redirect::Policy},
	url::Url,
};

pub const APP_ID: &str = "wxd31cc88f77409a67";
pub const SECRET: &str = "0eea140ef5acb8508b2af4b84563ee2e";
pub const CODE: &str = "011YKpll2l1fg84TWQkl2Ujba61YKplQ";

pub const TOKEN_PATH: &str = "/sns/oauth2/access_token";
pub const USER_INFO_PATH: &str = "/sns/userinfo";

pub const TOKEN_BODY: &str = "{\"access_token\":\"T\",\"expires_in\":7200,\"refresh_token\":\"R\",\"openid\":\"O\",\"scope\":\"snsapi_userinfo\"}";
pub const PROFILE_BODY: &str = "{\"openid\":\"O\",\"nickname\":\"Band\",\"sex\":1,\"province\":\"Guangdong\",\"city\":\"Shenzhen\",\"country\":\"CN\",\"headimgurl\":\"https://thirdwx.qlogo.cn/mmopen/avatar/46\",\"privilege\":[\"chinaunicom\"]}";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.redirect(Policy::none())
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Endpoint set rooted at the mock server.
pub fn mock_endpoints(server: &MockServer) -> ProviderEndpoints {
	let base = Url::parse(&server.base_url()).expect("Mock server base URL should parse.");

	ProviderEndpoints::rooted_at(&base).expect("Mock endpoints should build.")
}

/// Client pointed at the mock server with the default timeout.
pub fn build_test_client(server: &MockServer) -> ReqwestOAuthClient {
	build_test_client_with_timeout(server, ClientBuilder::DEFAULT_TIMEOUT)
}

/// Client pointed at the mock server with a custom timeout.
pub fn build_test_client_with_timeout(
	server: &MockServer,
	timeout: Duration,
) -> ReqwestOAuthClient {
	ClientBuilder::new()
		.endpoints(mock_endpoints(server))
		.timeout(timeout)
		.build_with(test_reqwest_http_client())
		.expect("Test client should build.")
}
