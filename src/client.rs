//! The OAuth client and its builder.
//!
//! A [`Client`] owns read-only configuration (endpoints, profile language, request
//! timeout) and a shared transport. Operations live in per-endpoint submodules; each is
//! one GET followed by one envelope decode, with no caching and no retries.

mod access_token;
mod user_profile;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::Scope,
	authorize,
	envelope,
	error::ConfigError,
	http::{ProviderHttpClient, ProviderRequest},
	provider::{Lang, ProviderEndpoints},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestOAuthClient = Client<ReqwestHttpClient>;

/// WeChat web authorization client.
///
/// Cloning is cheap: the transport sits behind an [`Arc`] and the configuration is
/// never mutated after construction, so one instance can serve concurrent calls.
pub struct Client<C>
where
	C: ProviderHttpClient,
{
	http_client: Arc<C>,
	endpoints: ProviderEndpoints,
	lang: Lang,
	timeout: StdDuration,
}
impl<C> Client<C>
where
	C: ProviderHttpClient,
{
	/// Creates a client with default configuration around the caller-provided transport.
	pub fn with_http_client(http_client: C) -> Self {
		Self {
			http_client: Arc::new(http_client),
			endpoints: ProviderEndpoints::default(),
			lang: Lang::default(),
			timeout: ClientBuilder::DEFAULT_TIMEOUT,
		}
	}

	/// Endpoint set this client talks to.
	pub fn endpoints(&self) -> &ProviderEndpoints {
		&self.endpoints
	}

	/// Language requested for profile fields.
	pub fn lang(&self) -> Lang {
		self.lang
	}

	/// Per-request timeout.
	pub fn timeout(&self) -> StdDuration {
		self.timeout
	}

	/// Underlying transport.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	/// Builds a `snsapi_base` authorization URL against this client's authorize endpoint.
	pub fn base_authorization_url(
		&self,
		app_id: &str,
		redirect_uri: &str,
		state: &str,
	) -> String {
		self.authorization_url(app_id, redirect_uri, &Scope::Base, state)
	}

	/// Builds a `snsapi_userinfo` authorization URL against this client's authorize endpoint.
	pub fn user_info_authorization_url(
		&self,
		app_id: &str,
		redirect_uri: &str,
		state: &str,
	) -> String {
		self.authorization_url(app_id, redirect_uri, &Scope::UserInfo, state)
	}

	/// Builds an authorization URL for an arbitrary scope.
	pub fn authorization_url(
		&self,
		app_id: &str,
		redirect_uri: &str,
		scope: &Scope,
		state: &str,
	) -> String {
		authorize::format_authorization_url(
			self.endpoints.authorize.as_str(),
			app_id,
			redirect_uri,
			scope,
			state,
		)
	}

	async fn call<T>(&self, endpoint: &'static str, url: Url) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let request = ProviderRequest { endpoint, url, timeout: self.timeout };
		let response = self.http_client.get(request).await?;

		envelope::decode(&response)
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a reqwest-backed client with the default configuration (5 second timeout,
	/// production endpoints, `zh_CN` profiles).
	pub fn new() -> Result<Self> {
		Self::builder().build()
	}

	/// Starts a [`ClientBuilder`].
	pub fn builder() -> ClientBuilder {
		ClientBuilder::new()
	}
}
impl<C> Clone for Client<C>
where
	C: ProviderHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			endpoints: self.endpoints.clone(),
			lang: self.lang,
			timeout: self.timeout,
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("endpoints", &self.endpoints)
			.field("lang", &self.lang)
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Builder for [`Client`] values.
#[derive(Clone, Debug)]
pub struct ClientBuilder {
	endpoints: ProviderEndpoints,
	lang: Lang,
	timeout: StdDuration,
}
impl ClientBuilder {
	/// Timeout applied when none is configured.
	pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(5);

	/// Creates a builder seeded with the production endpoints.
	pub fn new() -> Self {
		Self {
			endpoints: ProviderEndpoints::default(),
			lang: Lang::default(),
			timeout: Self::DEFAULT_TIMEOUT,
		}
	}

	/// Overrides the endpoint set.
	pub fn endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Overrides the profile language.
	pub fn lang(mut self, lang: Lang) -> Self {
		self.lang = lang;

		self
	}

	/// Overrides the per-request timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Validates the configuration and attaches the caller-provided transport.
	///
	/// Pass an `Arc<T>` to share one transport between clients.
	pub fn build_with<C>(self, http_client: C) -> Result<Client<C>>
	where
		C: ProviderHttpClient,
	{
		self.validate()?;

		Ok(Client {
			http_client: Arc::new(http_client),
			endpoints: self.endpoints,
			lang: self.lang,
			timeout: self.timeout,
		})
	}

	/// Validates the configuration and builds the default reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn build(self) -> Result<Client<ReqwestHttpClient>> {
		self.validate()?;

		let http_client = ReqwestHttpClient::new()?;

		self.build_with(http_client)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.timeout.is_zero() {
			return Err(ConfigError::ZeroTimeout);
		}

		self.endpoints.validate()?;

		Ok(())
	}
}
impl Default for ClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{envelope::ErrorEnvelope, error::TransportError, http::ProviderFuture};

	struct UnreachableHttpClient;
	impl ProviderHttpClient for UnreachableHttpClient {
		fn get(&self, request: ProviderRequest) -> ProviderFuture<'_> {
			Box::pin(async move {
				Err(TransportError::network(
					request.endpoint,
					std::io::Error::other("unreachable in unit tests"),
				))
			})
		}
	}

	#[test]
	fn builder_defaults_match_provider_expectations() {
		let client = ClientBuilder::new()
			.build_with(UnreachableHttpClient)
			.expect("Default configuration should be valid.");

		assert_eq!(client.timeout(), StdDuration::from_secs(5));
		assert_eq!(client.lang(), Lang::ZhCn);
		assert_eq!(client.endpoints(), &ProviderEndpoints::default());
	}

	#[test]
	fn builder_rejects_zero_timeout() {
		let err = ClientBuilder::new()
			.timeout(StdDuration::ZERO)
			.build_with(UnreachableHttpClient)
			.expect_err("Zero timeouts should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::ZeroTimeout)));
	}

	#[test]
	fn builder_rejects_invalid_endpoints() {
		let mut endpoints = ProviderEndpoints::default();

		endpoints.user_info =
			Url::parse("ftp://example.com/user").expect("Endpoint fixture should parse.");

		let err = ClientBuilder::new()
			.endpoints(endpoints)
			.build_with(UnreachableHttpClient)
			.expect_err("Non-HTTP endpoints should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidEndpoints(_))));
	}

	#[test]
	fn client_authorization_urls_follow_configured_endpoint() {
		let base = Url::parse("https://proxy.example.com/").expect("Base URL should parse.");
		let client = ClientBuilder::new()
			.endpoints(
				ProviderEndpoints::rooted_at(&base).expect("Rooted endpoints should build."),
			)
			.build_with(UnreachableHttpClient)
			.expect("Client should build.");
		let url = client.user_info_authorization_url("app", "https://cb.example/", "s");

		assert!(url.starts_with("https://proxy.example.com/connect/oauth2/authorize?appid=app&"));
		assert!(url.contains("&scope=snsapi_userinfo&state=s#wechat_redirect"));
		assert_eq!(
			client.base_authorization_url("app", "https://cb.example/", "s"),
			url.replace("snsapi_userinfo", "snsapi_base")
		);
	}

	#[test]
	fn debug_output_omits_transport() {
		let client = Client::with_http_client(UnreachableHttpClient);
		let rendered = format!("{client:?}");

		assert!(rendered.starts_with("Client {"));
		assert!(rendered.contains("timeout: 5s"));
	}

	#[tokio::test]
	async fn transport_failures_surface_unchanged() {
		let client = Client::with_http_client(UnreachableHttpClient);
		let err = client
			.call::<ErrorEnvelope>("user_info", client.endpoints().user_info.clone())
			.await
			.expect_err("Unreachable transport should fail.");

		assert!(matches!(
			err,
			Error::Transport(TransportError::Network { endpoint: "user_info", .. })
		));
	}
}
