//! Transport primitives for provider calls.
//!
//! The module exposes [`ProviderHttpClient`] alongside [`ProviderRequest`] and
//! [`ProviderResponse`] so downstream crates can plug in their own HTTP stack. Every
//! provider call is a single GET whose full body is buffered before decoding; the
//! transport reports failures to send or read as [`TransportError`] and leaves status
//! interpretation to the client.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::redirect::Policy;
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`ProviderHttpClient::get`].
pub type ProviderFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ProviderResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of issuing provider GET requests.
///
/// Implementations must be `Send + Sync + 'static` so one client can serve concurrent
/// calls, and must enforce [`ProviderRequest::timeout`], reporting expiry as
/// [`TransportError::Timeout`].
pub trait ProviderHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Issues a GET and buffers the whole response body.
	fn get(&self, request: ProviderRequest) -> ProviderFuture<'_>;
}
impl<T> ProviderHttpClient for Arc<T>
where
	T: ?Sized + ProviderHttpClient,
{
	fn get(&self, request: ProviderRequest) -> ProviderFuture<'_> {
		(**self).get(request)
	}
}

/// Outbound GET request built by the client.
#[derive(Clone)]
pub struct ProviderRequest {
	/// Endpoint label (`access_token` or `user_info`).
	pub endpoint: &'static str,
	/// Fully-formed URL including the query string.
	pub url: Url,
	/// Upper bound for sending the request and reading the body.
	pub timeout: StdDuration,
}
impl Debug for ProviderRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		// The query carries the app secret or access token.
		let mut redacted = self.url.clone();

		redacted.set_query(None);

		f.debug_struct("ProviderRequest")
			.field("endpoint", &self.endpoint)
			.field("url", &redacted.as_str())
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Buffered provider response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ProviderResponse {
	/// Builds a response from a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Provider endpoints answer directly, so the default client does not follow redirects.
/// Configure any custom [`ReqwestClient`] the same way before passing it to
/// [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds the default reqwest client with redirects disabled.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProviderHttpClient for ReqwestHttpClient {
	fn get(&self, request: ProviderRequest) -> ProviderFuture<'_> {
		Box::pin(async move {
			let ProviderRequest { endpoint, url, timeout } = request;
			let response = self
				.0
				.get(url)
				.timeout(timeout)
				.send()
				.await
				.map_err(|err| map_reqwest_error(endpoint, err))?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(|err| map_reqwest_error(endpoint, err))?;

			Ok(ProviderResponse::new(status, body.to_vec()))
		})
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(endpoint: &'static str, err: ReqwestError) -> TransportError {
	if err.is_timeout() {
		TransportError::Timeout { endpoint }
	} else {
		TransportError::network(endpoint, err)
	}
}
