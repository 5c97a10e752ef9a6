//! Authorization code to access token exchange.

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	client::Client,
	http::ProviderHttpClient,
	obs::{self, CallKind},
	provider::GRANT_TYPE_AUTHORIZATION_CODE,
};

const ENDPOINT: &str = "access_token";

impl<C> Client<C>
where
	C: ProviderHttpClient,
{
	/// Exchanges an authorization `code` for an [`AccessToken`].
	///
	/// `app_id` and `secret` identify the official account. The code is single-use; a
	/// second exchange fails with a provider error (`40163`).
	pub async fn fetch_access_token(
		&self,
		app_id: &str,
		secret: &str,
		code: &str,
	) -> Result<AccessToken> {
		obs::observe_call(CallKind::AccessToken, "fetch_access_token", async move {
			let url = self.access_token_url(app_id, secret, code);

			self.call::<AccessToken>(ENDPOINT, url).await
		})
		.await
	}

	pub(crate) fn access_token_url(&self, app_id: &str, secret: &str, code: &str) -> Url {
		let mut url = self.endpoints().access_token.clone();

		url.query_pairs_mut()
			.append_pair("appid", app_id)
			.append_pair("secret", secret)
			.append_pair("code", code)
			.append_pair("grant_type", GRANT_TYPE_AUTHORIZATION_CODE);

		url
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::{ProviderFuture, ProviderRequest};

	struct NoopHttpClient;
	impl ProviderHttpClient for NoopHttpClient {
		fn get(&self, _request: ProviderRequest) -> ProviderFuture<'_> {
			unreachable!("URL construction tests never dispatch requests.")
		}
	}

	#[test]
	fn token_url_carries_all_query_parameters() {
		let client = Client::with_http_client(NoopHttpClient);
		let url = client.access_token_url("wx-app", "s3cr&t", "code-1");

		assert_eq!(
			url.as_str(),
			"https://api.weixin.qq.com/sns/oauth2/access_token?appid=wx-app&secret=s3cr%26t&code=code-1&grant_type=authorization_code"
		);
	}
}
