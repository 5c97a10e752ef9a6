//! Access token to user profile exchange, and the chained code-to-profile call.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, UserProfile},
	client::Client,
	http::ProviderHttpClient,
	obs::{self, CallKind},
};

const ENDPOINT: &str = "user_info";

impl<C> Client<C>
where
	C: ProviderHttpClient,
{
	/// Fetches the profile of the user who granted `token`.
	///
	/// The provider only answers for tokens issued under `snsapi_userinfo`; a
	/// `snsapi_base` token yields a provider error.
	pub async fn fetch_user_profile(&self, token: &AccessToken) -> Result<UserProfile> {
		obs::observe_call(CallKind::UserProfile, "fetch_user_profile", async move {
			let url = self.user_info_url(token);

			self.call::<UserProfile>(ENDPOINT, url).await
		})
		.await
	}

	/// Exchanges `code` for a token, then the token for the user's profile.
	///
	/// Stops at the first failure and returns it unchanged; the profile endpoint is never
	/// contacted when the token exchange fails.
	pub async fn fetch_user_profile_by_code(
		&self,
		app_id: &str,
		secret: &str,
		code: &str,
	) -> Result<UserProfile> {
		obs::observe_call(CallKind::UserProfileByCode, "fetch_user_profile_by_code", async move {
			let token = self.fetch_access_token(app_id, secret, code).await?;

			self.fetch_user_profile(&token).await
		})
		.await
	}

	pub(crate) fn user_info_url(&self, token: &AccessToken) -> Url {
		let mut url = self.endpoints().user_info.clone();

		url.query_pairs_mut()
			.append_pair("access_token", token.token.expose())
			.append_pair("openid", &token.open_id)
			.append_pair("lang", self.lang().as_str());

		url
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		client::ClientBuilder,
		http::{ProviderFuture, ProviderRequest},
		provider::Lang,
	};

	struct NoopHttpClient;
	impl ProviderHttpClient for NoopHttpClient {
		fn get(&self, _request: ProviderRequest) -> ProviderFuture<'_> {
			unreachable!("URL construction tests never dispatch requests.")
		}
	}

	fn token() -> AccessToken {
		serde_json::from_str("{\"access_token\":\"T+1\",\"openid\":\"O\"}")
			.expect("Token fixture should decode.")
	}

	#[test]
	fn profile_url_defaults_to_simplified_chinese() {
		let client = Client::with_http_client(NoopHttpClient);

		assert_eq!(
			client.user_info_url(&token()).as_str(),
			"https://api.weixin.qq.com/sns/userinfo?access_token=T%2B1&openid=O&lang=zh_CN"
		);
	}

	#[test]
	fn profile_url_follows_configured_language() {
		let client = ClientBuilder::new()
			.lang(Lang::En)
			.build_with(NoopHttpClient)
			.expect("Client should build.");

		assert!(client.user_info_url(&token()).as_str().ends_with("&lang=en"));
	}
}
