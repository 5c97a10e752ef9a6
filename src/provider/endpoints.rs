//! Endpoint set a client talks to.

// self
use crate::_prelude::*;

/// Production authorization (consent) endpoint.
pub const AUTHORIZE_URL: &str = "https://open.weixin.qq.com/connect/oauth2/authorize";
/// Production code-for-token endpoint.
pub const ACCESS_TOKEN_URL: &str = "https://api.weixin.qq.com/sns/oauth2/access_token";
/// Production token-for-profile endpoint.
pub const USER_INFO_URL: &str = "https://api.weixin.qq.com/sns/userinfo";
/// Fragment the provider requires on authorization URLs.
pub const AUTHORIZE_FRAGMENT: &str = "wechat_redirect";

const AUTHORIZE_PATH: &str = "connect/oauth2/authorize";
const ACCESS_TOKEN_PATH: &str = "sns/oauth2/access_token";
const USER_INFO_PATH: &str = "sns/userinfo";

/// Errors raised while validating an endpoint set.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ProviderEndpointsError {
	/// Endpoints must use HTTP(S).
	#[error("The {endpoint} endpoint must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Query and fragment are generated per request.
	#[error("The {endpoint} endpoint must not carry a query or fragment: {url}.")]
	UnexpectedQuery {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Base URL could not be joined with a standard path.
	#[error("Base URL cannot be joined with the standard endpoint paths.")]
	InvalidBase {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// URLs for the authorization, token, and profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Consent page users are redirected to.
	pub authorize: Url,
	/// Code-for-token exchange.
	pub access_token: Url,
	/// Token-for-profile exchange.
	pub user_info: Url,
}
impl ProviderEndpoints {
	/// Creates an endpoint set from explicit URLs after validation.
	pub fn new(
		authorize: Url,
		access_token: Url,
		user_info: Url,
	) -> Result<Self, ProviderEndpointsError> {
		let endpoints = Self { authorize, access_token, user_info };

		endpoints.validate()?;

		Ok(endpoints)
	}

	/// Places all three endpoints under `base` using the provider's standard paths.
	///
	/// Useful for proxies and mock servers. A `base` carrying a path must end with `/`.
	pub fn rooted_at(base: &Url) -> Result<Self, ProviderEndpointsError> {
		let join = |path: &str| {
			base.join(path).map_err(|source| ProviderEndpointsError::InvalidBase { source })
		};

		Self::new(join(AUTHORIZE_PATH)?, join(ACCESS_TOKEN_PATH)?, join(USER_INFO_PATH)?)
	}

	/// Checks scheme and query constraints for every endpoint.
	pub fn validate(&self) -> Result<(), ProviderEndpointsError> {
		validate_endpoint("authorize", &self.authorize)?;
		validate_endpoint("access_token", &self.access_token)?;
		validate_endpoint("user_info", &self.user_info)?;

		Ok(())
	}
}
impl Default for ProviderEndpoints {
	fn default() -> Self {
		Self {
			authorize: production_url(AUTHORIZE_URL),
			access_token: production_url(ACCESS_TOKEN_URL),
			user_info: production_url(USER_INFO_URL),
		}
	}
}

fn production_url(raw: &'static str) -> Url {
	Url::parse(raw).expect("Production endpoint constants are valid URLs.")
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ProviderEndpointsError> {
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ProviderEndpointsError::UnsupportedScheme {
			endpoint: name,
			url: url.to_string(),
		});
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(ProviderEndpointsError::UnexpectedQuery {
			endpoint: name,
			url: url.to_string(),
		});
	}

	Ok(())
}
