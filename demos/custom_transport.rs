//! Demonstrates plugging a non-reqwest transport into the client.
//!
//! 1. Implement [`ProviderHttpClient`] and honor [`ProviderRequest::timeout`].
//! 2. Report send/read failures as [`TransportError`]; leave the body to the client.
//! 3. Pass the transport to [`ClientBuilder::build_with`] (wrap it in `Arc` to share it).

// std
use std::{collections::HashMap, sync::Arc};
// crates.io
use color_eyre::Result;
// self
use wechat_oauth2::{
	ClientBuilder, Error,
	error::TransportError,
	http::{ProviderFuture, ProviderHttpClient, ProviderRequest, ProviderResponse},
};

/// Answers from canned bodies keyed by endpoint label, the way a fixture-backed or
/// in-process transport would.
struct CannedHttpClient {
	bodies: HashMap<&'static str, &'static str>,
}
impl ProviderHttpClient for CannedHttpClient {
	fn get(&self, request: ProviderRequest) -> ProviderFuture<'_> {
		Box::pin(async move {
			println!("GET {request:?}");

			match self.bodies.get(request.endpoint) {
				Some(body) => Ok(ProviderResponse::new(200, *body)),
				None => Err(TransportError::Timeout { endpoint: request.endpoint }),
			}
		})
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let transport = Arc::new(CannedHttpClient {
		bodies: HashMap::from([(
			"access_token",
			"{\"access_token\":\"canned\",\"expires_in\":7200,\"refresh_token\":\"r\",\"openid\":\"o\",\"scope\":\"snsapi_base\"}",
		)]),
	});
	let client = ClientBuilder::new().build_with(Arc::clone(&transport))?;
	let token = client.fetch_access_token("wx-demo-app", "demo-secret", "demo-code").await?;

	match token.expires_at() {
		Some(expires_at) => println!("Token for {} expires at {expires_at}.", token.open_id),
		None => println!("Token for {} has an unbounded lifetime.", token.open_id),
	}

	// No canned profile body, so the transport reports a timeout.
	match client.fetch_user_profile(&token).await {
		Err(err @ Error::Transport(_)) => println!("Profile fetch failed as expected: {err}."),
		other => println!("Unexpected profile result: {other:?}."),
	}

	Ok(())
}
