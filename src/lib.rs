//! WeChat web authorization client. Exchanges authorization codes for access tokens and
//! access tokens for user profiles, and builds the provider-hosted consent URLs.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod authorize;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod obs;
pub mod provider;

pub use authorize::{
	build_authorization_url, build_base_authorization_url, build_user_info_authorization_url,
	generate_state, verify_state,
};
pub use client::{Client, ClientBuilder};
#[cfg(feature = "reqwest")] pub use client::ReqwestOAuthClient;
pub use error::{Error, Result};

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
		time::Duration as StdDuration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _, tokio as _};
