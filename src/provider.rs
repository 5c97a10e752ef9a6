//! Provider-facing configuration (endpoints, profile language) and error code taxonomy.
//!
//! `endpoints` owns the URL set a [`Client`](crate::Client) talks to, defaulting to the
//! production WeChat hosts. `errcode` maps the provider's numeric `errcode` values onto
//! [`ProviderErrorKind`].

pub mod endpoints;
pub mod errcode;
pub mod lang;

pub use endpoints::*;
pub use errcode::*;
pub use lang::*;

/// `grant_type` value sent to the token endpoint.
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
