//! Auth-domain models: access tokens, scopes, and user profiles.

pub mod profile;
pub mod scope;
pub mod token;

pub use profile::*;
pub use scope::*;
pub use token::{access::*, secret::*};
