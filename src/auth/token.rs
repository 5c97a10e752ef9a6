//! Access token payload and its redacted secret wrapper.

pub mod access;
pub mod secret;
