//! Optional observability helpers for provider calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `wechat_oauth2.call` with the `call`
//!   (operation) and `stage` (call site) fields, plus failure events without secrets.
//! - Enable `metrics` to increment the `wechat_oauth2_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`, and the
//!   `wechat_oauth2_provider_error_total` counter labeled by `call` + `kind` for provider
//!   rejections.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Provider operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Authorization code to access token exchange.
	AccessToken,
	/// Access token to user profile exchange.
	UserProfile,
	/// Both exchanges chained.
	UserProfileByCode,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::AccessToken => "access_token",
			CallKind::UserProfile => "user_profile",
			CallKind::UserProfileByCode => "user_profile_by_code",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs one client operation inside its `wechat_oauth2.call` span.
///
/// The attempt is counted up front; the terminal outcome (and any failure event) is
/// recorded before the span closes.
pub async fn observe_call<T, Fut>(kind: CallKind, stage: &'static str, call: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = CallSpan::new(kind, stage);

	record_call_outcome(kind, CallOutcome::Attempt);

	span.instrument(async move {
		let result = call.await;

		record_call_result(kind, &result);

		result
	})
	.await
}

/// Records the terminal outcome of a call: the counter plus a failure event on errors.
pub fn record_call_result<T>(kind: CallKind, result: &Result<T>) {
	match result {
		Ok(_) => record_call_outcome(kind, CallOutcome::Success),
		Err(err) => {
			record_call_failure(kind, err);

			if let Error::Provider { kind: error_kind, .. } = err {
				record_provider_error(kind, *error_kind);
			}

			record_call_outcome(kind, CallOutcome::Failure);
		},
	}
}
