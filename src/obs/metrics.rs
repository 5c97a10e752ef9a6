// self
use crate::{
	obs::{CallKind, CallOutcome},
	provider::ProviderErrorKind,
};

/// Counter incremented once per attempt, success, and failure.
pub const CALL_COUNTER: &str = "wechat_oauth2_call_total";
/// Counter incremented for every provider-reported `errcode`, labeled by classification.
pub const PROVIDER_ERROR_COUNTER: &str = "wechat_oauth2_provider_error_total";

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(CALL_COUNTER, "call" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

/// Records which class of provider rejection ended a call.
///
/// Raw codes are folded into [`ProviderErrorKind`] to keep label cardinality bounded.
pub fn record_provider_error(kind: CallKind, error_kind: ProviderErrorKind) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		PROVIDER_ERROR_COUNTER,
		"call" => kind.as_str(),
		"kind" => error_kind.as_str()
	)
	.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, error_kind);
}
