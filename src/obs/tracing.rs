// self
use crate::{_prelude::*, obs::CallKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client operations.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("wechat_oauth2.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a failure event for `err` inside the current span.
///
/// Provider rejections are expected traffic and log at `debug`; transport and decode
/// failures log at `warn`. Secrets never reach the event because [`Error`] does not
/// carry them.
pub fn record_call_failure(kind: CallKind, err: &Error) {
	#[cfg(feature = "tracing")]
	{
		match err {
			Error::Provider { code, message, kind: error_kind } => tracing::debug!(
				call = kind.as_str(),
				code,
				message = message.as_str(),
				error_kind = ?error_kind,
				"provider rejected the call"
			),
			other => tracing::warn!(call = kind.as_str(), error = %other, "provider call failed"),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, err);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn failure_events_are_noops_without_tracing() {
		record_call_failure(CallKind::UserProfile, &Error::provider(40003, "invalid openid"));
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(CallKind::UserProfileByCode, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
