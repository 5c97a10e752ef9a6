//! Classification of the provider's numeric `errcode` values.

/// Canonical categories for provider-reported failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
	/// Authorization code is invalid, expired, or already exchanged.
	InvalidCode,
	/// App ID or secret was rejected.
	InvalidCredential,
	/// Access token is invalid, expired, or missing.
	InvalidToken,
	/// Open ID does not belong to the application.
	InvalidOpenId,
	/// Provider is busy; the same call may succeed later.
	Busy,
	/// Any code the client does not model.
	Other,
}
impl ProviderErrorKind {
	/// Classifies a raw `errcode`.
	pub const fn from_code(code: i64) -> Self {
		match code {
			40029 | 40163 => Self::InvalidCode,
			40001 | 40013 | 40125 => Self::InvalidCredential,
			40014 | 41001 | 42001 => Self::InvalidToken,
			40003 => Self::InvalidOpenId,
			-1 => Self::Busy,
			_ => Self::Other,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidCode => "invalid_code",
			Self::InvalidCredential => "invalid_credential",
			Self::InvalidToken => "invalid_token",
			Self::InvalidOpenId => "invalid_openid",
			Self::Busy => "busy",
			Self::Other => "other",
		}
	}

	/// Whether a later identical call may succeed.
	pub const fn is_retryable(self) -> bool {
		matches!(self, Self::Busy)
	}
}
