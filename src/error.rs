//! Client-level error types shared by every provider call.

// self
use crate::{_prelude::*, provider::ProviderErrorKind};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// A call either yields its payload or exactly one of these variants; the client never
/// returns a partially populated result next to an error.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout) while issuing or reading the request.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body is not valid JSON for the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Provider answered with a well-formed error envelope.
	#[error("Provider rejected the request ({code}): {message}.")]
	Provider {
		/// Provider `errcode` value.
		code: i64,
		/// Provider `errmsg` value.
		message: String,
		/// Classification derived from `code`.
		kind: ProviderErrorKind,
	},
	/// Returned authorization `state` does not match the issued one.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}
impl Error {
	/// Builds a provider error, classifying the code on the way.
	pub fn provider(code: i64, message: impl Into<String>) -> Self {
		Self::Provider { code, message: message.into(), kind: ProviderErrorKind::from_code(code) }
	}

	/// Whether repeating the same call later may succeed.
	///
	/// The client never retries on its own; this is a hint for callers.
	pub fn is_retryable(&self) -> bool {
		match self {
			Self::Transport(_) => true,
			Self::Provider { kind, .. } => kind.is_retryable(),
			_ => false,
		}
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint set failed validation.
	#[error(transparent)]
	InvalidEndpoints(#[from] crate::provider::ProviderEndpointsError),
	/// Request timeout must be non-zero.
	#[error("Request timeout must be greater than zero.")]
	ZeroTimeout,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {endpoint} endpoint.")]
	Network {
		/// Endpoint label (`access_token` or `user_info`).
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request did not complete within the configured timeout.
	#[error("Request to the {endpoint} endpoint timed out.")]
	Timeout {
		/// Endpoint label (`access_token` or `user_info`).
		endpoint: &'static str,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(
		endpoint: &'static str,
		src: impl 'static + Send + Sync + StdError,
	) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}
}

/// Response body decoding failures.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body is not syntactically valid JSON.
	#[error("Response body is not valid JSON (HTTP {status}).")]
	Syntax {
		/// JSON syntax failure.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: u16,
		/// Leading part of the body, for diagnostics.
		body_preview: String,
	},
	/// Body is valid JSON but not an object.
	#[error("Response body is not a JSON object (HTTP {status}).")]
	NotAnObject {
		/// HTTP status code of the response.
		status: u16,
		/// Leading part of the body, for diagnostics.
		body_preview: String,
	},
	/// JSON object does not match the expected payload shape.
	#[error("Response body does not match `{target}` at `{}`.", .source.path())]
	Shape {
		/// Name of the type being decoded.
		target: &'static str,
		/// Structured decoding failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl DecodeError {
	/// HTTP status code of the response that failed to decode.
	pub fn status(&self) -> u16 {
		match self {
			Self::Syntax { status, .. }
			| Self::NotAnObject { status, .. }
			| Self::Shape { status, .. } => *status,
		}
	}
}
