//! Response envelope decoding.
//!
//! The provider overlays `errcode`/`errmsg` onto every payload shape and may do so on an
//! HTTP 200. Decoding therefore runs in two explicit steps over one parsed JSON object:
//! first the [`ErrorEnvelope`], then, only when it reports success, the payload type.

// crates.io
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{_prelude::*, error::DecodeError, http::ProviderResponse};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Error fields the provider may attach to any response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
	/// `errcode`; `0` or absent means success.
	#[serde(rename = "errcode", default)]
	pub code: i64,
	/// `errmsg`; empty or absent means success.
	#[serde(rename = "errmsg", default)]
	pub message: String,
}
impl ErrorEnvelope {
	/// Returns `true` when the envelope reports a failure.
	pub fn is_error(&self) -> bool {
		self.code != 0 || !self.message.is_empty()
	}

	/// Converts the envelope into the crate error.
	pub fn into_error(self) -> Error {
		Error::provider(self.code, self.message)
	}
}

/// Decodes a provider response into `T`, surfacing the error envelope first.
pub fn decode<T>(response: &ProviderResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let value = parse_object(response)?;
	let envelope: ErrorEnvelope = decode_value(&value, response.status)?;

	if envelope.is_error() {
		return Err(envelope.into_error());
	}

	Ok(decode_value(&value, response.status)?)
}

fn parse_object(response: &ProviderResponse) -> Result<Value, DecodeError> {
	let value = serde_json::from_slice::<Value>(&response.body).map_err(|source| {
		DecodeError::Syntax {
			source,
			status: response.status,
			body_preview: body_preview(&response.body),
		}
	})?;

	if !value.is_object() {
		return Err(DecodeError::NotAnObject {
			status: response.status,
			body_preview: body_preview(&response.body),
		});
	}

	Ok(value)
}

fn decode_value<T>(value: &Value, status: u16) -> Result<T, DecodeError>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(value).map_err(|source| DecodeError::Shape {
		target: short_type_name::<T>(),
		source,
		status,
	})
}

fn short_type_name<T>() -> &'static str {
	let full = std::any::type_name::<T>();

	full.rsplit("::").next().unwrap_or(full)
}

fn body_preview(body: &[u8]) -> String {
	let text = String::from_utf8_lossy(body);

	if text.chars().count() <= BODY_PREVIEW_LIMIT {
		return text.into_owned();
	}

	let mut buf = text.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}
