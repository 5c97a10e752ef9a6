//! Language selection for localized profile fields.

// self
use crate::_prelude::*;

/// Language used for the localized fields (province, city, country) of a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
	/// Simplified Chinese.
	#[default]
	#[serde(rename = "zh_CN")]
	ZhCn,
	/// Traditional Chinese.
	#[serde(rename = "zh_TW")]
	ZhTw,
	/// English.
	#[serde(rename = "en")]
	En,
}
impl Lang {
	/// Returns the `lang` query value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Lang::ZhCn => "zh_CN",
			Lang::ZhTw => "zh_TW",
			Lang::En => "en",
		}
	}
}
impl Display for Lang {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
