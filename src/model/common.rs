//! Small value types shared across models.

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Known external URLs keyed by platform (e.g. `spotify`).
pub type ExternalUrls = HashMap<String, String>;
/// Known external identifiers keyed by scheme (e.g. `isrc`, `upc`).
pub type ExternalIds = HashMap<String, String>;

/// Reads an explicit `null` as the field's default value.
///
/// Pairs with a struct-level `#[serde(default)]`, which only covers absent keys.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Cover art or profile image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
	/// Source URL of the image.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub url: String,
	/// Height in pixels, when known.
	pub height: Option<u32>,
	/// Width in pixels, when known.
	pub width: Option<u32>,
}

/// Follower information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Followers {
	/// Link to the full follower list; always `null` at the moment.
	pub href: Option<String>,
	/// Total number of followers.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub total: u64,
}

/// Copyright statement attached to an album.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Copyright {
	/// Copyright text.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub text: String,
	/// `C` for copyright, `P` for performance copyright.
	#[serde(rename = "type")]
	pub kind: Option<String>,
}

/// Why content is unavailable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restrictions {
	/// Restriction reason such as `market` or `explicit`.
	pub reason: Option<String>,
}

/// Precision of a release date string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseDatePrecision {
	/// `YYYY`.
	Year,
	/// `YYYY-MM`.
	Month,
	/// `YYYY-MM-DD`.
	Day,
	/// Any value this crate does not know about yet.
	#[default]
	#[serde(other)]
	Unknown,
}
