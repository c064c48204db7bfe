//! Artist models.

// self
use crate::{
	_prelude::*,
	model::{ExternalUrls, Followers, Image, Pager},
};

/// Artist reference embedded in albums and tracks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistSimple {
	/// Known external URLs.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_urls: ExternalUrls,
	/// Web API link to the full artist object.
	pub href: Option<String>,
	/// Spotify ID.
	pub id: Option<String>,
	/// Display name.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub name: String,
	/// Spotify URI.
	pub uri: Option<String>,
}

/// Full artist object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
	/// Fields shared with [`ArtistSimple`].
	#[serde(flatten)]
	pub simple: ArtistSimple,
	/// Follower information.
	pub followers: Option<Followers>,
	/// Genres associated with the artist.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub genres: Vec<String>,
	/// Artist images, widest first.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub images: Vec<Image>,
	/// Popularity between 0 and 100.
	pub popularity: Option<u32>,
}

/// Several artists fetched in one call; unknown IDs come back as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artists {
	/// Requested artists, in request order.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub artists: Vec<Option<Artist>>,
}

/// Search envelope around a page of artists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistsPager {
	/// Page of artists.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub artists: Pager<Artist>,
}
