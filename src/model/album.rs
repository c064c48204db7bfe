//! Album models.

// self
use crate::{
	_prelude::*,
	model::{
		ArtistSimple, Copyright, ExternalIds, ExternalUrls, Image, Pager, ReleaseDatePrecision,
		Restrictions, TrackSimple,
	},
};

/// Album kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumType {
	/// Full-length album.
	#[serde(alias = "ALBUM")]
	Album,
	/// Single or EP.
	#[serde(alias = "SINGLE")]
	Single,
	/// Compilation.
	#[serde(alias = "COMPILATION")]
	Compilation,
	/// Any value this crate does not know about yet.
	#[default]
	#[serde(other)]
	Unknown,
}

/// Relationship between an artist and an album in artist-album listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlbumGroup {
	/// Artist's own album.
	Album,
	/// Artist's own single.
	Single,
	/// Compilation featuring the artist.
	Compilation,
	/// Album the artist appears on.
	AppearsOn,
	/// Any value this crate does not know about yet.
	#[default]
	#[serde(other)]
	Unknown,
}

/// Album reference embedded in tracks and listings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumSimple {
	/// Album kind.
	pub album_type: Option<AlbumType>,
	/// Relationship to the artist, only present in artist-album listings.
	pub album_group: Option<AlbumGroup>,
	/// Album artists.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub artists: Vec<ArtistSimple>,
	/// ISO 3166-1 alpha-2 markets the album is available in.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub available_markets: Vec<String>,
	/// Known external URLs.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_urls: ExternalUrls,
	/// Web API link to the full album object.
	pub href: Option<String>,
	/// Spotify ID.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub id: String,
	/// Cover art, widest first.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub images: Vec<Image>,
	/// Album name.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub name: String,
	/// Release date, as precise as [`Self::release_date_precision`].
	pub release_date: Option<String>,
	/// Precision of [`Self::release_date`].
	pub release_date_precision: Option<ReleaseDatePrecision>,
	/// Present when the album is restricted.
	pub restrictions: Option<Restrictions>,
	/// Number of tracks.
	pub total_tracks: Option<u32>,
	/// Spotify URI.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub uri: String,
}

/// Full album object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
	/// Fields shared with [`AlbumSimple`].
	#[serde(flatten)]
	pub simple: AlbumSimple,
	/// Copyright statements.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub copyrights: Vec<Copyright>,
	/// Known external identifiers.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_ids: ExternalIds,
	/// Genres (usually empty).
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub genres: Vec<String>,
	/// Record label.
	pub label: Option<String>,
	/// Popularity between 0 and 100.
	pub popularity: Option<u32>,
	/// First page of tracks.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub tracks: Pager<TrackSimple>,
}

/// Several albums fetched in one call; unknown IDs come back as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Albums {
	/// Requested albums, in request order.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub albums: Vec<Option<Album>>,
}

/// Search or new-release envelope around a page of albums.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumsPager {
	/// Page of albums.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub albums: Pager<AlbumSimple>,
}
