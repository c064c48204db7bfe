//! Track and episode models.

// crates.io
use serde::{Deserializer, de::Error as DeError};
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	model::{
		AlbumSimple, ArtistSimple, ExternalIds, ExternalUrls, Image, Pager, ReleaseDatePrecision,
		Restrictions,
	},
};

/// Track reference embedded in album listings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSimple {
	/// Performing artists.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub artists: Vec<ArtistSimple>,
	/// ISO 3166-1 alpha-2 markets the track is available in.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub available_markets: Vec<String>,
	/// Disc number, usually 1.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub disc_number: u32,
	/// Length in milliseconds.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub duration_ms: u64,
	/// Whether the track has explicit lyrics.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub explicit: bool,
	/// Known external URLs.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_urls: ExternalUrls,
	/// Web API link to the full track object.
	pub href: Option<String>,
	/// Spotify ID; `null` for local files.
	pub id: Option<String>,
	/// Whether the track is a local file.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub is_local: bool,
	/// Playability in the requested market, when relinking applies.
	pub is_playable: Option<bool>,
	/// Track name.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub name: String,
	/// 30-second preview URL.
	pub preview_url: Option<String>,
	/// Present when the track is restricted.
	pub restrictions: Option<Restrictions>,
	/// Position on its disc.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub track_number: u32,
	/// Spotify URI.
	pub uri: Option<String>,
}

/// Full track object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
	/// Fields shared with [`TrackSimple`].
	#[serde(flatten)]
	pub simple: TrackSimple,
	/// Album the track appears on.
	pub album: Option<AlbumSimple>,
	/// Known external identifiers.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_ids: ExternalIds,
	/// Popularity between 0 and 100.
	pub popularity: Option<u32>,
}

/// Several tracks fetched in one call; unknown IDs come back as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracks {
	/// Requested tracks, in request order.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub tracks: Vec<Option<Track>>,
}

/// Search envelope around a page of tracks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracksPager {
	/// Page of tracks.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub tracks: Pager<Track>,
}

/// Podcast episode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
	/// Plain-text description.
	pub description: Option<String>,
	/// Length in milliseconds.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub duration_ms: u64,
	/// Whether the episode has explicit content.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub explicit: bool,
	/// Known external URLs.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_urls: ExternalUrls,
	/// Web API link to the full episode object.
	pub href: Option<String>,
	/// Spotify ID.
	pub id: Option<String>,
	/// Cover art, widest first.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub images: Vec<Image>,
	/// Episode name.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub name: String,
	/// Release date, as precise as [`Self::release_date_precision`].
	pub release_date: Option<String>,
	/// Precision of [`Self::release_date`].
	pub release_date_precision: Option<ReleaseDatePrecision>,
	/// Spotify URI.
	pub uri: Option<String>,
}

/// Item that can appear in a playlist, discriminated by its `type` field.
///
/// Items without a `type` are read as tracks; kinds this crate does not know map onto
/// [`PlayableItem::Unknown`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayableItem {
	/// Music track.
	Track(Box<Track>),
	/// Podcast episode.
	Episode(Box<Episode>),
	/// Item kind this crate does not know about yet.
	Unknown,
}
impl<'de> Deserialize<'de> for PlayableItem {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;

		match value.get("type").and_then(Value::as_str) {
			Some("track") | None =>
				serde_json::from_value(value).map(|track| Self::Track(Box::new(track))),
			Some("episode") =>
				serde_json::from_value(value).map(|episode| Self::Episode(Box::new(episode))),
			Some(_) => Ok(Self::Unknown),
		}
		.map_err(DeError::custom)
	}
}
