//! Playlist models.

// self
use crate::{
	_prelude::*,
	model::{ExternalUrls, Followers, Image, Pager, PlayableItem, UserPublic},
};

/// Link to a playlist's tracks and their count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistTracksInformation {
	/// Web API link to the full track list.
	pub href: Option<String>,
	/// Number of tracks.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub total: u32,
}

/// Playlist reference returned by listings and searches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistSimple {
	/// Whether other users may modify the playlist.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub collaborative: bool,
	/// Playlist description.
	pub description: Option<String>,
	/// Known external URLs.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_urls: ExternalUrls,
	/// Web API link to the full playlist.
	pub href: Option<String>,
	/// Spotify ID.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub id: String,
	/// Cover images.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub images: Vec<Image>,
	/// Playlist name.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub name: String,
	/// Owner profile.
	pub owner: Option<UserPublic>,
	/// Public/private status; `null` when not relevant.
	pub public: Option<bool>,
	/// Version identifier of the playlist.
	pub snapshot_id: Option<String>,
	/// Track count summary.
	pub tracks: Option<PlaylistTracksInformation>,
	/// Spotify URI.
	pub uri: Option<String>,
}

/// Full playlist object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
	/// Whether other users may modify the playlist.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub collaborative: bool,
	/// Playlist description.
	pub description: Option<String>,
	/// Known external URLs.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_urls: ExternalUrls,
	/// Follower information.
	pub followers: Option<Followers>,
	/// Web API link to the playlist.
	pub href: Option<String>,
	/// Spotify ID.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub id: String,
	/// Cover images.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub images: Vec<Image>,
	/// Playlist name.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub name: String,
	/// Owner profile.
	pub owner: Option<UserPublic>,
	/// Public/private status; `null` when not relevant.
	pub public: Option<bool>,
	/// Version identifier of the playlist.
	pub snapshot_id: Option<String>,
	/// First page of items.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub tracks: Pager<PlaylistTrack>,
	/// Spotify URI.
	pub uri: Option<String>,
}

/// Playlist entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistTrack {
	/// When the item was added, as an ISO 8601 timestamp.
	pub added_at: Option<String>,
	/// Who added the item.
	pub added_by: Option<UserPublic>,
	/// Whether the item is a local file.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub is_local: bool,
	/// The track or episode; `null` when it is no longer available.
	pub track: Option<PlayableItem>,
}

/// Search or featured-playlist envelope around a page of playlists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistsPager {
	/// Optional editorial message (featured playlists).
	pub message: Option<String>,
	/// Page of playlists; search results may contain `null` entries.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub playlists: Pager<Option<PlaylistSimple>>,
}
