//! Static endpoint catalog.
//!
//! Each [`Endpoint`] binds an operation name to an HTTP method and a path template relative to
//! the configured base URL. Templates use `{name}` placeholders for whole path segments; values
//! are percent-encoded when rendered, so IDs can never escape their segment.

// crates.io
use http::Method;
// self
use crate::{_prelude::*, error::ConfigError, service::QueryOptions};

/// One remote operation.
#[derive(Debug, PartialEq, Eq)]
pub struct Endpoint {
	/// Stable operation name used in logs and metrics.
	pub name: &'static str,
	/// HTTP method.
	pub method: Method,
	/// Path template relative to the base URL.
	pub path: &'static str,
}
impl Endpoint {
	const fn get(name: &'static str, path: &'static str) -> Self {
		Self { name, method: Method::GET, path }
	}

	/// Finds a catalog entry by operation name.
	pub fn lookup(name: &str) -> Option<&'static Endpoint> {
		CATALOG.iter().copied().find(|endpoint| endpoint.name == name)
	}

	/// Renders the absolute URL for this endpoint.
	///
	/// `params` fills the `{name}` placeholders; extra entries are ignored. `query` is appended
	/// as-is, and an empty `query` leaves the URL without a `?`.
	pub fn url(
		&self,
		base: &Url,
		params: &[(&str, &str)],
		query: &QueryOptions,
	) -> Result<Url, ConfigError> {
		let mut url = base.clone();

		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|_| ConfigError::UnsupportedBaseUrl { url: base.to_string() })?;

			segments.pop_if_empty();

			for segment in self.path.split('/') {
				match segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
					Some(param) => {
						let value = params
							.iter()
							.find_map(|(key, value)| (*key == param).then_some(*value))
							.ok_or_else(|| ConfigError::MissingPathParam {
								endpoint: self.name,
								param: param.into(),
							})?;

						segments.push(value);
					},
					None => {
						segments.push(segment);
					},
				}
			}
		}

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query.iter());
		}

		Ok(url)
	}
}

/// `GET albums/{id}`
pub static GET_ALBUM: Endpoint = Endpoint::get("get_album", "albums/{id}");
/// `GET albums?ids=`
pub static GET_ALBUMS: Endpoint = Endpoint::get("get_albums", "albums");
/// `GET albums/{id}/tracks`
pub static GET_ALBUM_TRACKS: Endpoint = Endpoint::get("get_album_tracks", "albums/{id}/tracks");
/// `GET artists/{id}`
pub static GET_ARTIST: Endpoint = Endpoint::get("get_artist", "artists/{id}");
/// `GET artists?ids=`
pub static GET_ARTISTS: Endpoint = Endpoint::get("get_artists", "artists");
/// `GET artists/{id}/albums`
pub static GET_ARTIST_ALBUMS: Endpoint = Endpoint::get("get_artist_albums", "artists/{id}/albums");
/// `GET artists/{id}/top-tracks`
pub static GET_ARTIST_TOP_TRACKS: Endpoint =
	Endpoint::get("get_artist_top_tracks", "artists/{id}/top-tracks");
/// `GET artists/{id}/related-artists`
pub static GET_RELATED_ARTISTS: Endpoint =
	Endpoint::get("get_related_artists", "artists/{id}/related-artists");
/// `GET tracks/{id}`
pub static GET_TRACK: Endpoint = Endpoint::get("get_track", "tracks/{id}");
/// `GET tracks?ids=`
pub static GET_TRACKS: Endpoint = Endpoint::get("get_tracks", "tracks");
/// `GET search?type=`
pub static SEARCH: Endpoint = Endpoint::get("search", "search");
/// `GET me`
pub static GET_ME: Endpoint = Endpoint::get("get_me", "me");
/// `GET users/{user_id}`
pub static GET_USER: Endpoint = Endpoint::get("get_user", "users/{user_id}");
/// `GET playlists/{playlist_id}`
pub static GET_PLAYLIST: Endpoint = Endpoint::get("get_playlist", "playlists/{playlist_id}");
/// `GET playlists/{playlist_id}/tracks`
pub static GET_PLAYLIST_TRACKS: Endpoint =
	Endpoint::get("get_playlist_tracks", "playlists/{playlist_id}/tracks");
/// `GET me/playlists`
pub static GET_MY_PLAYLISTS: Endpoint = Endpoint::get("get_my_playlists", "me/playlists");
/// `GET browse/new-releases`
pub static GET_NEW_RELEASES: Endpoint = Endpoint::get("get_new_releases", "browse/new-releases");
/// `GET browse/featured-playlists`
pub static GET_FEATURED_PLAYLISTS: Endpoint =
	Endpoint::get("get_featured_playlists", "browse/featured-playlists");

/// Every endpoint the service handle can call.
pub static CATALOG: &[&Endpoint] = &[
	&GET_ALBUM,
	&GET_ALBUMS,
	&GET_ALBUM_TRACKS,
	&GET_ARTIST,
	&GET_ARTISTS,
	&GET_ARTIST_ALBUMS,
	&GET_ARTIST_TOP_TRACKS,
	&GET_RELATED_ARTISTS,
	&GET_TRACK,
	&GET_TRACKS,
	&SEARCH,
	&GET_ME,
	&GET_USER,
	&GET_PLAYLIST,
	&GET_PLAYLIST_TRACKS,
	&GET_MY_PLAYLISTS,
	&GET_NEW_RELEASES,
	&GET_FEATURED_PLAYLISTS,
];
