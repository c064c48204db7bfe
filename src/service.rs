//! Typed service handle bound to the configured transport.
//!
//! [`SpotifyService`] turns each operation into a [`Call`] by rendering the endpoint from the
//! static [`catalog`](endpoint::CATALOG), attaching the caller's query options, and binding the
//! request to the pipeline and executors it was created with. The handle is immutable; token
//! changes reach it through the pipeline's signer, never by rebuilding it.

pub mod call;
pub mod endpoint;

pub use call::*;
pub use endpoint::*;

// crates.io
use http::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::ApiConfig,
	error::ConfigError,
	exec::Executors,
	http::HttpTransport,
	model::{
		Album, AlbumSimple, Albums, AlbumsPager, Artist, Artists, ArtistsPager, Pager, Playlist,
		PlaylistSimple, PlaylistTrack, PlaylistsPager, Track, TrackSimple, Tracks, TracksPager,
		UserPrivate, UserPublic,
	},
};

/// Optional query parameters (`limit`, `offset`, `market`, or anything else the endpoint
/// accepts), sent in key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOptions(BTreeMap<String, String>);
impl QueryOptions {
	/// Creates an empty option set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the page size.
	pub fn limit(self, limit: u32) -> Self {
		self.param("limit", limit.to_string())
	}

	/// Sets the index of the first item.
	pub fn offset(self, offset: u32) -> Self {
		self.param("offset", offset.to_string())
	}

	/// Restricts results to an ISO 3166-1 alpha-2 market (or `from_token`).
	pub fn market(self, market: impl Into<String>) -> Self {
		self.param("market", market)
	}

	/// Sets an arbitrary parameter, replacing any previous value.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Returns `true` when no parameter is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
		self.0.iter()
	}
}

/// Typed set of remote operations bound to one transport pipeline.
pub struct SpotifyService<C> {
	config: ApiConfig,
	dispatcher: call::Dispatcher<C>,
}
impl<C> SpotifyService<C>
where
	C: HttpTransport,
{
	/// Binds the catalog to `transport`, dispatching on `executors`.
	pub fn new(config: ApiConfig, transport: C, executors: Executors) -> Self {
		Self { config, dispatcher: call::Dispatcher { transport: Arc::new(transport), executors } }
	}

	/// Configuration the handle was created with.
	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	/// Pipeline every call is sent through.
	pub fn transport(&self) -> &C {
		&self.dispatcher.transport
	}

	/// Prepares a call to any catalog endpoint.
	pub fn call<R>(
		&self,
		endpoint: &'static Endpoint,
		params: &[(&str, &str)],
		query: &QueryOptions,
	) -> Result<Call<R, C>>
	where
		R: 'static + Send + DeserializeOwned,
	{
		let url = endpoint.url(&self.config.base_url, params, query)?;
		let request = http::Request::builder()
			.method(endpoint.method.clone())
			.uri(url.as_str())
			.header(ACCEPT, HeaderValue::from_static("application/json"))
			.body(Vec::new())
			.map_err(ConfigError::from)?;

		Ok(Call::new(endpoint, request, self.dispatcher.clone()))
	}

	/// Fetches one album.
	pub fn get_album(&self, id: &str) -> Result<Call<Album, C>> {
		self.call(&GET_ALBUM, &[("id", id)], &QueryOptions::new())
	}

	/// Fetches several albums by ID.
	pub fn get_albums(&self, ids: &[&str]) -> Result<Call<Albums, C>> {
		self.call(&GET_ALBUMS, &[], &QueryOptions::new().param("ids", ids.join(",")))
	}

	/// Lists an album's tracks.
	pub fn get_album_tracks(
		&self,
		id: &str,
		options: &QueryOptions,
	) -> Result<Call<Pager<TrackSimple>, C>> {
		self.call(&GET_ALBUM_TRACKS, &[("id", id)], options)
	}

	/// Fetches one artist.
	pub fn get_artist(&self, id: &str) -> Result<Call<Artist, C>> {
		self.call(&GET_ARTIST, &[("id", id)], &QueryOptions::new())
	}

	/// Fetches several artists by ID.
	pub fn get_artists(&self, ids: &[&str]) -> Result<Call<Artists, C>> {
		self.call(&GET_ARTISTS, &[], &QueryOptions::new().param("ids", ids.join(",")))
	}

	/// Lists an artist's albums.
	pub fn get_artist_albums(
		&self,
		id: &str,
		options: &QueryOptions,
	) -> Result<Call<Pager<AlbumSimple>, C>> {
		self.call(&GET_ARTIST_ALBUMS, &[("id", id)], options)
	}

	/// Fetches an artist's top tracks in `country`.
	pub fn get_artist_top_tracks(&self, id: &str, country: &str) -> Result<Call<Tracks, C>> {
		self.call(
			&GET_ARTIST_TOP_TRACKS,
			&[("id", id)],
			&QueryOptions::new().param("country", country),
		)
	}

	/// Fetches artists similar to the given one.
	pub fn get_related_artists(&self, id: &str) -> Result<Call<Artists, C>> {
		self.call(&GET_RELATED_ARTISTS, &[("id", id)], &QueryOptions::new())
	}

	/// Fetches one track.
	pub fn get_track(&self, id: &str) -> Result<Call<Track, C>> {
		self.call(&GET_TRACK, &[("id", id)], &QueryOptions::new())
	}

	/// Fetches several tracks by ID.
	pub fn get_tracks(&self, ids: &[&str]) -> Result<Call<Tracks, C>> {
		self.call(&GET_TRACKS, &[], &QueryOptions::new().param("ids", ids.join(",")))
	}

	/// Searches albums.
	pub fn search_albums(&self, q: &str, options: &QueryOptions) -> Result<Call<AlbumsPager, C>> {
		self.search("album", q, options)
	}

	/// Searches artists.
	pub fn search_artists(
		&self,
		q: &str,
		options: &QueryOptions,
	) -> Result<Call<ArtistsPager, C>> {
		self.search("artist", q, options)
	}

	/// Searches tracks.
	pub fn search_tracks(&self, q: &str, options: &QueryOptions) -> Result<Call<TracksPager, C>> {
		self.search("track", q, options)
	}

	/// Searches playlists.
	pub fn search_playlists(
		&self,
		q: &str,
		options: &QueryOptions,
	) -> Result<Call<PlaylistsPager, C>> {
		self.search("playlist", q, options)
	}

	/// Fetches the profile of the user the token belongs to.
	pub fn get_me(&self) -> Result<Call<UserPrivate, C>> {
		self.call(&GET_ME, &[], &QueryOptions::new())
	}

	/// Fetches a user's public profile.
	pub fn get_user(&self, user_id: &str) -> Result<Call<UserPublic, C>> {
		self.call(&GET_USER, &[("user_id", user_id)], &QueryOptions::new())
	}

	/// Fetches one playlist.
	pub fn get_playlist(
		&self,
		playlist_id: &str,
		options: &QueryOptions,
	) -> Result<Call<Playlist, C>> {
		self.call(&GET_PLAYLIST, &[("playlist_id", playlist_id)], options)
	}

	/// Lists a playlist's items.
	pub fn get_playlist_tracks(
		&self,
		playlist_id: &str,
		options: &QueryOptions,
	) -> Result<Call<Pager<PlaylistTrack>, C>> {
		self.call(&GET_PLAYLIST_TRACKS, &[("playlist_id", playlist_id)], options)
	}

	/// Lists the current user's playlists.
	pub fn get_my_playlists(
		&self,
		options: &QueryOptions,
	) -> Result<Call<Pager<PlaylistSimple>, C>> {
		self.call(&GET_MY_PLAYLISTS, &[], options)
	}

	/// Lists new album releases.
	pub fn get_new_releases(&self, options: &QueryOptions) -> Result<Call<AlbumsPager, C>> {
		self.call(&GET_NEW_RELEASES, &[], options)
	}

	/// Lists editorially featured playlists.
	pub fn get_featured_playlists(
		&self,
		options: &QueryOptions,
	) -> Result<Call<PlaylistsPager, C>> {
		self.call(&GET_FEATURED_PLAYLISTS, &[], options)
	}

	fn search<R>(&self, kind: &str, q: &str, options: &QueryOptions) -> Result<Call<R, C>>
	where
		R: 'static + Send + DeserializeOwned,
	{
		let query = options.clone().param("q", q).param("type", kind);

		self.call(&SEARCH, &[], &query)
	}
}
impl<C> Debug for SpotifyService<C> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SpotifyService").field("base_url", &self.config.base_url.as_str()).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{_preludet::*, exec::TokioExecutor};

	fn service(recorder: RecordingTransport) -> SpotifyService<RecordingTransport> {
		let config = ApiConfig::builder().build().expect("Default configuration should build.");
		let executors = Executors::new(
			Arc::new(TokioExecutor::current().expect("Test runtime should be available.")),
			Arc::new(TokioExecutor::current().expect("Test runtime should be available.")),
		);

		SpotifyService::new(config, recorder, executors)
	}

	#[tokio::test]
	async fn search_merges_type_and_options() {
		let service = service(RecordingTransport::ok(b"{}".to_vec()));
		let call = service
			.search_albums("XX", &QueryOptions::new().limit(5))
			.expect("Search call should build.");

		assert_eq!(
			call.request().uri().to_string(),
			"https://api.spotify.com/v1/search?limit=5&q=XX&type=album"
		);
		assert_eq!(call.request().method(), http::Method::GET);
		assert_eq!(call.endpoint().name, "search");
	}

	#[tokio::test]
	async fn ids_are_comma_joined() {
		let service = service(RecordingTransport::ok(b"{}".to_vec()));
		let call = service.get_tracks(&["a", "b", "c"]).expect("Tracks call should build.");

		assert_eq!(
			call.request().uri().to_string(),
			"https://api.spotify.com/v1/tracks?ids=a%2Cb%2Cc"
		);
	}

	#[tokio::test]
	async fn execute_decodes_success_and_keeps_error_bodies() {
		let service = service(RecordingTransport::ok(
			br#"{"id":"4Mewe6A62ZpJKmVzcaOixy","name":"Album","album_type":"album"}"#.to_vec(),
		));
		let response = service
			.get_album("4Mewe6A62ZpJKmVzcaOixy")
			.expect("Album call should build.")
			.execute()
			.await
			.expect("Album call should succeed.");

		assert!(response.is_success());

		let album = response.into_body().expect("Album body should decode.");

		assert_eq!(album.simple.name, "Album");
		assert_eq!(album.simple.album_type, Some(crate::model::AlbumType::Album));

		let service = service_with_status(401, br#"{"error":{"status":401}}"#);
		let response = service
			.get_me()
			.expect("Me call should build.")
			.execute()
			.await
			.expect("A 401 is an ordinary response.");

		assert_eq!(response.status().as_u16(), 401);
		assert_eq!(response.error_body(), Some(&br#"{"error":{"status":401}}"#[..]));
		assert!(matches!(response.into_body(), Err(Error::Status { status: 401, .. })));
	}

	#[tokio::test]
	async fn transport_failures_keep_their_source() {
		let service = service(RecordingTransport::failing(std::io::ErrorKind::TimedOut));
		let err = service
			.get_artist("x")
			.expect("Artist call should build.")
			.execute()
			.await
			.expect_err("Failing transport should fail the call.");

		assert!(err.is_timeout());
	}

	#[tokio::test]
	async fn empty_success_bodies_are_not_decoded() {
		let service = service(RecordingTransport::with_status(204, Vec::new()));
		let response = service
			.get_me()
			.expect("Me call should build.")
			.execute()
			.await
			.expect("204 should be accepted.");

		assert!(response.body().is_none());
		assert!(matches!(response.into_body(), Err(Error::EmptyBody { status: 204 })));
	}

	#[tokio::test]
	async fn malformed_bodies_surface_decode_errors() {
		let service =
			service(RecordingTransport::ok(br#"{"id":"x","tracks":{"total":"many"}}"#.to_vec()));
		let err = service
			.get_playlist("x", &QueryOptions::new())
			.expect("Playlist call should build.")
			.execute()
			.await
			.expect_err("A string total cannot be decoded.");

		match err {
			Error::Decode(e) => {
				assert_eq!(e.endpoint, "get_playlist");
				assert_eq!(e.status, 200);
				assert_eq!(e.source.path().to_string(), "tracks.total");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	fn service_with_status(status: u16, body: &[u8]) -> SpotifyService<RecordingTransport> {
		service(RecordingTransport::with_status(status, body.to_vec()))
	}
}
