#![cfg(feature = "reqwest")]

// std
use std::{
	sync::Arc,
	time::{Duration as StdDuration, Instant},
};
// crates.io
use httpmock::prelude::*;
// self
use spotify_web_api::{
	api::{ReqwestSpotifyApi, SpotifyApi},
	config::TransportTimeouts,
	error::Error,
	exec::{Executor, TokioExecutor},
	model::{Album, AlbumType},
	service::{GET_ALBUM, QueryOptions},
};

const ME_BODY: &str = r#"{"id":"wizzler","display_name":"JM Wizzler","product":"premium"}"#;

fn base_url(server: &MockServer) -> String {
	server.url("/v1/")
}

fn build_test_api(base_url: &str, timeouts: TransportTimeouts) -> ReqwestSpotifyApi {
	let executor: Arc<dyn Executor> =
		Arc::new(TokioExecutor::current().expect("Tests must run inside a Tokio runtime."));

	SpotifyApi::builder()
		.base_url(base_url)
		.timeouts(timeouts)
		.executors(executor.clone(), executor)
		.build()
		.expect("Test wrapper should build.")
}

#[tokio::test]
async fn authorization_header_follows_the_current_token() {
	let server = MockServer::start_async().await;
	let anonymous = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/me").header_missing("authorization");
			then.status(200).header("content-type", "application/json").body(ME_BODY);
		})
		.await;
	let authorized = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/me").header("authorization", "Bearer abc123");
			then.status(200).header("content-type", "application/json").body(ME_BODY);
		})
		.await;
	let api = build_test_api(&base_url(&server), TransportTimeouts::default());

	for token in [None, Some("abc123"), None] {
		let me = api
			.set_access_token(token)
			.service()
			.get_me()
			.expect("Call should build.")
			.execute()
			.await
			.expect("Request should reach the mock server.")
			.into_body()
			.expect("Profile should decode.");

		assert_eq!(me.public.id, "wizzler");
		assert_eq!(me.product.as_deref(), Some("premium"));
	}

	anonymous.assert_calls_async(2).await;
	authorized.assert_calls_async(1).await;
}

#[tokio::test]
async fn last_token_set_wins() {
	let server = MockServer::start_async().await;
	let latest = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/me").header("authorization", "Bearer second");
			then.status(200).body(ME_BODY);
		})
		.await;
	let api = build_test_api(&base_url(&server), TransportTimeouts::default());

	api.set_access_token(Some("first")).set_access_token(Some("second"));

	let response = api
		.service()
		.get_me()
		.expect("Call should build.")
		.execute()
		.await
		.expect("Request should reach the mock server.");

	assert!(response.is_success());

	latest.assert_async().await;
}

#[tokio::test]
async fn stalled_responses_time_out() {
	let server = MockServer::start_async().await;
	let _slow = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/albums/slow");
			then.status(200).body("{}").delay(StdDuration::from_secs(3));
		})
		.await;
	let api = build_test_api(
		&base_url(&server),
		TransportTimeouts::uniform(StdDuration::from_millis(250)),
	);
	let started = Instant::now();
	let err = api
		.service()
		.get_album("slow")
		.expect("Call should build.")
		.execute()
		.await
		.expect_err("Delayed response should exceed the deadline.");

	assert!(err.is_timeout(), "unexpected error: {err:?}");
	assert!(started.elapsed() < StdDuration::from_secs(2));
}

#[tokio::test]
async fn unknown_enum_values_and_fields_are_tolerated() {
	let server = MockServer::start_async().await;
	let _album = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/albums/4aawyAB9vmqN3uQ7FjRGTy").query_param("market", "ES");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"album_type": "audiobook_compilation",
					"id": "4aawyAB9vmqN3uQ7FjRGTy",
					"name": "Global Warming",
					"label": null,
					"brand_new_field": {"nested": [1, 2, 3]},
					"tracks": {"items": [], "total": 0, "limit": 50, "offset": 0}
				}"#,
			);
		})
		.await;
	let api = build_test_api(&base_url(&server), TransportTimeouts::default());
	let album = api
		.service()
		.call::<Album>(
			&GET_ALBUM,
			&[("id", "4aawyAB9vmqN3uQ7FjRGTy")],
			&QueryOptions::new().market("ES"),
		)
		.expect("Call should build.")
		.execute()
		.await
		.expect("Request should reach the mock server.")
		.into_body()
		.expect("Lenient decoding should accept the album.");

	assert_eq!(album.simple.album_type, Some(AlbumType::Unknown));
	assert_eq!(album.simple.name, "Global Warming");
	assert_eq!(album.label, None);
	assert_eq!(album.tracks.total, 0);
}

#[tokio::test]
async fn error_statuses_keep_their_payload() {
	let server = MockServer::start_async().await;
	let _unauthorized = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/me");
			then.status(401)
				.header("content-type", "application/json")
				.body(r#"{"error":{"status":401,"message":"No token provided"}}"#);
		})
		.await;
	let api = build_test_api(&base_url(&server), TransportTimeouts::default());
	let response = api
		.service()
		.get_me()
		.expect("Call should build.")
		.execute()
		.await
		.expect("Error statuses are not transport failures.");

	assert_eq!(response.status().as_u16(), 401);
	assert!(response.body().is_none());
	assert!(
		String::from_utf8_lossy(response.error_body().expect("Error body should be kept."))
			.contains("No token provided")
	);
	assert!(matches!(response.into_body(), Err(Error::Status { status: 401, .. })));
}

#[tokio::test]
async fn search_sends_type_and_options() {
	let server = MockServer::start_async().await;
	let search = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/search")
				.query_param("q", "Muse")
				.query_param("type", "artist")
				.query_param("limit", "2");
			then.status(200).body(
				r#"{"artists":{"items":[{"id":"12Chz98pHFMPJEknJQMWvI","name":"Muse","genres":["rock"]}],"total":1,"limit":2,"offset":0}}"#,
			);
		})
		.await;
	let api = build_test_api(&base_url(&server), TransportTimeouts::default());
	let pager = api
		.service()
		.search_artists("Muse", &QueryOptions::new().limit(2))
		.expect("Call should build.")
		.execute()
		.await
		.expect("Request should reach the mock server.")
		.into_body()
		.expect("Search results should decode.");

	assert_eq!(pager.artists.items.len(), 1);
	assert_eq!(pager.artists.items[0].simple.name, "Muse");
	assert!(!pager.artists.has_next());

	search.assert_async().await;
}

#[tokio::test]
async fn default_executors_deliver_callbacks_off_the_caller_thread() {
	let server = MockServer::start_async().await;
	let _me = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/me").header("authorization", "Bearer cb-token");
			then.status(200).body(ME_BODY);
		})
		.await;
	let api = SpotifyApi::builder()
		.base_url(base_url(&server))
		.build()
		.expect("Default wrapper should build.");
	let (tx, rx) = tokio::sync::oneshot::channel();

	api.set_access_token(Some("cb-token"))
		.service()
		.get_me()
		.expect("Call should build.")
		.enqueue(move |result| {
			let thread = std::thread::current().name().map(ToOwned::to_owned);
			let _ = tx.send((thread, result.and_then(|response| response.into_body())));
		});

	let (thread, result) = tokio::time::timeout(StdDuration::from_secs(10), rx)
		.await
		.expect("Callback should run before the deadline.")
		.expect("Callback should deliver a result.");

	assert_eq!(thread.as_deref(), Some("spotify-api-callback"));
	assert_eq!(result.expect("Profile should decode.").public.id, "wizzler");
}
