//! Demonstrates the default wrapper: reqwest transport, serial network executor, callback pool,
//! and a token that is swapped between calls.

// std
use std::time::Duration;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use spotify_web_api::{api::SpotifyApi, config::TransportTimeouts, service::QueryOptions};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let album_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/albums/0sNOF9WDwhWunNAHPD3Baj");
			then.status(200).header("content-type", "application/json").body(
				r#"{"album_type":"album","id":"0sNOF9WDwhWunNAHPD3Baj","name":"She's So Unusual","popularity":54}"#,
			);
		})
		.await;
	let search_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/search")
				.query_param("type", "track")
				.header("authorization", "Bearer demo-token");
			then.status(200).header("content-type", "application/json").body(
				r#"{"tracks":{"items":[{"id":"3n3Ppam7vgaVa1iaRUc9Lp","name":"Mr. Brightside","duration_ms":222075}],"total":1,"limit":1,"offset":0}}"#,
			);
		})
		.await;
	let api = SpotifyApi::builder()
		.base_url(server.url("/v1/"))
		.timeouts(TransportTimeouts::uniform(Duration::from_secs(10)))
		.build()?;
	let album = api.service().get_album("0sNOF9WDwhWunNAHPD3Baj")?.execute().await?.into_body()?;

	println!("Album fetched without a token: {}.", album.simple.name);

	api.set_access_token(Some("demo-token"));

	let (tx, rx) = tokio::sync::oneshot::channel();

	api.service().search_tracks("Mr. Brightside", &QueryOptions::new().limit(1))?.enqueue(
		move |result| {
			let _ = tx.send(result.and_then(|response| response.into_body()));
		},
	);

	let tracks = rx.await??;

	for track in &tracks.tracks.items {
		println!(
			"Track delivered on the callback pool: {} ({} ms).",
			track.simple.name, track.simple.duration_ms
		);
	}

	album_mock.assert_async().await;
	search_mock.assert_async().await;

	Ok(())
}
