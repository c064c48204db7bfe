//! Demonstrates plugging a custom [`HttpTransport`] into the wrapper.
//!
//! The transport below never touches the network: it answers from a fixture table and fails
//! unknown paths with its own error type, which reaches the caller untouched as the source of
//! [`TransportError`].

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use color_eyre::Result;
// self
use spotify_web_api::{
	api::SpotifyApiBuilder,
	error::{Error, TransportError},
	exec::{Executor, TokioExecutor},
	http::{HttpRequest, HttpResponse, HttpTransport, TransportFuture},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let executor: Arc<dyn Executor> = Arc::new(TokioExecutor::current()?);
	let api = SpotifyApiBuilder::default()
		.executors(executor.clone(), executor)
		.build_with_http_client(FixtureTransport)?;

	api.set_access_token(Some("fixture-token"));

	let me = api.service().get_me()?.execute().await?.into_body()?;

	println!("Profile served by the fixture transport: {}.", me.public.id);

	match api.service().get_user("nobody")?.execute().await {
		Err(Error::Transport(TransportError::Network { source })) => {
			let missing = source.downcast_ref::<MissingFixture>();

			println!("Transport error preserved: {missing:?}.");
		},
		other => println!("Unexpected outcome: {other:?}."),
	}

	Ok(())
}

#[derive(Debug)]
struct MissingFixture(String);
impl Display for MissingFixture {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "no fixture for {}", self.0)
	}
}
impl StdError for MissingFixture {}

struct FixtureTransport;
impl HttpTransport for FixtureTransport {
	type TransportError = MissingFixture;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let authorized = request.headers().contains_key("authorization");

			match request.uri().path() {
				"/v1/me" if authorized =>
					Ok(HttpResponse::new(br#"{"id":"fixture-user","product":"free"}"#.to_vec())),
				path => Err(MissingFixture(path.to_owned())),
			}
		})
	}
}
