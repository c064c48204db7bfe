//! The authenticated Web API wrapper.
//!
//! [`SpotifyApi`] owns the [`TokenHolder`], assembles the request pipeline once
//! (`AuthenticatingTransport -> LoggingTransport -> transport`), and exposes the resulting
//! [`SpotifyService`]. Setting the access token only touches the holder; the pipeline and the
//! service handle are never rebuilt.
//!
//! ```no_run
//! # async fn demo() -> spotify_web_api::error::Result<()> {
//! use spotify_web_api::api::SpotifyApi;
//!
//! let api = SpotifyApi::new()?;
//!
//! // Optional for endpoints that do not require authorization.
//! api.set_access_token(Some("access-token"));
//!
//! let album = api.service().get_album("2dIGnmEIy1WZIcZCFSj6i8")?.execute().await?.into_body()?;
//!
//! println!("{}", album.simple.name);
//! # Ok(())
//! # }
//! ```

// self
use crate::{
	_prelude::*,
	auth::{TokenHolder, TokenSecret},
	config::{ApiConfig, ApiConfigBuilder, TransportTimeouts},
	exec::{Executor, Executors},
	http::{AuthenticatingTransport, BearerSigner, HttpTransport, LoggingTransport},
	service::SpotifyService,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Full request pipeline in front of the network transport `C`.
pub type Pipeline<C> = AuthenticatingTransport<LoggingTransport<C>>;

#[cfg(feature = "reqwest")]
/// Wrapper specialized for the crate's default reqwest transport.
pub type ReqwestSpotifyApi = SpotifyApi<ReqwestHttpClient>;

/// Creates and configures an authenticated client for the Spotify Web API.
pub struct SpotifyApi<C>
where
	C: HttpTransport,
{
	token: TokenHolder,
	service: SpotifyService<Pipeline<C>>,
}
impl<C> SpotifyApi<C>
where
	C: HttpTransport,
{
	/// Sets or replaces the access token; `None` removes it.
	///
	/// Requests started after this call carry `Authorization: Bearer <token>` (or no
	/// authorization at all for `None` or an empty token). Requests already in flight may see
	/// either value. A token that cannot be carried in a header value fails each request with
	/// [`ConfigError::InvalidAccessToken`](crate::error::ConfigError::InvalidAccessToken).
	pub fn set_access_token(&self, token: Option<&str>) -> &Self {
		self.token.set(token.map(TokenSecret::from));

		self
	}

	/// Removes the access token.
	pub fn clear_access_token(&self) -> &Self {
		self.token.clear();

		self
	}

	/// Returns `true` when a non-empty access token is set.
	pub fn has_access_token(&self) -> bool {
		self.token.is_set()
	}

	/// Holder the pipeline reads the token from.
	pub fn token_holder(&self) -> &TokenHolder {
		&self.token
	}

	/// Typed service handle bound to this wrapper's pipeline.
	pub fn service(&self) -> &SpotifyService<Pipeline<C>> {
		&self.service
	}

	/// Configuration fixed at construction.
	pub fn config(&self) -> &ApiConfig {
		self.service.config()
	}
}
#[cfg(feature = "reqwest")]
impl SpotifyApi<ReqwestHttpClient> {
	/// Creates a wrapper with a dedicated serial network executor and a callback pool of
	/// `available_parallelism + 1` workers.
	pub fn new() -> Result<Self> {
		Self::builder().build()
	}

	/// Creates a wrapper that issues requests on `network` and delivers callbacks on
	/// `callback`.
	pub fn with_executors(network: Arc<dyn Executor>, callback: Arc<dyn Executor>) -> Result<Self> {
		Self::builder().executors(network, callback).build()
	}

	/// Starts a builder for custom configuration.
	pub fn builder() -> SpotifyApiBuilder {
		SpotifyApiBuilder::default()
	}
}
impl<C> Debug for SpotifyApi<C>
where
	C: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SpotifyApi")
			.field("base_url", &self.config().base_url.as_str())
			.field("token_set", &self.token.is_set())
			.finish()
	}
}

/// Builder for [`SpotifyApi`] values.
#[derive(Debug, Default)]
pub struct SpotifyApiBuilder {
	/// Configuration being assembled.
	pub config: ApiConfigBuilder,
	/// Custom executors; defaults are started when absent.
	pub executors: Option<Executors>,
	/// Shared token holder; a fresh one is created when absent.
	pub token: Option<TokenHolder>,
}
impl SpotifyApiBuilder {
	/// Replaces the whole configuration builder.
	pub fn config(mut self, config: ApiConfigBuilder) -> Self {
		self.config = config;

		self
	}

	/// Overrides the base URL.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.config = self.config.base_url(url);

		self
	}

	/// Overrides the transport deadlines.
	pub fn timeouts(mut self, timeouts: TransportTimeouts) -> Self {
		self.config = self.config.timeouts(timeouts);

		self
	}

	/// Supplies both execution contexts.
	pub fn executors(mut self, network: Arc<dyn Executor>, callback: Arc<dyn Executor>) -> Self {
		self.executors = Some(Executors::new(network, callback));

		self
	}

	/// Shares an existing token holder with the wrapper.
	pub fn token_holder(mut self, holder: TokenHolder) -> Self {
		self.token = Some(holder);

		self
	}

	#[cfg(feature = "reqwest")]
	/// Builds a wrapper over a reqwest client honoring the configured deadlines.
	pub fn build(self) -> Result<SpotifyApi<ReqwestHttpClient>> {
		let config = self.config.build()?;
		let client = ReqwestHttpClient::with_timeouts(config.timeouts)?;

		Self::assemble(config, self.executors, self.token, client)
	}

	/// Builds a wrapper over a caller-provided transport.
	///
	/// The transport is responsible for enforcing deadlines; the configured
	/// [`TransportTimeouts`] are only applied by [`Self::build`].
	pub fn build_with_http_client<C>(self, client: C) -> Result<SpotifyApi<C>>
	where
		C: HttpTransport,
	{
		let config = self.config.build()?;

		Self::assemble(config, self.executors, self.token, client)
	}

	fn assemble<C>(
		config: ApiConfig,
		executors: Option<Executors>,
		token: Option<TokenHolder>,
		client: C,
	) -> Result<SpotifyApi<C>>
	where
		C: HttpTransport,
	{
		let executors = match executors {
			Some(executors) => executors,
			None => Executors::with_defaults()?,
		};
		let token = token.unwrap_or_default();
		let pipeline = AuthenticatingTransport::new(
			BearerSigner::from_holder(token.clone()),
			LoggingTransport::new(client),
		);

		Ok(SpotifyApi { token, service: SpotifyService::new(config, pipeline, executors) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{_preludet::*, error::ConfigError, exec::TokioExecutor};

	fn recording_api(recorder: RecordingTransport) -> SpotifyApi<RecordingTransport> {
		let executor: Arc<dyn Executor> =
			Arc::new(TokioExecutor::current().expect("Test runtime should be available."));

		SpotifyApiBuilder::default()
			.executors(executor.clone(), executor)
			.build_with_http_client(recorder)
			.expect("Recording wrapper should build.")
	}

	#[tokio::test]
	async fn token_lifecycle_drives_the_authorization_header() {
		let recorder = RecordingTransport::ok(b"{}".to_vec());
		let api = recording_api(recorder.clone());

		api.service().get_me().expect("Call should build.").execute().await.expect("No token.");
		api.set_access_token(Some("abc123"))
			.service()
			.get_me()
			.expect("Call should build.")
			.execute()
			.await
			.expect("With token.");
		api.set_access_token(None)
			.service()
			.get_me()
			.expect("Call should build.")
			.execute()
			.await
			.expect("Token removed.");

		assert_eq!(recorder.authorization_log(), vec![None, Some("Bearer abc123".into()), None]);
		assert!(
			recorder
				.requests()
				.iter()
				.all(|(method, uri)| *method == http::Method::GET
					&& uri == "https://api.spotify.com/v1/me")
		);
	}

	#[tokio::test]
	async fn unencodable_token_fails_the_call_instead_of_going_anonymous() {
		let recorder = RecordingTransport::ok(b"{}".to_vec());
		let api = recording_api(recorder.clone());
		let err = api
			.set_access_token(Some("abc\n123"))
			.service()
			.get_me()
			.expect("Call should build.")
			.execute()
			.await
			.expect_err("Token with a newline should fail the call.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidAccessToken { .. })));
		assert_eq!(recorder.request_count(), 0);
	}

	#[tokio::test]
	async fn shared_holder_updates_reach_the_wrapper() {
		let recorder = RecordingTransport::ok(b"{}".to_vec());
		let holder = TokenHolder::new();
		let executor: Arc<dyn Executor> =
			Arc::new(TokioExecutor::current().expect("Test runtime should be available."));
		let api = SpotifyApiBuilder::default()
			.executors(executor.clone(), executor)
			.token_holder(holder.clone())
			.build_with_http_client(recorder.clone())
			.expect("Recording wrapper should build.");

		holder.set(Some(TokenSecret::new("rotated")));

		assert!(api.has_access_token());

		api.service().get_me().expect("Call should build.").execute().await.expect("Rotated.");

		assert_eq!(recorder.authorization_log(), vec![Some("Bearer rotated".into())]);
		assert!(format!("{api:?}").contains("token_set: true"));
	}

	#[tokio::test]
	async fn builder_rejects_bad_base_urls() {
		let err = SpotifyApiBuilder::default()
			.base_url("mailto:someone@example.com")
			.build_with_http_client(RecordingTransport::ok(Vec::new()))
			.expect_err("Non-HTTP base URLs should be rejected.");

		assert!(matches!(err, Error::Config(_)));
	}
}
