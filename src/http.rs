//! Transport primitives for Web API calls.
//!
//! The module exposes [`HttpTransport`], the single seam between the service handle and an HTTP
//! stack, plus the stages the default pipeline is assembled from:
//!
//! ```text
//! AuthenticatingTransport -> LoggingTransport -> ReqwestHttpClient
//! ```
//!
//! Every stage forwards the next stage's error type untouched, so a failure produced by the
//! network client reaches the caller exactly as it was raised.

pub mod auth;
pub mod logging;

pub use auth::*;
pub use logging::*;

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::{config::TransportTimeouts, error::ConfigError};

/// Outgoing request with a fully buffered body.
pub type HttpRequest = http::Request<Vec<u8>>;
/// Incoming response with a fully buffered body.
pub type HttpResponse = http::Response<Vec<u8>>;
/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// One stage of the request pipeline.
///
/// Implementations either perform network I/O themselves or decorate another stage. They must be
/// `Send + Sync + 'static` so the service can move them onto the network executor behind an
/// `Arc`, and decorators must hand the inner stage's error back without rewrapping it.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves to the buffered response.
	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;

	/// Converts a failure of this stage into a client [`Error`].
	///
	/// The default keeps the failure untouched as the source of [`TransportError::Network`].
	/// Decorators that can fail on their own override this and defer to the inner stage for
	/// everything else.
	fn map_transport_error(error: Self::TransportError) -> Error {
		TransportError::network(error).into()
	}
}
impl<T> HttpTransport for Arc<T>
where
	T: HttpTransport,
{
	type TransportError = T::TransportError;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		(**self).send(request)
	}

	fn map_transport_error(error: Self::TransportError) -> Error {
		T::map_transport_error(error)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client that enforces the provided deadlines.
	///
	/// `connect` and `read` map onto reqwest's own connect and read timeouts, which are
	/// per-phase: `read` restarts on every chunk received. reqwest has no write deadline, so the
	/// whole request is additionally capped at [`TransportTimeouts::total`]. Unlike the per-phase
	/// deadlines, this cap also ends a response that is still making progress once the sum is
	/// exceeded (90 seconds with the defaults).
	pub fn with_timeouts(timeouts: TransportTimeouts) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.connect_timeout(timeouts.connect)
			.read_timeout(timeouts.read)
			.timeout(timeouts.total())
			.build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let version = response.version();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.version_mut() = version;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// std
	use std::time::Duration as StdDuration;
	// self
	use super::*;

	#[test]
	fn builds_with_default_timeouts() {
		let client = ReqwestHttpClient::with_timeouts(TransportTimeouts::default());

		assert!(client.is_ok());
	}

	#[tokio::test]
	async fn unreachable_host_surfaces_the_reqwest_error() {
		let client = ReqwestHttpClient::with_timeouts(TransportTimeouts::uniform(
			StdDuration::from_millis(500),
		))
		.expect("Client should build.");
		// Port 9 (discard) on loopback is closed on CI machines.
		let request = http::Request::get("http://127.0.0.1:9/")
			.body(Vec::new())
			.expect("Request should build.");
		let err = client.send(request).await.expect_err("Closed port should fail.");

		assert!(err.is_connect() || err.is_timeout());
	}

	#[tokio::test]
	async fn connect_deadline_bounds_unroutable_hosts() {
		let client = ReqwestHttpClient::with_timeouts(TransportTimeouts {
			connect: StdDuration::from_millis(200),
			..TransportTimeouts::default()
		})
		.expect("Client should build.");
		// TEST-NET-1 (RFC 5737) is never routed; the SYN goes unanswered or fails fast.
		let request = http::Request::get("http://192.0.2.1:81/")
			.body(Vec::new())
			.expect("Request should build.");
		let started = std::time::Instant::now();
		let err = client.send(request).await.expect_err("Unroutable host should fail.");

		assert!(err.is_connect() || err.is_timeout(), "unexpected error: {err:?}");
		assert!(started.elapsed() < StdDuration::from_secs(5));
	}
}
