//! BASIC request/response logging stage.

// std
#[cfg(feature = "tracing")] use std::time::Instant;
// self
use crate::{
	_prelude::*,
	http::{HttpRequest, HttpTransport, TransportFuture},
};

/// Pipeline stage that logs one line per request and one per response or failure.
///
/// Lines follow the `--> GET <url> (N-byte body)` / `<-- 200 OK <url> (Xms, N-byte body)` shape
/// at `info`. Headers are never logged, so the bearer token stays out of the output. The stage
/// compiles to a plain passthrough without the `tracing` feature.
#[derive(Clone, Debug)]
pub struct LoggingTransport<T>(T);
impl<T> LoggingTransport<T> {
	/// Wraps `inner` with request/response logging.
	pub fn new(inner: T) -> Self {
		Self(inner)
	}

	/// Returns the wrapped stage.
	pub fn inner(&self) -> &T {
		&self.0
	}
}
impl<T> HttpTransport for LoggingTransport<T>
where
	T: HttpTransport,
{
	type TransportError = T::TransportError;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		#[cfg(feature = "tracing")]
		{
			let method = request.method().clone();
			let uri = request.uri().clone();

			tracing::info!("--> {method} {uri} ({}-byte body)", request.body().len());

			let started = Instant::now();
			let pending = self.0.send(request);

			Box::pin(async move {
				let result = pending.await;
				let elapsed = started.elapsed().as_millis();

				match &result {
					Ok(response) => tracing::info!(
						"<-- {} {uri} ({elapsed}ms, {}-byte body)",
						response.status(),
						response.body().len()
					),
					Err(e) => tracing::info!("<-- HTTP FAILED: {e}"),
				}

				result
			})
		}
		#[cfg(not(feature = "tracing"))]
		{
			self.0.send(request)
		}
	}

	fn map_transport_error(error: Self::TransportError) -> Error {
		T::map_transport_error(error)
	}
}
