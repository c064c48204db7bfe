//! Bearer-token injection for outgoing requests.
//!
//! [`RequestSigner`] is the `request -> request'` decorator; [`BearerSigner`] reads the current
//! token from a [`TokenSource`] and attaches `Authorization: Bearer <token>` when one is set.
//! [`AuthenticatingTransport`] composes a signer in front of the next pipeline stage.

// crates.io
use http::{HeaderValue, header::AUTHORIZATION};
// self
use crate::{
	_prelude::*,
	auth::{TokenHolder, TokenSecret, TokenSource},
	error::ConfigError,
	http::{HttpRequest, HttpTransport, TransportFuture},
};

/// Describes how to decorate an outbound request before it reaches the transport.
pub trait RequestSigner
where
	Self: 'static + Send + Sync,
{
	/// Consumes the request and returns it, possibly with authorization state attached.
	///
	/// An error aborts the request before anything is sent.
	fn sign(&self, request: HttpRequest) -> Result<HttpRequest, ConfigError>;
}

/// Attaches the current bearer token, if any, to each request.
#[derive(Clone)]
pub struct BearerSigner(Arc<dyn TokenSource>);
impl BearerSigner {
	/// Reads tokens from an arbitrary [`TokenSource`].
	pub fn new(source: Arc<dyn TokenSource>) -> Self {
		Self(source)
	}

	/// Reads tokens from a shared [`TokenHolder`].
	pub fn from_holder(holder: TokenHolder) -> Self {
		Self(Arc::new(holder))
	}
}
impl RequestSigner for BearerSigner {
	fn sign(&self, mut request: HttpRequest) -> Result<HttpRequest, ConfigError> {
		if let Some(token) = self.0.current().filter(|token| !token.is_empty()) {
			request.headers_mut().insert(AUTHORIZATION, bearer_value(&token)?);
		}

		Ok(request)
	}
}
impl Debug for BearerSigner {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("BearerSigner(..)")
	}
}

/// Failure of an [`AuthenticatingTransport`]: either the signer refused the request or the
/// inner stage failed.
#[derive(Debug, ThisError)]
pub enum SigningError<E> {
	/// Request was rejected before it reached the inner stage.
	#[error(transparent)]
	Signer(ConfigError),
	/// Inner stage failure, unchanged.
	#[error(transparent)]
	Transport(E),
}

/// Pipeline stage that signs each request and forwards it to the next stage.
///
/// The stage never retries, never caches, and never touches the token holder. A request the
/// signer rejects is never sent; otherwise the inner stage's response or error is returned
/// as-is.
#[derive(Clone, Debug)]
pub struct AuthenticatingTransport<T, S = BearerSigner> {
	signer: S,
	inner: T,
}
impl<T, S> AuthenticatingTransport<T, S> {
	/// Places `signer` in front of `inner`.
	pub fn new(signer: S, inner: T) -> Self {
		Self { signer, inner }
	}

	/// Returns the wrapped stage.
	pub fn inner(&self) -> &T {
		&self.inner
	}
}
impl<T, S> HttpTransport for AuthenticatingTransport<T, S>
where
	T: HttpTransport,
	S: RequestSigner,
{
	type TransportError = SigningError<T::TransportError>;

	fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		match self.signer.sign(request) {
			Ok(request) => {
				let pending = self.inner.send(request);

				Box::pin(async move { pending.await.map_err(SigningError::Transport) })
			},
			Err(e) => {
				#[cfg(feature = "tracing")]
				tracing::warn!("Request rejected before sending: {e}");

				Box::pin(async move { Err(SigningError::Signer(e)) })
			},
		}
	}

	fn map_transport_error(error: Self::TransportError) -> Error {
		match error {
			SigningError::Signer(e) => e.into(),
			SigningError::Transport(e) => T::map_transport_error(e),
		}
	}
}

fn bearer_value(token: &TokenSecret) -> Result<HeaderValue, ConfigError> {
	let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
		.map_err(|source| ConfigError::InvalidAccessToken { source })?;

	value.set_sensitive(true);

	Ok(value)
}
