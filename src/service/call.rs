//! Prepared calls and their responses.

// std
use std::marker::PhantomData;
// crates.io
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::oneshot;
// self
use crate::{
	_prelude::*,
	error::DecodeError,
	exec::Executors,
	http::{HttpRequest, HttpResponse, HttpTransport},
	model,
	obs::{self, RequestOutcome, RequestSpan},
	service::Endpoint,
};

type Outcome<E> = std::result::Result<HttpResponse, E>;

/// Transport plus the executors calls are dispatched on.
pub(crate) struct Dispatcher<C> {
	pub(crate) transport: Arc<C>,
	pub(crate) executors: Executors,
}
impl<C> Clone for Dispatcher<C> {
	fn clone(&self) -> Self {
		Self { transport: Arc::clone(&self.transport), executors: self.executors.clone() }
	}
}

/// A prepared request for one endpoint, decoded as `R`.
///
/// Nothing is sent until [`Call::execute`] or [`Call::enqueue`] is invoked. The bearer token is
/// read when the network executor starts the request, not when the call is prepared.
pub struct Call<R, C> {
	endpoint: &'static Endpoint,
	request: HttpRequest,
	dispatcher: Dispatcher<C>,
	_response: PhantomData<fn() -> R>,
}
impl<R, C> Call<R, C>
where
	R: 'static + Send + DeserializeOwned,
	C: HttpTransport,
{
	pub(crate) fn new(
		endpoint: &'static Endpoint,
		request: HttpRequest,
		dispatcher: Dispatcher<C>,
	) -> Self {
		Self { endpoint, request, dispatcher, _response: PhantomData }
	}

	/// Endpoint this call targets.
	pub fn endpoint(&self) -> &'static Endpoint {
		self.endpoint
	}

	/// Request that will be handed to the pipeline (before authentication).
	pub fn request(&self) -> &HttpRequest {
		&self.request
	}

	/// Sends the request on the network executor and waits for the decoded response.
	///
	/// Non-success statuses are returned as an [`ApiResponse`]; only transport failures,
	/// undecodable bodies, and dispatch failures surface as errors.
	pub async fn execute(self) -> Result<ApiResponse<R>> {
		let endpoint = self.endpoint;
		let pending = self.dispatch();
		let outcome = pending.await.map_err(|_| Error::Dispatch)?;

		ApiResponse::from_outcome::<C>(endpoint, outcome)
	}

	/// Sends the request on the network executor and hands the decoded result to `callback` on
	/// the callback executor.
	pub fn enqueue<F>(self, callback: F)
	where
		F: 'static + Send + FnOnce(Result<ApiResponse<R>>),
	{
		let endpoint = self.endpoint;
		let callback_executor = Arc::clone(&self.dispatcher.executors.callback);
		let pending = self.dispatch();

		callback_executor.spawn(Box::pin(async move {
			let result = match pending.await {
				Ok(outcome) => ApiResponse::from_outcome::<C>(endpoint, outcome),
				Err(_) => Err(Error::Dispatch),
			};

			callback(result);
		}));
	}

	fn dispatch(self) -> oneshot::Receiver<Outcome<C::TransportError>> {
		let Self { endpoint, request, dispatcher, .. } = self;
		let (tx, rx) = oneshot::channel();
		let span = RequestSpan::new(endpoint.name);
		let transport = dispatcher.transport;

		obs::record_request_outcome(endpoint.name, RequestOutcome::Attempt);
		dispatcher.executors.network.spawn(Box::pin(span.instrument(async move {
			let outcome = transport.send(request).await;
			let label =
				if outcome.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

			obs::record_request_outcome(endpoint.name, label);

			let _ = tx.send(outcome);
		})));

		rx
	}
}
impl<R, C> Debug for Call<R, C> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Call")
			.field("endpoint", &self.endpoint.name)
			.field("method", self.request.method())
			.field("uri", self.request.uri())
			.finish()
	}
}

/// Response to a [`Call`], successful or not.
#[derive(Clone, Debug)]
pub struct ApiResponse<R> {
	status: StatusCode,
	headers: HeaderMap,
	body: Option<R>,
	error_body: Option<Vec<u8>>,
}
impl<R> ApiResponse<R>
where
	R: DeserializeOwned,
{
	fn from_outcome<C>(
		endpoint: &'static Endpoint,
		outcome: Outcome<C::TransportError>,
	) -> Result<Self>
	where
		C: HttpTransport,
	{
		let response = outcome.map_err(C::map_transport_error)?;
		let (parts, bytes) = response.into_parts();
		let status = parts.status;

		if !status.is_success() {
			return Ok(Self { status, headers: parts.headers, body: None, error_body: Some(bytes) });
		}
		if bytes.is_empty() || status == StatusCode::NO_CONTENT {
			return Ok(Self { status, headers: parts.headers, body: None, error_body: None });
		}

		let body = model::from_slice(&bytes).map_err(|source| DecodeError {
			endpoint: endpoint.name,
			status: status.as_u16(),
			source,
		})?;

		Ok(Self { status, headers: parts.headers, body: Some(body), error_body: None })
	}
}
impl<R> ApiResponse<R> {
	/// HTTP status code.
	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// Response headers.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Decoded body of a successful response with content.
	pub fn body(&self) -> Option<&R> {
		self.body.as_ref()
	}

	/// Raw body of a non-success response.
	pub fn error_body(&self) -> Option<&[u8]> {
		self.error_body.as_deref()
	}

	/// Returns the decoded body, turning non-success statuses into [`Error::Status`].
	pub fn into_body(self) -> Result<R> {
		let status = self.status.as_u16();

		if let Some(raw) = self.error_body {
			return Err(Error::Status { status, body: String::from_utf8_lossy(&raw).into_owned() });
		}

		self.body.ok_or(Error::EmptyBody { status })
	}
}
