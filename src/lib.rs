//! Authenticated, timeout-bounded Spotify Web API client: one swappable bearer token, a layered
//! transport pipeline, and lenient typed responses delivered on dedicated executors.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod exec;
pub mod http;
pub mod model;
pub mod obs;
pub mod service;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// std
	use std::io::{Error as IoError, ErrorKind};
	// crates.io
	use http::{StatusCode, header::AUTHORIZATION};
	// self
	use crate::http::{HttpRequest, HttpResponse, HttpTransport, TransportFuture};

	/// In-memory transport that records every request and answers with a canned reply.
	#[derive(Clone, Debug)]
	pub struct RecordingTransport {
		reply: Reply,
		requests: Arc<Mutex<Vec<HttpRequest>>>,
	}
	impl RecordingTransport {
		/// Answers `200 OK` with `body`.
		pub fn ok(body: Vec<u8>) -> Self {
			Self::with_status(200, body)
		}

		/// Answers with `status` and `body`.
		pub fn with_status(status: u16, body: Vec<u8>) -> Self {
			Self::new(Reply::Status(status, body))
		}

		/// Fails every request with an I/O error of `kind`.
		pub fn failing(kind: ErrorKind) -> Self {
			Self::new(Reply::Fail(kind))
		}

		fn new(reply: Reply) -> Self {
			Self { reply, requests: Default::default() }
		}

		/// Number of requests observed so far.
		pub fn request_count(&self) -> usize {
			self.requests.lock().len()
		}

		/// Method and URI of every observed request, in order.
		pub fn requests(&self) -> Vec<(http::Method, String)> {
			self.requests
				.lock()
				.iter()
				.map(|request| (request.method().clone(), request.uri().to_string()))
				.collect()
		}

		/// `Authorization` header of every observed request, in order.
		pub fn authorization_log(&self) -> Vec<Option<String>> {
			self.requests.lock().iter().map(|request| authorization_values(request).pop()).collect()
		}
	}
	impl HttpTransport for RecordingTransport {
		type TransportError = IoError;

		fn send(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
			self.requests.lock().push(request);

			let reply = self.reply.clone();

			Box::pin(async move {
				match reply {
					Reply::Status(status, body) => {
						let mut response = HttpResponse::new(body);

						*response.status_mut() =
							StatusCode::from_u16(status).map_err(IoError::other)?;

						Ok(response)
					},
					Reply::Fail(kind) => Err(IoError::new(kind, "recording transport failure")),
				}
			})
		}
	}

	#[derive(Clone, Debug)]
	enum Reply {
		Status(u16, Vec<u8>),
		Fail(ErrorKind),
	}

	/// Every `Authorization` header value on `request`, lossily decoded.
	pub fn authorization_values(request: &HttpRequest) -> Vec<String> {
		request
			.headers()
			.get_all(AUTHORIZATION)
			.iter()
			.map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
			.collect()
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		hash::Hash,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
