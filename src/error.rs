//! Client-level error types shared across the transport pipeline, executors, and service calls.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded even under the lenient policy.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Web API answered with a non-success status.
	#[error("Web API responded with HTTP {status}.")]
	Status {
		/// HTTP status code returned by the Web API.
		status: u16,
		/// Raw error payload, lossily decoded as UTF-8.
		body: String,
	},
	/// Successful response carried no content where a body was expected.
	#[error("Web API responded with HTTP {status} and no body.")]
	EmptyBody {
		/// HTTP status code returned by the Web API.
		status: u16,
	},
	/// Network executor dropped the request before it produced a result.
	#[error("Network executor dropped the request before completion.")]
	Dispatch,
}
impl Error {
	/// Returns `true` when the underlying transport reported a timeout.
	pub fn is_timeout(&self) -> bool {
		match self {
			Self::Transport(e) => e.is_timeout(),
			_ => false,
		}
	}
}

/// Configuration and validation failures raised while building the client or a request.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// Access token cannot be carried in an `Authorization` header.
	#[error("Access token cannot be encoded as an Authorization header value.")]
	InvalidAccessToken {
		/// Header encoding failure.
		#[source]
		source: http::header::InvalidHeaderValue,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than HTTP(S) or cannot carry a path.
	#[error("Base URL must be an absolute http(s) URL: {url}.")]
	UnsupportedBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Endpoint path template references a parameter the caller did not supply.
	#[error("Endpoint `{endpoint}` is missing the `{param}` path parameter.")]
	MissingPathParam {
		/// Endpoint name from the catalog.
		endpoint: &'static str,
		/// Template parameter name.
		param: String,
	},
	/// Executor runtime could not be started.
	#[error("Executor runtime could not be started.")]
	Runtime(#[from] std::io::Error),
	/// No Tokio runtime is available on the current thread.
	#[error("No Tokio runtime is available on the current thread.")]
	NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, timeouts).
///
/// The transport's own error is kept as the `source`, untouched, so callers can downcast it
/// (for example to [`reqwest::Error`]) and observe exactly what the transport produced.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a failure.
	#[error("Network error occurred while calling the Web API.")]
	Network {
		/// Transport-specific error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Returns `true` when the transport error represents an elapsed timeout.
	pub fn is_timeout(&self) -> bool {
		let Self::Network { source } = self;

		#[cfg(feature = "reqwest")]
		if let Some(e) = source.downcast_ref::<ReqwestError>() {
			return e.is_timeout();
		}

		source
			.downcast_ref::<std::io::Error>()
			.is_some_and(|e| e.kind() == std::io::ErrorKind::TimedOut)
	}
}

/// Response body that could not be parsed as the expected model.
#[derive(Debug, ThisError)]
#[error("Web API returned malformed JSON for `{endpoint}`.")]
pub struct DecodeError {
	/// Endpoint name from the catalog.
	pub endpoint: &'static str,
	/// HTTP status code of the response.
	pub status: u16,
	/// Structured parsing failure including the JSON path.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn io_timeouts_are_classified() {
		let err: Error =
			TransportError::network(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow"))
				.into();

		assert!(err.is_timeout());

		let err: Error = TransportError::network(std::io::Error::new(
			std::io::ErrorKind::ConnectionRefused,
			"refused",
		))
		.into();

		assert!(!err.is_timeout());
		assert!(!Error::Dispatch.is_timeout());
	}

	#[test]
	fn transport_source_is_preserved() {
		let err: Error = TransportError::network(std::io::Error::new(
			std::io::ErrorKind::ConnectionRefused,
			"refused",
		))
		.into();
		let source =
			StdError::source(&err).expect("Transport errors should expose the original failure.");

		assert!(source.downcast_ref::<std::io::Error>().is_some());
	}
}
