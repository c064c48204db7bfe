//! Per-call spans and counters.
//!
//! Every [`Call`](crate::service::Call) opens one `spotify_api.request` span when it is handed to
//! the network executor. The span carries the endpoint name and stays open until the response or
//! error is sent back. With the `tracing` feature off the span is a zero-sized placeholder, and
//! [`LoggingTransport`](crate::http::LoggingTransport) writes nothing.
//!
//! The `metrics` feature adds a `spotify_api_request_total` counter keyed by `endpoint` and
//! `outcome`. A call bumps it once when dispatched and once more when it finishes.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Stage of a call reported to the request counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Call handed to the network executor.
	Attempt,
	/// Transport produced a response (any status).
	Success,
	/// Transport failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Label written to the `outcome` metric key.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
