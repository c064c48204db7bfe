// self
use crate::obs::RequestOutcome;

/// Bumps `spotify_api_request_total{endpoint, outcome}` on the installed recorder.
///
/// Does nothing without the `metrics` feature or when no recorder is installed.
pub fn record_request_outcome(endpoint: &'static str, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"spotify_api_request_total",
			"endpoint" => endpoint,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (endpoint, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_request_outcome_noop_without_metrics() {
		record_request_outcome("get_album", RequestOutcome::Failure);
	}
}
