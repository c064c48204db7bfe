//! Client configuration fixed at construction time.

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, error::ConfigError};

/// Main Spotify Web API endpoint.
pub const SPOTIFY_WEB_API_ENDPOINT: &str = "https://api.spotify.com/v1/";

/// Per-phase transport deadlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportTimeouts {
	/// Maximum time spent establishing a connection.
	pub connect: StdDuration,
	/// Maximum idle time while reading the response.
	pub read: StdDuration,
	/// Maximum time spent writing the request.
	pub write: StdDuration,
}
impl TransportTimeouts {
	/// Default deadline applied to every phase.
	pub const DEFAULT: StdDuration = StdDuration::from_secs(30);

	/// Applies the same deadline to every phase.
	pub const fn uniform(timeout: StdDuration) -> Self {
		Self { connect: timeout, read: timeout, write: timeout }
	}

	/// Upper bound for a whole request: connect, write, then read.
	pub fn total(&self) -> StdDuration {
		self.connect.saturating_add(self.write).saturating_add(self.read)
	}
}
impl Default for TransportTimeouts {
	fn default() -> Self {
		Self::uniform(Self::DEFAULT)
	}
}

/// Immutable configuration shared by the transport and the service handle.
#[derive(Clone, Debug)]
pub struct ApiConfig {
	/// Base URL every endpoint path is joined onto; always ends with `/`.
	pub base_url: Url,
	/// Transport deadlines.
	pub timeouts: TransportTimeouts,
}
impl ApiConfig {
	/// Starts a builder seeded with the defaults.
	pub fn builder() -> ApiConfigBuilder {
		ApiConfigBuilder::default()
	}
}

/// Builder for [`ApiConfig`] values.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
	/// Optional base URL override, as text so parsing errors surface from [`Self::build`].
	pub base_url: Option<String>,
	/// Transport deadlines.
	pub timeouts: TransportTimeouts,
}
impl ApiConfigBuilder {
	/// Overrides the base URL (defaults to [`SPOTIFY_WEB_API_ENDPOINT`]).
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());

		self
	}

	/// Overrides the transport deadlines.
	pub fn timeouts(mut self, timeouts: TransportTimeouts) -> Self {
		self.timeouts = timeouts;

		self
	}

	/// Validates the base URL and produces an [`ApiConfig`].
	pub fn build(self) -> Result<ApiConfig, ConfigError> {
		let raw = self.base_url.as_deref().unwrap_or(SPOTIFY_WEB_API_ENDPOINT);
		let mut base_url =
			Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
			return Err(ConfigError::UnsupportedBaseUrl { url: base_url.into() });
		}
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());

			base_url.set_path(&path);
		}

		Ok(ApiConfig { base_url, timeouts: self.timeouts })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_match_the_public_endpoint() {
		let config = ApiConfig::builder().build().expect("Default configuration should build.");

		assert_eq!(config.base_url.as_str(), SPOTIFY_WEB_API_ENDPOINT);
		assert_eq!(config.timeouts.connect, StdDuration::from_secs(30));
		assert_eq!(config.timeouts.read, StdDuration::from_secs(30));
		assert_eq!(config.timeouts.write, StdDuration::from_secs(30));
		assert_eq!(config.timeouts.total(), StdDuration::from_secs(90));
	}

	#[test]
	fn base_url_gains_a_trailing_slash() {
		let config = ApiConfig::builder()
			.base_url("http://127.0.0.1:8080/v1")
			.build()
			.expect("Loopback base URL should build.");

		assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/v1/");
		assert_eq!(
			config.base_url.join("albums/x").expect("Relative join should succeed.").as_str(),
			"http://127.0.0.1:8080/v1/albums/x"
		);
	}

	#[test]
	fn rejects_unusable_base_urls() {
		let err = ApiConfig::builder()
			.base_url("ftp://example.com/v1/")
			.build()
			.expect_err("Non-HTTP schemes should be rejected.");

		assert!(matches!(err, ConfigError::UnsupportedBaseUrl { .. }));

		let err = ApiConfig::builder()
			.base_url("not a url")
			.build()
			.expect_err("Unparseable URLs should be rejected.");

		assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
	}
}
