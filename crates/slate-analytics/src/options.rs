// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP transport configuration for the analytics SDK.

use tracing::debug;
use url::Url;

use crate::error::{OptionsError, Result};

/// Minimum accepted timeout, in milliseconds.
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Placeholder API key used until a real key is configured.
pub const DEFAULT_API_KEY: &str = "SlateKey";

/// Default collector endpoint, useful for smoke-testing a sensor.
pub const DEFAULT_HOST: &str = "http://httpbin.org/post";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration consumed by the HTTP transport: where payloads go, how
/// requests authenticate, and how long to wait.
///
/// Every setter validates: the API key must be non-empty, the host must
/// parse as an absolute URL, and each timeout has a 1000 ms floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
	api_key: String,
	host: Url,
	connect_timeout_ms: u64,
	read_timeout_ms: u64,
	connection_request_timeout_ms: u64,
}

impl HttpOptions {
	/// Creates options with every field validated.
	pub fn new(
		api_key: impl Into<String>,
		host: &str,
		connect_timeout_ms: u64,
		read_timeout_ms: u64,
		connection_request_timeout_ms: u64,
	) -> Result<Self> {
		let mut options = Self::default();
		options.set_api_key(api_key)?;
		options.set_host(host)?;
		options.set_connect_timeout_ms(connect_timeout_ms)?;
		options.set_read_timeout_ms(read_timeout_ms)?;
		options.set_connection_request_timeout_ms(connection_request_timeout_ms)?;
		debug!(host = %options.host, "analytics transport configured");
		Ok(options)
	}

	/// The API key sent with every request.
	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	/// The collector endpoint payloads are POSTed to.
	pub fn host(&self) -> &Url {
		&self.host
	}

	/// Connection timeout, in milliseconds.
	pub fn connect_timeout_ms(&self) -> u64 {
		self.connect_timeout_ms
	}

	/// Socket read timeout, in milliseconds.
	pub fn read_timeout_ms(&self) -> u64 {
		self.read_timeout_ms
	}

	/// Connection-request (pool checkout) timeout, in milliseconds.
	pub fn connection_request_timeout_ms(&self) -> u64 {
		self.connection_request_timeout_ms
	}

	/// Sets the API key. Empty keys are rejected.
	pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<()> {
		let api_key = api_key.into();
		if api_key.is_empty() {
			return Err(OptionsError::EmptyApiKey);
		}
		self.api_key = api_key;
		Ok(())
	}

	/// Sets the collector endpoint. The URL parser's own error propagates
	/// on malformed input.
	pub fn set_host(&mut self, host: &str) -> Result<()> {
		self.host = Url::parse(host)?;
		Ok(())
	}

	/// Sets the connection timeout, in milliseconds.
	pub fn set_connect_timeout_ms(&mut self, value: u64) -> Result<()> {
		self.connect_timeout_ms = check_timeout(value)?;
		Ok(())
	}

	/// Sets the socket read timeout, in milliseconds.
	pub fn set_read_timeout_ms(&mut self, value: u64) -> Result<()> {
		self.read_timeout_ms = check_timeout(value)?;
		Ok(())
	}

	/// Sets the connection-request timeout, in milliseconds.
	pub fn set_connection_request_timeout_ms(&mut self, value: u64) -> Result<()> {
		self.connection_request_timeout_ms = check_timeout(value)?;
		Ok(())
	}
}

impl Default for HttpOptions {
	fn default() -> Self {
		Self {
			api_key: DEFAULT_API_KEY.to_string(),
			host: Url::parse(DEFAULT_HOST).expect("default host URL is valid"),
			connect_timeout_ms: DEFAULT_TIMEOUT_MS,
			read_timeout_ms: DEFAULT_TIMEOUT_MS,
			connection_request_timeout_ms: DEFAULT_TIMEOUT_MS,
		}
	}
}

fn check_timeout(value: u64) -> Result<u64> {
	if value < MIN_TIMEOUT_MS {
		return Err(OptionsError::TimeoutTooSmall { value });
	}
	Ok(value)
}
