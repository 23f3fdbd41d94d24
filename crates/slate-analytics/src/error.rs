// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the analytics SDK.

use thiserror::Error;

/// Configuration errors for the analytics SDK.
#[derive(Debug, Error)]
pub enum OptionsError {
	/// API key is missing or empty.
	#[error("API key must be a non-empty string")]
	EmptyApiKey,

	/// Host is not a valid absolute URL.
	#[error("invalid host URL: {0}")]
	InvalidHost(#[from] url::ParseError),

	/// A timeout was set below the 1000 ms floor.
	#[error("timeout must be at least 1000 ms, got {value}")]
	TimeoutTooSmall { value: u64 },
}

/// Result type alias for SDK configuration operations.
pub type Result<T> = std::result::Result<T, OptionsError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timeout_message_carries_the_offending_value() {
		let err = OptionsError::TimeoutTooSmall { value: 500 };
		assert_eq!(err.to_string(), "timeout must be at least 1000 ms, got 500");
	}

	#[test]
	fn url_parse_errors_convert() {
		let parse_err = url::Url::parse("not a url").unwrap_err();
		let err: OptionsError = parse_err.into();
		assert!(matches!(err, OptionsError::InvalidHost(_)));
	}
}
