// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the analytics core.

use thiserror::Error;

/// Errors raised by property-store operations.
#[derive(Debug, Error)]
pub enum PropertyError {
	/// A scalar setter could not convert caller input to its declared kind.
	#[error("cannot coerce `{value}` into {kind}")]
	Coercion { kind: &'static str, value: String },

	/// An append targeted a key whose existing value is not a list.
	#[error("attempt to append to non-list property `{key}`")]
	NotAList { key: String },
}

/// Result type alias for property-store operations.
pub type Result<T> = std::result::Result<T, PropertyError>;
