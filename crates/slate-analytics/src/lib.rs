// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rust SDK client types for Slate learning analytics.
//!
//! This crate layers the SDK-facing configuration over the core event
//! model in [`slate_analytics_core`] and re-exports the core surface.
//! The HTTP transport that POSTs serialized payloads lives in its own
//! crate and consumes [`HttpOptions`] from here.
//!
//! # Example
//!
//! ```
//! use slate_analytics::HttpOptions;
//!
//! let options = HttpOptions::new(
//! 	"slate_key_123",
//! 	"https://collector.example.com/v1/events",
//! 	5000,
//! 	5000,
//! 	5000,
//! )?;
//! assert_eq!(options.read_timeout_ms(), 5000);
//! # Ok::<(), slate_analytics::OptionsError>(())
//! ```

pub mod error;
pub mod options;

pub use error::{OptionsError, Result};
pub use options::{HttpOptions, DEFAULT_API_KEY, DEFAULT_HOST, MIN_TIMEOUT_MS};

pub use slate_analytics_core::{
	flatten_store, Action, EntityType, EventType, PropertyError, PropertyStore, PropertyValue,
	Role, Scalar, Serializable, Status, EVENT_CONTEXT,
};
