// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Slate learning-analytics event model.
//!
//! Entities declare typed properties and nested object references in a
//! [`PropertyStore`], then flatten themselves through the [`Serializable`]
//! trait into a canonical, sorted, JSON-compatible representation.
//!
//! # Architecture
//!
//! - `value` - the storable value model and primitive coercion rules
//! - `store` - the typed property store with object-reference bookkeeping
//! - `serialize` - recursive flattening and canonical JSON emission
//! - `vocab` - the closed vocabularies of the event schema
//! - `error` - the property error taxonomy
//!
//! # Example
//!
//! ```
//! use slate_analytics_core::{PropertyStore, Serializable};
//!
//! #[derive(Debug)]
//! struct Session {
//! 	store: PropertyStore,
//! }
//!
//! impl Serializable for Session {
//! 	fn store(&self) -> &PropertyStore {
//! 		&self.store
//! 	}
//! }
//!
//! let mut store = PropertyStore::new();
//! store.set_str("@id", Some("urn:session:1"));
//! store.set_list("members", None);
//! store.append("members", "urn:user:2")?;
//!
//! let session = Session { store };
//! assert_eq!(
//! 	session.to_json().unwrap(),
//! 	r#"{"@id":"urn:session:1","members":["urn:user:2"]}"#
//! );
//! # Ok::<(), slate_analytics_core::PropertyError>(())
//! ```

pub mod error;
pub mod serialize;
pub mod store;
pub mod value;
pub mod vocab;

pub use error::{PropertyError, Result};
pub use serialize::{flatten_store, Serializable};
pub use store::PropertyStore;
pub use value::{PropertyValue, Scalar};
pub use vocab::{Action, EntityType, EventType, Role, Status, EVENT_CONTEXT};
