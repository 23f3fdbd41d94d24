// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Canonical flattening of property stores into JSON-compatible structures.

use std::fmt;

use serde_json::{Map, Value};

use crate::store::PropertyStore;
use crate::value::PropertyValue;

/// An object capable of flattening itself into a plain mapping for
/// transmission.
///
/// Implementors expose their property store; flattening and JSON emission
/// are provided. Flattening recurses through nested entities and lists
/// with no cycle detection: entity graphs are acyclic by schema design,
/// and a cycle would recurse until the stack overflows.
pub trait Serializable: fmt::Debug {
	/// The property store backing this entity's serializable fields.
	fn store(&self) -> &PropertyStore;

	/// The entity's identifier, if it carries one.
	///
	/// Reads the `"@id"` property; an absent or non-string value yields
	/// `None` rather than an error.
	fn id(&self) -> Option<String> {
		match self.store().get("@id") {
			Some(PropertyValue::Str(id)) => Some(id.clone()),
			_ => None,
		}
	}

	/// Flattens this entity into a plain mapping.
	///
	/// Nested entities are replaced by their own flattened form, lists
	/// are unpacked element-wise (recursively), and nulls are preserved.
	/// The returned map is freshly built on every call and never aliases
	/// the store's internal state, so callers may mutate it freely.
	fn to_map(&self) -> Map<String, Value> {
		flatten_store(self.store())
	}

	/// Serializes this entity to canonical JSON text.
	///
	/// Keys are emitted in lexicographic order at every nesting level,
	/// which keeps output stable for snapshot testing and for downstream
	/// diffing or hashing of payloads.
	fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(&Value::Object(self.to_map()))
	}
}

/// Flattens a property store into a plain mapping.
///
/// Object references recorded alongside the properties are not traversed;
/// only the property map contributes to the output.
pub fn flatten_store(store: &PropertyStore) -> Map<String, Value> {
	store
		.iter()
		.map(|(key, value)| (key.to_string(), flatten_value(value)))
		.collect()
}

fn flatten_value(value: &PropertyValue) -> Value {
	match value {
		PropertyValue::Null => Value::Null,
		PropertyValue::Bool(b) => Value::Bool(*b),
		PropertyValue::Int(i) => Value::Number((*i).into()),
		// Non-finite floats have no JSON representation.
		PropertyValue::Float(f) => serde_json::Number::from_f64(*f)
			.map(Value::Number)
			.unwrap_or(Value::Null),
		PropertyValue::Str(s) => Value::String(s.clone()),
		PropertyValue::List(items) => Value::Array(items.iter().map(flatten_value).collect()),
		PropertyValue::Entity(entity) => Value::Object(entity.to_map()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use std::sync::Arc;

	#[derive(Debug)]
	struct TestEntity {
		store: PropertyStore,
	}

	impl TestEntity {
		fn new() -> Self {
			Self {
				store: PropertyStore::new(),
			}
		}

		fn with_id(id: &str) -> Self {
			let mut entity = Self::new();
			entity.store.set_str("@id", Some(id));
			entity
		}

		fn store_mut(&mut self) -> &mut PropertyStore {
			&mut self.store
		}
	}

	impl Serializable for TestEntity {
		fn store(&self) -> &PropertyStore {
			&self.store
		}
	}

	#[test]
	fn empty_store_flattens_to_empty_map() {
		let entity = TestEntity::new();
		assert!(entity.to_map().is_empty());
		assert_eq!(entity.to_json().unwrap(), "{}");
	}

	#[test]
	fn id_reads_the_at_id_property() {
		assert_eq!(TestEntity::with_id("urn:1").id().as_deref(), Some("urn:1"));
		assert_eq!(TestEntity::new().id(), None);
	}

	#[test]
	fn scalars_and_nulls_pass_through() {
		let mut entity = TestEntity::new();
		entity.store_mut().set_str("name", Some("bob"));
		entity.store_mut().set_int("count", Some(3i64)).unwrap();
		entity.store_mut().set_bool("active", Some(true));
		entity.store_mut().set_str("missing", None::<&str>);

		let map = entity.to_map();
		assert_eq!(map["name"], serde_json::json!("bob"));
		assert_eq!(map["count"], serde_json::json!(3));
		assert_eq!(map["active"], serde_json::json!(true));
		// Explicit null is preserved, not dropped.
		assert_eq!(map["missing"], Value::Null);
		assert_eq!(map.len(), 4);
	}

	#[test]
	fn list_scenario_flattens_in_order() {
		let mut entity = TestEntity::new();
		entity.store_mut().set_str("id", Some("urn:1"));
		entity.store_mut().set_list("members", None);
		entity.store_mut().append("members", "urn:2").unwrap();
		entity.store_mut().append("members", "urn:3").unwrap();

		let map = entity.to_map();
		assert_eq!(
			Value::Object(map),
			serde_json::json!({"id": "urn:1", "members": ["urn:2", "urn:3"]})
		);
	}

	#[test]
	fn nested_entity_is_recursively_flattened() {
		let mut child = TestEntity::with_id("urn:child");
		child.store_mut().set_str("name", Some("leaf"));

		let mut parent = TestEntity::with_id("urn:parent");
		parent.store_mut().set_object("child", PropertyValue::entity(child));

		let map = parent.to_map();
		assert_eq!(
			map["child"],
			serde_json::json!({"@id": "urn:child", "name": "leaf"})
		);
	}

	#[test]
	fn entity_inside_list_flattens_and_null_survives() {
		let child = TestEntity::with_id("urn:child");
		let mut parent = TestEntity::new();
		parent.store_mut().set_list(
			"items",
			Some(vec![PropertyValue::Null, PropertyValue::entity(child)]),
		);

		let map = parent.to_map();
		assert_eq!(
			map["items"],
			serde_json::json!([null, {"@id": "urn:child"}])
		);
	}

	#[test]
	fn nested_lists_unpack_recursively() {
		let mut entity = TestEntity::new();
		entity.store_mut().set_list(
			"matrix",
			Some(vec![
				PropertyValue::List(vec![PropertyValue::Int(1), PropertyValue::Int(2)]),
				PropertyValue::List(vec![PropertyValue::entity(TestEntity::with_id("urn:x"))]),
			]),
		);

		let map = entity.to_map();
		assert_eq!(
			map["matrix"],
			serde_json::json!([[1, 2], [{"@id": "urn:x"}]])
		);
	}

	#[test]
	fn object_references_are_not_serialized() {
		let actor: Arc<dyn Serializable> = Arc::new(TestEntity::with_id("urn:42"));
		let mut event = TestEntity::new();
		event.store_mut().set_reference("actor", Some(actor));

		let map = event.to_map();
		// Only the identifier string appears, not the flattened actor.
		assert_eq!(map["actor"], serde_json::json!("urn:42"));
		assert_eq!(map.len(), 1);
	}

	#[test]
	fn flattening_is_idempotent() {
		let mut entity = TestEntity::with_id("urn:1");
		entity.store_mut().set_list(
			"items",
			Some(vec![PropertyValue::entity(TestEntity::with_id("urn:2"))]),
		);

		assert_eq!(entity.to_map(), entity.to_map());
		assert_eq!(entity.to_json().unwrap(), entity.to_json().unwrap());
	}

	#[test]
	fn returned_map_does_not_alias_store_state() {
		let mut entity = TestEntity::with_id("urn:1");
		entity.store_mut().set_str("name", Some("bob"));

		let mut first = entity.to_map();
		first.insert("name".to_string(), serde_json::json!("mallory"));
		first.insert("injected".to_string(), serde_json::json!(true));

		let second = entity.to_map();
		assert_eq!(second["name"], serde_json::json!("bob"));
		assert!(!second.contains_key("injected"));
	}

	#[test]
	fn json_keys_are_sorted_at_every_level() {
		let mut inner = TestEntity::new();
		inner.store_mut().set_int("b", Some(2i64)).unwrap();
		inner.store_mut().set_str("a", Some("x"));

		let mut entity = TestEntity::new();
		entity.store_mut().set_str("zebra", Some("z"));
		entity.store_mut().set_int("alpha", Some(1i64)).unwrap();
		entity.store_mut().set_object("nested", PropertyValue::entity(inner));

		assert_eq!(
			entity.to_json().unwrap(),
			r#"{"alpha":1,"nested":{"a":"x","b":2},"zebra":"z"}"#
		);
	}

	#[test]
	fn json_round_trips_to_the_plain_structure() {
		let mut entity = TestEntity::with_id("urn:1");
		entity.store_mut().set_float("score", Some(0.5)).unwrap();
		entity.store_mut().set_list(
			"items",
			Some(vec![
				PropertyValue::Null,
				PropertyValue::entity(TestEntity::with_id("urn:2")),
			]),
		);

		let parsed: Value = serde_json::from_str(&entity.to_json().unwrap()).unwrap();
		assert_eq!(parsed, Value::Object(entity.to_map()));
	}

	#[test]
	fn non_finite_floats_flatten_to_null() {
		let mut entity = TestEntity::new();
		entity.store_mut().set_object("nan", PropertyValue::Float(f64::NAN));
		assert_eq!(entity.to_map()["nan"], Value::Null);
		assert_eq!(entity.to_json().unwrap(), r#"{"nan":null}"#);
	}

	proptest! {
		#[test]
		fn json_text_is_independent_of_insertion_order(
			keys in prop::collection::hash_set("[a-z]{1,8}", 1..10),
		) {
			let keys: Vec<String> = keys.into_iter().collect();

			let mut forward = TestEntity::new();
			for (i, key) in keys.iter().enumerate() {
				forward.store_mut().set_int(key.clone(), Some(i as i64)).unwrap();
			}

			let mut backward = TestEntity::new();
			for (i, key) in keys.iter().enumerate().rev() {
				backward.store_mut().set_int(key.clone(), Some(i as i64)).unwrap();
			}

			prop_assert_eq!(forward.to_json().unwrap(), backward.to_json().unwrap());
		}

		#[test]
		fn flattened_keys_match_store_keys(
			keys in prop::collection::hash_set("[a-z]{1,8}", 0..10),
		) {
			let mut entity = TestEntity::new();
			for key in &keys {
				entity.store_mut().set_str(key.clone(), Some("v"));
			}

			let map = entity.to_map();
			prop_assert_eq!(map.len(), keys.len());
			for key in &keys {
				prop_assert!(map.contains_key(key));
			}
		}
	}
}
