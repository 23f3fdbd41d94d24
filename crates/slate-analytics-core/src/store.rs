// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The typed property store backing every serializable entity.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{PropertyError, Result};
use crate::serialize::Serializable;
use crate::value::{PropertyValue, Scalar};

/// The private key-value state backing one entity's serializable fields.
///
/// Two parallel maps: `properties` holds everything the serializer emits,
/// and `object_refs` holds the live entities backing reference-typed keys.
/// The reference map exists for lookup by owning code only and is never
/// traversed during serialization, so reference-typed keys contribute just
/// their identifier string to the payload.
///
/// Stores are populated during the owning entity's construction and read
/// afterwards. Callers must not mutate a store while a serialization pass
/// is flattening the same entity.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
	properties: BTreeMap<String, PropertyValue>,
	object_refs: BTreeMap<String, Arc<dyn Serializable>>,
}

impl PropertyStore {
	/// Creates an empty property store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a string-typed property. `None` stores null.
	pub fn set_str(&mut self, key: impl Into<String>, value: Option<impl Into<Scalar>>) {
		let value = match value {
			Some(v) => PropertyValue::Str(v.into().into_string()),
			None => PropertyValue::Null,
		};
		self.properties.insert(key.into(), value);
	}

	/// Sets an integer-typed property. `None` stores null.
	///
	/// Input is coerced with integer rules; a failed coercion propagates
	/// and leaves the store unchanged.
	pub fn set_int(&mut self, key: impl Into<String>, value: Option<impl Into<Scalar>>) -> Result<()> {
		let value = match value {
			Some(v) => PropertyValue::Int(v.into().into_int()?),
			None => PropertyValue::Null,
		};
		self.properties.insert(key.into(), value);
		Ok(())
	}

	/// Sets a float-typed property. `None` stores null.
	///
	/// Input is coerced with float rules; a failed coercion propagates
	/// and leaves the store unchanged.
	pub fn set_float(
		&mut self,
		key: impl Into<String>,
		value: Option<impl Into<Scalar>>,
	) -> Result<()> {
		let value = match value {
			Some(v) => PropertyValue::Float(v.into().into_float()?),
			None => PropertyValue::Null,
		};
		self.properties.insert(key.into(), value);
		Ok(())
	}

	/// Sets a bool-typed property. `None` stores null.
	pub fn set_bool(&mut self, key: impl Into<String>, value: Option<impl Into<Scalar>>) {
		let value = match value {
			Some(v) => PropertyValue::Bool(v.into().into_bool()),
			None => PropertyValue::Null,
		};
		self.properties.insert(key.into(), value);
	}

	/// Links a foreign entity under `key`.
	///
	/// Stores the entity's identifier (or null when the entity is absent
	/// or carries no id) as a string property, and records the entity
	/// itself as the key's object reference. This embeds the link without
	/// embedding the whole nested structure in the payload.
	pub fn set_reference(&mut self, key: impl Into<String>, entity: Option<Arc<dyn Serializable>>) {
		let key = key.into();
		match entity {
			Some(entity) => {
				match entity.id() {
					Some(id) => self.set_str(key.clone(), Some(id)),
					None => self.set_str(key.clone(), None::<Scalar>),
				}
				self.object_refs.insert(key, entity);
			}
			None => {
				self.set_str(key.clone(), None::<Scalar>);
				self.object_refs.remove(&key);
			}
		}
	}

	/// Sets a property to an arbitrary value, with no coercion.
	///
	/// Use this for nested entities, pre-built lists, or anything the
	/// caller has already shaped.
	pub fn set_object(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
		self.properties.insert(key.into(), value.into());
	}

	/// Sets a list-typed property. `None` stores an empty list.
	///
	/// This establishes the key as list-typed for later [`append`] calls.
	///
	/// [`append`]: PropertyStore::append
	pub fn set_list(&mut self, key: impl Into<String>, value: Option<Vec<PropertyValue>>) {
		self.properties
			.insert(key.into(), PropertyValue::List(value.unwrap_or_default()));
	}

	/// Appends a value to a list-typed property.
	///
	/// An absent or null key is initialized as a one-element list. A key
	/// holding any other kind fails with [`PropertyError::NotAList`]; the
	/// caller declared that key as something other than a list.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Result<()> {
		let key = key.into();
		let value = value.into();
		match self.properties.get_mut(&key) {
			Some(PropertyValue::List(items)) => {
				items.push(value);
				Ok(())
			}
			Some(slot) if slot.is_null() => {
				*slot = PropertyValue::List(vec![value]);
				Ok(())
			}
			Some(_) => Err(PropertyError::NotAList { key }),
			None => {
				self.properties.insert(key, PropertyValue::List(vec![value]));
				Ok(())
			}
		}
	}

	/// Gets a stored property value, or `None` if the key is absent.
	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.properties.get(key)
	}

	/// Gets the object reference recorded for `key`, or `None`.
	pub fn reference(&self, key: &str) -> Option<&Arc<dyn Serializable>> {
		self.object_refs.get(key)
	}

	/// Iterates over the stored properties.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
		self.properties.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns the number of stored properties.
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	/// Returns true if no properties are stored.
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}
