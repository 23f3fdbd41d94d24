// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The value model for serializable properties.
//!
//! [`Scalar`] is the loose caller-supplied input accepted by the typed
//! setters; [`PropertyValue`] is what a property store actually holds:
//! null, a primitive, an ordered list, or a nested entity.

use std::sync::Arc;

use crate::error::PropertyError;
use crate::serialize::Serializable;

/// A caller-supplied scalar, prior to coercion into a declared kind.
///
/// Each typed setter normalizes a `Scalar` with the coercion rules of its
/// declared kind; only numeric coercions can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	Str(String),
	Int(i64),
	Float(f64),
	Bool(bool),
}

impl Scalar {
	/// Coerces into a string. Never fails.
	pub fn into_string(self) -> String {
		match self {
			Scalar::Str(s) => s,
			Scalar::Int(i) => i.to_string(),
			Scalar::Float(f) => f.to_string(),
			Scalar::Bool(b) => b.to_string(),
		}
	}

	/// Coerces into an integer.
	///
	/// Floats truncate toward zero, numeric strings parse, bools map to
	/// 0/1. Non-numeric strings fail with [`PropertyError::Coercion`].
	pub fn into_int(self) -> Result<i64, PropertyError> {
		match self {
			Scalar::Int(i) => Ok(i),
			Scalar::Float(f) => Ok(f as i64),
			Scalar::Bool(b) => Ok(i64::from(b)),
			Scalar::Str(s) => s.trim().parse::<i64>().map_err(|_| PropertyError::Coercion {
				kind: "int",
				value: s,
			}),
		}
	}

	/// Coerces into a float.
	///
	/// Integers widen, numeric strings parse, bools map to 0.0/1.0.
	/// Non-numeric strings fail with [`PropertyError::Coercion`].
	pub fn into_float(self) -> Result<f64, PropertyError> {
		match self {
			Scalar::Float(f) => Ok(f),
			Scalar::Int(i) => Ok(i as f64),
			Scalar::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
			Scalar::Str(s) => s.trim().parse::<f64>().map_err(|_| PropertyError::Coercion {
				kind: "float",
				value: s,
			}),
		}
	}

	/// Coerces into a bool: non-zero numbers and non-empty strings are
	/// true. Never fails.
	pub fn into_bool(self) -> bool {
		match self {
			Scalar::Bool(b) => b,
			Scalar::Int(i) => i != 0,
			Scalar::Float(f) => f != 0.0,
			Scalar::Str(s) => !s.is_empty(),
		}
	}
}

impl From<&str> for Scalar {
	fn from(value: &str) -> Self {
		Scalar::Str(value.to_string())
	}
}

impl From<String> for Scalar {
	fn from(value: String) -> Self {
		Scalar::Str(value)
	}
}

impl From<i64> for Scalar {
	fn from(value: i64) -> Self {
		Scalar::Int(value)
	}
}

impl From<i32> for Scalar {
	fn from(value: i32) -> Self {
		Scalar::Int(i64::from(value))
	}
}

impl From<u32> for Scalar {
	fn from(value: u32) -> Self {
		Scalar::Int(i64::from(value))
	}
}

impl From<f64> for Scalar {
	fn from(value: f64) -> Self {
		Scalar::Float(value)
	}
}

impl From<f32> for Scalar {
	fn from(value: f32) -> Self {
		Scalar::Float(f64::from(value))
	}
}

impl From<bool> for Scalar {
	fn from(value: bool) -> Self {
		Scalar::Bool(value)
	}
}

/// A value stored under a property key.
///
/// Lists may hold any mix of values, including nested lists and entities.
/// Nested entities are shared with the caller through `Arc`; the store
/// never takes sole ownership of them.
#[derive(Debug, Clone)]
pub enum PropertyValue {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
	List(Vec<PropertyValue>),
	Entity(Arc<dyn Serializable>),
}

impl PropertyValue {
	/// Wraps a concrete entity as a nested entity value.
	pub fn entity<E: Serializable + 'static>(entity: E) -> Self {
		PropertyValue::Entity(Arc::new(entity))
	}

	/// Returns true if this value is a list.
	pub fn is_list(&self) -> bool {
		matches!(self, PropertyValue::List(_))
	}

	/// Returns true if this value is null.
	pub fn is_null(&self) -> bool {
		matches!(self, PropertyValue::Null)
	}
}

impl PartialEq for PropertyValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(PropertyValue::Null, PropertyValue::Null) => true,
			(PropertyValue::Bool(a), PropertyValue::Bool(b)) => a == b,
			(PropertyValue::Int(a), PropertyValue::Int(b)) => a == b,
			(PropertyValue::Float(a), PropertyValue::Float(b)) => a == b,
			(PropertyValue::Str(a), PropertyValue::Str(b)) => a == b,
			(PropertyValue::List(a), PropertyValue::List(b)) => a == b,
			// Entities compare by identity, not by flattened content.
			(PropertyValue::Entity(a), PropertyValue::Entity(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<Scalar> for PropertyValue {
	fn from(value: Scalar) -> Self {
		match value {
			Scalar::Str(s) => PropertyValue::Str(s),
			Scalar::Int(i) => PropertyValue::Int(i),
			Scalar::Float(f) => PropertyValue::Float(f),
			Scalar::Bool(b) => PropertyValue::Bool(b),
		}
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		PropertyValue::Str(value.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		PropertyValue::Str(value)
	}
}

impl From<i64> for PropertyValue {
	fn from(value: i64) -> Self {
		PropertyValue::Int(value)
	}
}

impl From<i32> for PropertyValue {
	fn from(value: i32) -> Self {
		PropertyValue::Int(i64::from(value))
	}
}

impl From<f64> for PropertyValue {
	fn from(value: f64) -> Self {
		PropertyValue::Float(value)
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		PropertyValue::Bool(value)
	}
}

impl From<Vec<PropertyValue>> for PropertyValue {
	fn from(value: Vec<PropertyValue>) -> Self {
		PropertyValue::List(value)
	}
}

impl From<Arc<dyn Serializable>> for PropertyValue {
	fn from(value: Arc<dyn Serializable>) -> Self {
		PropertyValue::Entity(value)
	}
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => v.into(),
			None => PropertyValue::Null,
		}
	}
}
