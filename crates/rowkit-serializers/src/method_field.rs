//! SerializerMethodField - Computed attributes defined by a serializer
//!
//! A method field lets a serializer override or derive an attribute value
//! from the wrapped object instead of reading the object's own accessor.
//! Method fields are registered once per serializer variant and take
//! precedence over accessors with the same name.

use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Compute<T> = Arc<dyn Fn(&T) -> Result<Value> + Send + Sync>;

/// A field that gets its value by calling a function on the wrapped object.
///
/// # Examples
///
/// ```
/// use rowkit_serializers::SerializerMethodField;
/// use serde_json::{json, Value};
///
/// let field = SerializerMethodField::new("computed", |object: &Value| {
///     Ok(json!(format!("computed - {}", object["id"])))
/// });
///
/// let value = field.get_value(&json!({"id": 1})).unwrap();
/// assert_eq!(value, json!("computed - 1"));
/// ```
pub struct SerializerMethodField<T: ?Sized> {
	/// Name of the attribute this field provides
	pub name: String,
	compute: Compute<T>,
}

impl<T: ?Sized> SerializerMethodField<T> {
	/// Create a new method field from a fallible computation
	pub fn new<F>(name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&T) -> Result<Value> + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			compute: Arc::new(compute),
		}
	}

	/// Create a method field from an infallible computation
	///
	/// # Examples
	///
	/// ```
	/// use rowkit_serializers::SerializerMethodField;
	/// use serde_json::{json, Value};
	///
	/// let field = SerializerMethodField::value("one", |_: &Value| json!(1));
	/// assert_eq!(field.get_value(&Value::Null).unwrap(), json!(1));
	/// ```
	pub fn value<F>(name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&T) -> Value + Send + Sync + 'static,
	{
		Self::new(name, move |object: &T| Ok(compute(object)))
	}

	/// Compute the field value for `object`
	pub fn get_value(&self, object: &T) -> Result<Value> {
		(self.compute)(object)
	}
}

impl<T: ?Sized> Clone for SerializerMethodField<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			compute: Arc::clone(&self.compute),
		}
	}
}

impl<T: ?Sized> fmt::Debug for SerializerMethodField<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SerializerMethodField")
			.field("name", &self.name)
			.finish_non_exhaustive()
	}
}

/// The method fields of one serializer variant, keyed by attribute name
pub struct MethodFieldRegistry<T: ?Sized> {
	fields: HashMap<String, SerializerMethodField<T>>,
}

impl<T: ?Sized> MethodFieldRegistry<T> {
	/// Create a new method field registry
	///
	/// # Examples
	///
	/// ```
	/// use rowkit_serializers::MethodFieldRegistry;
	/// use serde_json::Value;
	///
	/// let registry = MethodFieldRegistry::<Value>::new();
	/// assert!(registry.is_empty());
	/// ```
	pub fn new() -> Self {
		Self {
			fields: HashMap::new(),
		}
	}

	/// Register a method field, replacing any field with the same name
	pub fn register(&mut self, field: SerializerMethodField<T>) -> &mut Self {
		self.fields.insert(field.name.clone(), field);
		self
	}

	/// Register an infallible computation under `name`
	pub fn register_fn<F>(&mut self, name: impl Into<String>, compute: F) -> &mut Self
	where
		F: Fn(&T) -> Value + Send + Sync + 'static,
	{
		self.register(SerializerMethodField::value(name, compute))
	}

	/// Get a registered method field
	pub fn get(&self, name: &str) -> Option<&SerializerMethodField<T>> {
		self.fields.get(name)
	}

	/// Check if a field is registered
	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Registered field names, in no particular order
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.fields.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl<T: ?Sized> Default for MethodFieldRegistry<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: ?Sized> Clone for MethodFieldRegistry<T> {
	fn clone(&self) -> Self {
		Self {
			fields: self.fields.clone(),
		}
	}
}

impl<T: ?Sized> fmt::Debug for MethodFieldRegistry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<&str> = self.names().collect();
		names.sort_unstable();
		f.debug_struct("MethodFieldRegistry")
			.field("fields", &names)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SerializerError;
	use serde_json::json;

	#[test]
	fn test_method_field_new() {
		let field = SerializerMethodField::new("full_name", |object: &Value| {
			let first = object["first"].as_str().unwrap_or_default();
			let last = object["last"].as_str().unwrap_or_default();
			Ok(json!(format!("{} {}", first, last)))
		});
		assert_eq!(field.name, "full_name");

		let value = field
			.get_value(&json!({"first": "John", "last": "Doe"}))
			.unwrap();
		assert_eq!(value, json!("John Doe"));
	}

	#[test]
	fn test_method_field_error_propagates() {
		let field = SerializerMethodField::new("broken", |_: &Value| {
			Err(SerializerError::unknown_attribute("upstream"))
		});

		let result = field.get_value(&Value::Null);
		assert_eq!(result, Err(SerializerError::unknown_attribute("upstream")));
	}

	#[test]
	fn test_method_field_registry() {
		let mut registry = MethodFieldRegistry::<Value>::new();
		registry
			.register_fn("full_name", |_| json!("x"))
			.register_fn("email", |_| json!("y"));

		assert!(registry.contains("full_name"));
		assert!(registry.contains("email"));
		assert!(!registry.contains("nonexistent"));
		assert_eq!(registry.len(), 2);

		let retrieved = registry.get("full_name").unwrap();
		assert_eq!(retrieved.name, "full_name");
	}

	#[test]
	fn test_register_replaces_same_name() {
		let mut registry = MethodFieldRegistry::<Value>::new();
		registry.register_fn("value", |_| json!(1));
		registry.register_fn("value", |_| json!(2));

		assert_eq!(registry.len(), 1);
		let value = registry.get("value").unwrap().get_value(&Value::Null);
		assert_eq!(value.unwrap(), json!(2));
	}

	#[test]
	fn test_method_field_with_complex_value() {
		let field = SerializerMethodField::value("user_stats", |_: &Value| {
			json!({
				"post_count": 42,
				"follower_count": 128,
				"engagement_rate": 0.15
			})
		});
		let value = field.get_value(&Value::Null).unwrap();

		assert_eq!(value["post_count"], 42);
		assert_eq!(value["follower_count"], 128);
	}
}
