//! The ordered name → value result of rendering one object

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping from attribute name to value.
///
/// Entries keep insertion order, which is the serializer's declaration
/// order when produced by a render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderedMapping(Map<String, Value>);

impl RenderedMapping {
	pub fn new() -> Self {
		Self(Map::new())
	}

	/// Insert a value, keeping the position of an existing key
	pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
		self.0.insert(name.into(), value)
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.0.keys().map(String::as_str)
	}

	pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
		self.0.values()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
		self.0.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Consume the mapping into the underlying JSON object map
	pub fn into_map(self) -> Map<String, Value> {
		self.0
	}
}

impl From<RenderedMapping> for Value {
	fn from(mapping: RenderedMapping) -> Self {
		Value::Object(mapping.0)
	}
}

impl From<Map<String, Value>> for RenderedMapping {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

/// # Panics
///
/// Indexing panics when `name` is not in the mapping. Use
/// [`RenderedMapping::get`] when the key may be absent.
impl std::ops::Index<&str> for RenderedMapping {
	type Output = Value;

	fn index(&self, name: &str) -> &Value {
		&self.0[name]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_insertion_order_is_kept() {
		let mut mapping = RenderedMapping::new();
		mapping.insert("z", json!(1));
		mapping.insert("a", json!(2));
		mapping.insert("m", Value::Null);

		assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
		assert_eq!(
			serde_json::to_string(&mapping).unwrap(),
			r#"{"z":1,"a":2,"m":null}"#
		);
	}

	#[test]
	#[should_panic]
	fn test_index_panics_on_missing_key() {
		let mapping = RenderedMapping::new();
		let _ = &mapping["missing"];
	}

	#[test]
	fn test_index_and_get() {
		let mut mapping = RenderedMapping::new();
		mapping.insert("id", json!([1, 2, 3]));

		assert_eq!(mapping["id"], json!([1, 2, 3]));
		assert_eq!(mapping.get("id"), Some(&json!([1, 2, 3])));
		assert!(mapping.get("missing").is_none());
		assert!(mapping.contains("id"));
	}

	#[test]
	fn test_into_value() {
		let mut mapping = RenderedMapping::new();
		mapping.insert("id", json!(7));
		assert_eq!(Value::from(mapping), json!({"id": 7}));
	}
}
