//! Accessor lookup on source objects
//!
//! A source object is anything that can answer "what is your value for the
//! attribute named `x`?". Serializers fall back to this lookup for every
//! attribute they do not compute themselves.

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// Named accessors exposed by a source object.
///
/// `Ok(None)` means the object has no accessor with that name, which is
/// distinct from an accessor that returns `null`.
pub trait AttributeSource {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>>;
}

impl AttributeSource for Value {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		match self {
			Value::Object(map) => map.read_attribute(name),
			_ => Ok(None),
		}
	}
}

impl AttributeSource for Map<String, Value> {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		Ok(self.get(name).cloned())
	}
}

impl<V: Serialize, S: std::hash::BuildHasher> AttributeSource for HashMap<String, V, S> {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		self.get(name).map(to_value).transpose()
	}
}

impl<V: Serialize> AttributeSource for BTreeMap<String, V> {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		self.get(name).map(to_value).transpose()
	}
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		(**self).read_attribute(name)
	}
}

impl<T: AttributeSource + ?Sized> AttributeSource for Box<T> {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		(**self).read_attribute(name)
	}
}

impl<T: AttributeSource + ?Sized> AttributeSource for Rc<T> {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		(**self).read_attribute(name)
	}
}

impl<T: AttributeSource + ?Sized> AttributeSource for Arc<T> {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		(**self).read_attribute(name)
	}
}

/// Convert any serializable value into a JSON value
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
	Ok(serde_json::to_value(value)?)
}

/// Exposes the fields of a `Serialize` type as accessors.
///
/// The object is converted to JSON once, at construction. Types that do not
/// serialize to a JSON object expose no accessors.
///
/// # Examples
///
/// ```
/// use rowkit_serializers::{AttributeSource, SerdeObject};
/// use serde::Serialize;
/// use serde_json::json;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = SerdeObject::new(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(point.read_attribute("y").unwrap(), Some(json!(2)));
/// assert_eq!(point.read_attribute("z").unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SerdeObject {
	fields: Value,
}

impl SerdeObject {
	pub fn new<T: Serialize + ?Sized>(object: &T) -> Result<Self> {
		Ok(Self {
			fields: to_value(object)?,
		})
	}

	/// The JSON form of the wrapped object
	pub fn as_value(&self) -> &Value {
		&self.fields
	}
}

impl AttributeSource for SerdeObject {
	fn read_attribute(&self, name: &str) -> Result<Option<Value>> {
		self.fields.read_attribute(name)
	}
}

/// Implement [`AttributeSource`] for a struct by listing its fields.
///
/// Each listed field must implement `serde::Serialize`. Zero-argument
/// methods may be exposed as accessors after a `;`.
///
/// # Examples
///
/// ```
/// use rowkit_serializers::{attribute_source, AttributeSource};
/// use serde_json::json;
///
/// struct Item { id: u32, tags: Vec<String> }
///
/// impl Item {
///     fn tag_count(&self) -> usize { self.tags.len() }
/// }
///
/// attribute_source!(Item { id, tags; tag_count() });
///
/// let item = Item { id: 3, tags: vec!["a".into()] };
/// assert_eq!(item.read_attribute("id").unwrap(), Some(json!(3)));
/// assert_eq!(item.read_attribute("tags").unwrap(), Some(json!(["a"])));
/// assert_eq!(item.read_attribute("tag_count").unwrap(), Some(json!(1)));
/// assert_eq!(item.read_attribute("name").unwrap(), None);
/// ```
#[macro_export]
macro_rules! attribute_source {
	($ty:ty { $($field:ident),* $(,)? }) => {
		$crate::attribute_source!($ty { $($field),* ; });
	};
	($ty:ty { $($field:ident),* ; $($method:ident ()),* $(,)? }) => {
		impl $crate::AttributeSource for $ty {
			fn read_attribute(
				&self,
				name: &str,
			) -> $crate::Result<::core::option::Option<$crate::Value>> {
				match name {
					$(stringify!($field) => $crate::to_value(&self.$field).map(::core::option::Option::Some),)*
					$(stringify!($method) => $crate::to_value(&self.$method()).map(::core::option::Option::Some),)*
					_ => ::core::result::Result::Ok(::core::option::Option::None),
				}
			}
		}
	};
}
