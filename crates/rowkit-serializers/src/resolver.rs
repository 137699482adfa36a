//! Attribute resolution strategies
//!
//! Every attribute is resolved by trying the serializer's own method fields
//! first and the object's accessors second. The first strategy that knows
//! the name wins; if neither does, resolution fails with
//! [`SerializerError::UnknownAttribute`].

use crate::error::{Result, SerializerError};
use crate::method_field::MethodFieldRegistry;
use crate::source::AttributeSource;
use serde_json::Value;

/// One way of producing a value for an attribute name.
///
/// `Ok(None)` means this strategy does not know the name and the next one
/// should be tried.
pub trait Resolve<T: ?Sized> {
	fn resolve(&self, object: &T, name: &str) -> Result<Option<Value>>;
}

/// Resolves names registered as method fields on the serializer
#[derive(Debug)]
pub struct MethodOverride<'r, T: ?Sized> {
	registry: &'r MethodFieldRegistry<T>,
}

impl<'r, T: ?Sized> MethodOverride<'r, T> {
	pub fn new(registry: &'r MethodFieldRegistry<T>) -> Self {
		Self { registry }
	}
}

impl<T: ?Sized> Resolve<T> for MethodOverride<'_, T> {
	fn resolve(&self, object: &T, name: &str) -> Result<Option<Value>> {
		self.registry
			.get(name)
			.map(|field| field.get_value(object))
			.transpose()
	}
}

/// Resolves names through the object's own accessors
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectAccessor;

impl<T: AttributeSource + ?Sized> Resolve<T> for ObjectAccessor {
	fn resolve(&self, object: &T, name: &str) -> Result<Option<Value>> {
		object.read_attribute(name)
	}
}

/// Serializer override, then object accessor.
///
/// # Examples
///
/// ```
/// use rowkit_serializers::{MethodFieldRegistry, ResolutionChain};
/// use serde_json::json;
///
/// let mut registry = MethodFieldRegistry::new();
/// registry.register_fn("computed", |_: &serde_json::Value| json!("from serializer"));
///
/// let chain = ResolutionChain::new(&registry);
/// let object = json!({"id": 1, "computed": "from object"});
///
/// assert_eq!(chain.resolve_value(&object, "computed").unwrap(), json!("from serializer"));
/// assert_eq!(chain.resolve_value(&object, "id").unwrap(), json!(1));
/// assert!(chain.resolve_value(&object, "missing").is_err());
/// ```
#[derive(Debug)]
pub struct ResolutionChain<'r, T: ?Sized> {
	method_override: MethodOverride<'r, T>,
	accessor: ObjectAccessor,
}

impl<'r, T: AttributeSource + ?Sized> ResolutionChain<'r, T> {
	pub fn new(registry: &'r MethodFieldRegistry<T>) -> Self {
		Self {
			method_override: MethodOverride::new(registry),
			accessor: ObjectAccessor,
		}
	}

	/// Resolve `name`, failing when no strategy knows it
	pub fn resolve_value(&self, object: &T, name: &str) -> Result<Value> {
		self.resolve(object, name)?
			.ok_or_else(|| SerializerError::unknown_attribute(name))
	}
}

impl<T: AttributeSource + ?Sized> Resolve<T> for ResolutionChain<'_, T> {
	fn resolve(&self, object: &T, name: &str) -> Result<Option<Value>> {
		if let Some(value) = self.method_override.resolve(object, name)? {
			tracing::trace!(attribute = name, "resolved by serializer method field");
			return Ok(Some(value));
		}
		let value = self.accessor.resolve(object, name)?;
		if value.is_some() {
			tracing::trace!(attribute = name, "resolved by object accessor");
		}
		Ok(value)
	}
}
