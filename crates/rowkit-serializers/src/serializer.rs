//! Typed serializer variants and serializer instances

use crate::attributes::Attributes;
use crate::definition::{RenderStrategy, SerializerDefinition};
use crate::error::{InvalidSerializer, Result};
use crate::method_field::MethodFieldRegistry;
use crate::rendered::RenderedMapping;
use crate::resolver::ResolutionChain;
use crate::source::AttributeSource;
use serde_json::Value;
use std::borrow::Cow;

static NO_ATTRIBUTES: Attributes = Attributes::new();

/// A serializer variant known at compile time.
///
/// A variant declares which attributes to extract from its `Object` and may
/// compute some of them itself through method fields. Attributes without a
/// method field are read from the object's own accessors. A variant that
/// declares no attributes renders empty mappings; nothing is inherited.
///
/// # Examples
///
/// ```
/// use rowkit_serializers::{Attributes, MethodFieldRegistry, Serializer};
/// use serde_json::{json, Value};
///
/// struct ItemSerializer;
///
/// impl Serializer for ItemSerializer {
///     type Object = Value;
///
///     fn attributes() -> Attributes {
///         Attributes::from_static(&["id", "computed"])
///     }
///
///     fn method_fields(fields: &mut MethodFieldRegistry<Value>) {
///         fields.register_fn("computed", |item| json!(format!("computed - {}", item["id"])));
///     }
/// }
///
/// let definition = ItemSerializer::definition();
/// let item = json!({"id": 12});
/// let rendered = definition.bind(&item).render().unwrap();
/// assert_eq!(serde_json::to_string(&rendered).unwrap(), r#"{"id":12,"computed":"computed - 12"}"#);
/// ```
pub trait Serializer {
	/// The source object type this variant serializes
	type Object: AttributeSource + ?Sized;

	/// The ordered attribute names this variant extracts
	fn attributes() -> Attributes {
		Attributes::new()
	}

	/// Register attributes this variant computes instead of reading them
	/// from the object
	fn method_fields(_fields: &mut MethodFieldRegistry<Self::Object>) {}

	/// Render one bound instance.
	///
	/// The default resolves each declared attribute in order.
	fn render(serializer: &BoundSerializer<'_, Self::Object>) -> Result<RenderedMapping> {
		serializer.render_attributes()
	}

	/// Name used in diagnostics
	fn name() -> Cow<'static, str> {
		Cow::Borrowed(std::any::type_name::<Self>())
	}

	/// Build the runtime definition for this variant
	fn definition() -> SerializerDefinition<Self::Object>
	where
		Self: Sized + 'static,
		Self::Object: 'static,
	{
		let mut fields = MethodFieldRegistry::new();
		Self::method_fields(&mut fields);
		SerializerDefinition::new(Self::name())
			.with_attribute_list(Self::attributes())
			.with_method_fields(fields)
			.render_with(Self::render)
	}
}

/// A serializer instance wrapping exactly one object.
///
/// Instances are cheap and short-lived: one is created per object, renders
/// it, and is dropped.
#[derive(Debug)]
pub struct BoundSerializer<'a, T: ?Sized> {
	definition: &'a SerializerDefinition<T>,
	object: &'a T,
}

impl<T: ?Sized> Clone for BoundSerializer<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: ?Sized> Copy for BoundSerializer<'_, T> {}

impl<'a, T: AttributeSource + ?Sized> BoundSerializer<'a, T> {
	pub fn new(definition: &'a SerializerDefinition<T>, object: &'a T) -> Self {
		Self { definition, object }
	}

	/// The wrapped object
	pub fn object(&self) -> &'a T {
		self.object
	}

	pub fn definition(&self) -> &'a SerializerDefinition<T> {
		self.definition
	}

	/// The declared attributes (empty when the definition declares none)
	pub fn attributes(&self) -> &'a Attributes {
		self.definition.attributes().unwrap_or(&NO_ATTRIBUTES)
	}

	/// Render the wrapped object using the definition's render strategy
	pub fn render(&self) -> Result<RenderedMapping> {
		match self.definition.render_strategy() {
			Some(RenderStrategy::Attributes) => self.render_attributes(),
			Some(RenderStrategy::Custom(render)) => (**render)(self),
			None => Err(InvalidSerializer::MissingRender.into()),
		}
	}

	/// Resolve every declared attribute, in declaration order.
	///
	/// Each name is looked up in the serializer's method fields first and
	/// the object's accessors second. The first name neither knows aborts
	/// the render with [`SerializerError::UnknownAttribute`](crate::SerializerError::UnknownAttribute).
	pub fn render_attributes(&self) -> Result<RenderedMapping> {
		let attributes = self.attributes();
		tracing::trace!(
			serializer = self.definition.name(),
			attributes = attributes.len(),
			"rendering object"
		);

		let chain = ResolutionChain::new(self.definition.method_fields());
		let mut rendered = RenderedMapping::new();
		for name in attributes {
			let value = chain.resolve_value(self.object, name)?;
			rendered.insert(name, value);
		}
		Ok(rendered)
	}

	/// Resolve a single attribute, declared or not
	pub fn resolve(&self, name: &str) -> Result<Value> {
		ResolutionChain::new(self.definition.method_fields()).resolve_value(self.object, name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SerializerError;
	use rstest::{fixture, rstest};
	use serde_json::json;

	struct ItemSerializer;

	impl Serializer for ItemSerializer {
		type Object = Value;

		fn attributes() -> Attributes {
			Attributes::from_static(&["id", "computed"])
		}

		fn method_fields(fields: &mut MethodFieldRegistry<Value>) {
			fields.register_fn("computed", |item| {
				json!(format!("computed by serializer - {}", item["id"]))
			});
		}
	}

	struct BareSerializer;

	impl Serializer for BareSerializer {
		type Object = Value;
	}

	struct UpperSerializer;

	impl Serializer for UpperSerializer {
		type Object = Value;

		fn attributes() -> Attributes {
			Attributes::from_static(&["name"])
		}

		fn render(serializer: &BoundSerializer<'_, Value>) -> Result<RenderedMapping> {
			let mut rendered = serializer.render_attributes()?;
			let upper = rendered
				.get("name")
				.and_then(Value::as_str)
				.unwrap_or_default()
				.to_uppercase();
			rendered.insert("name", json!(upper));
			Ok(rendered)
		}
	}

	#[fixture]
	fn item() -> Value {
		json!({"id": 1, "computed": "'computed' defined in item"})
	}

	#[rstest]
	fn test_prefers_serializer_implementation(item: Value) {
		let definition = ItemSerializer::definition();
		let values = definition.bind(&item).render().unwrap();
		assert_eq!(values["computed"], json!("computed by serializer - 1"));
	}

	#[rstest]
	fn test_uses_object_when_serializer_does_not_define(item: Value) {
		let definition = ItemSerializer::definition();
		let values = definition.bind(&item).render().unwrap();
		assert_eq!(values["id"], json!(1));
	}

	#[rstest]
	fn test_render_follows_declaration_order(item: Value) {
		let definition = ItemSerializer::definition();
		let values = definition.bind(&item).render().unwrap();
		assert_eq!(values.keys().collect::<Vec<_>>(), vec!["id", "computed"]);
	}

	#[test]
	fn test_missing_attribute_fails() {
		let definition = ItemSerializer::definition();
		let item = json!({"computed": 0});
		let error = definition.bind(&item).render().unwrap_err();
		assert_eq!(error, SerializerError::unknown_attribute("id"));
	}

	#[test]
	fn test_variant_without_declaration_has_no_attributes() {
		assert!(BareSerializer::attributes().is_empty());

		let definition = BareSerializer::definition();
		assert!(definition.validate().is_ok());
		let rendered = definition.bind(&json!({"id": 1})).render().unwrap();
		assert!(rendered.is_empty());
	}

	#[test]
	fn test_custom_render_override() {
		let definition = UpperSerializer::definition();
		let rendered = definition.bind(&json!({"name": "ada"})).render().unwrap();
		assert_eq!(rendered["name"], json!("ADA"));
	}

	#[rstest]
	fn test_resolve_single_attribute(item: Value) {
		let definition = ItemSerializer::definition();
		let serializer = definition.bind(&item);
		assert_eq!(serializer.resolve("id").unwrap(), json!(1));
		assert!(serializer.resolve("nope").is_err());
		assert_eq!(serializer.object(), &item);
	}

	#[test]
	fn test_definition_name_defaults_to_type_name() {
		assert!(ItemSerializer::definition().name().ends_with("ItemSerializer"));
	}

	#[test]
	fn test_render_without_strategy_fails() {
		let definition = SerializerDefinition::<Value>::new("incomplete").with_attributes(["id"]);
		let error = definition.bind(&json!({"id": 1})).render().unwrap_err();
		assert_eq!(
			error,
			SerializerError::InvalidSerializer(InvalidSerializer::MissingRender)
		);
	}
}
