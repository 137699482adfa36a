//! Serializer definitions
//!
//! A [`SerializerDefinition`] is the runtime description of one serializer
//! variant: its declared attributes, its method fields and how an instance
//! renders. Typed [`Serializer`](crate::Serializer) implementations produce
//! one through [`Serializer::definition`](crate::Serializer::definition);
//! definitions can also be assembled directly, for example from settings.

use crate::attributes::Attributes;
use crate::error::{InvalidSerializer, Result};
use crate::method_field::{MethodFieldRegistry, SerializerMethodField};
use crate::rendered::RenderedMapping;
use crate::serializer::{BoundSerializer, Serializer};
use crate::source::AttributeSource;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type RenderFn<T> = Arc<dyn Fn(&BoundSerializer<'_, T>) -> Result<RenderedMapping> + Send + Sync>;

/// How a bound serializer turns its object into a rendered mapping
pub enum RenderStrategy<T: ?Sized> {
	/// Resolve every declared attribute, serializer first then object
	Attributes,
	/// A custom render function
	Custom(RenderFn<T>),
}

impl<T: ?Sized> Clone for RenderStrategy<T> {
	fn clone(&self) -> Self {
		match self {
			RenderStrategy::Attributes => RenderStrategy::Attributes,
			RenderStrategy::Custom(render) => RenderStrategy::Custom(Arc::clone(render)),
		}
	}
}

impl<T: ?Sized> fmt::Debug for RenderStrategy<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RenderStrategy::Attributes => f.write_str("Attributes"),
			RenderStrategy::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

/// The capabilities of one serializer variant.
///
/// Both capabilities are optional here so that incomplete definitions can be
/// detected: [`validate`](Self::validate) rejects a definition with no
/// attribute list or no render strategy.
///
/// # Examples
///
/// ```
/// use rowkit_serializers::SerializerDefinition;
/// use serde_json::{json, Value};
///
/// let definition = SerializerDefinition::<Value>::new("item")
///     .with_attributes(["id", "computed"])
///     .method("computed", |item| json!(format!("computed - {}", item["id"])))
///     .with_default_render();
/// definition.validate().unwrap();
///
/// let item = json!({"id": 2});
/// let rendered = definition.bind(&item).render().unwrap();
/// assert_eq!(rendered.get("computed"), Some(&json!("computed - 2")));
/// ```
pub struct SerializerDefinition<T: ?Sized> {
	name: Cow<'static, str>,
	attributes: Option<Attributes>,
	method_fields: MethodFieldRegistry<T>,
	render: Option<RenderStrategy<T>>,
}

impl<T: ?Sized> SerializerDefinition<T> {
	/// Create a definition with no capabilities
	pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			attributes: None,
			method_fields: MethodFieldRegistry::new(),
			render: None,
		}
	}

	/// Create a definition with `attributes` and the standard render strategy
	pub fn standard<I, N>(name: impl Into<Cow<'static, str>>, attributes: I) -> Self
	where
		I: IntoIterator<Item = N>,
		N: Into<Cow<'static, str>>,
	{
		Self::new(name)
			.with_attributes(attributes)
			.with_default_render()
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Set the attribute list, replacing any previous one
	pub fn with_attributes<I, N>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = N>,
		N: Into<Cow<'static, str>>,
	{
		self.attributes = Some(names.into_iter().collect());
		self
	}

	/// Set an already-built attribute list
	pub fn with_attribute_list(mut self, attributes: Attributes) -> Self {
		self.attributes = Some(attributes);
		self
	}

	/// Declare attribute names on an existing definition.
	///
	/// Follows [`Attributes::declare`]: non-empty `names` replace the list,
	/// empty `names` read it back.
	pub fn declare_attributes<I, N>(&mut self, names: I) -> &Attributes
	where
		I: IntoIterator<Item = N>,
		N: Into<Cow<'static, str>>,
	{
		self.attributes
			.get_or_insert_with(Attributes::new)
			.declare(names)
	}

	/// The declared attributes, if this definition declares any
	pub fn attributes(&self) -> Option<&Attributes> {
		self.attributes.as_ref()
	}

	/// Register an infallible method field
	pub fn method<F>(mut self, name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&T) -> Value + Send + Sync + 'static,
	{
		self.method_fields.register_fn(name, compute);
		self
	}

	/// Register a method field
	pub fn with_method_field(mut self, field: SerializerMethodField<T>) -> Self {
		self.method_fields.register(field);
		self
	}

	/// Replace the method field registry
	pub fn with_method_fields(mut self, method_fields: MethodFieldRegistry<T>) -> Self {
		self.method_fields = method_fields;
		self
	}

	pub fn method_fields(&self) -> &MethodFieldRegistry<T> {
		&self.method_fields
	}

	/// Render instances by resolving each declared attribute
	pub fn with_default_render(mut self) -> Self {
		self.render = Some(RenderStrategy::Attributes);
		self
	}

	/// Render instances with a custom function
	pub fn render_with<F>(mut self, render: F) -> Self
	where
		F: Fn(&BoundSerializer<'_, T>) -> Result<RenderedMapping> + Send + Sync + 'static,
	{
		self.render = Some(RenderStrategy::Custom(Arc::new(render)));
		self
	}

	pub fn render_strategy(&self) -> Option<&RenderStrategy<T>> {
		self.render.as_ref()
	}

	/// Check that both capabilities are present.
	///
	/// The attribute list is checked before the render strategy.
	pub fn validate(&self) -> Result<()> {
		if self.attributes.is_none() {
			return Err(InvalidSerializer::MissingAttributes.into());
		}
		if self.render.is_none() {
			return Err(InvalidSerializer::MissingRender.into());
		}
		Ok(())
	}

	/// Wrap `object` in a serializer instance
	pub fn bind<'a>(&'a self, object: &'a T) -> BoundSerializer<'a, T>
	where
		T: AttributeSource,
	{
		BoundSerializer::new(self, object)
	}
}

impl<T: ?Sized> Clone for SerializerDefinition<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			attributes: self.attributes.clone(),
			method_fields: self.method_fields.clone(),
			render: self.render.clone(),
		}
	}
}

impl<T: ?Sized> fmt::Debug for SerializerDefinition<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SerializerDefinition")
			.field("name", &self.name)
			.field("attributes", &self.attributes)
			.field("method_fields", &self.method_fields)
			.field("render", &self.render)
			.finish()
	}
}

/// Anything that can be used as a collection's serializer
pub trait SerializerType<T: ?Sized> {
	fn into_definition(self) -> SerializerDefinition<T>;
}

impl<T: ?Sized> SerializerType<T> for SerializerDefinition<T> {
	fn into_definition(self) -> SerializerDefinition<T> {
		self
	}
}

impl<S> SerializerType<S::Object> for S
where
	S: Serializer + 'static,
	S::Object: 'static,
{
	fn into_definition(self) -> SerializerDefinition<S::Object> {
		S::definition()
	}
}
