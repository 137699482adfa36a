//! Collections bind a set of items to a serializer

use rowkit_renderers::{CsvRenderer, JsonRenderer, Renderer, RendererOptions};
use rowkit_serializers::{
	AttributeSource, Attributes, RenderedMapping, Result, SerializerDefinition, SerializerType,
};
use serde_json::Value;

use crate::items::json_items;

/// A sequence of items and the serializer used to render them.
///
/// The serializer is validated once, when the collection is built, and
/// never changes afterwards. Items can be replaced at any time; every
/// render works on the current items.
///
/// # Examples
///
/// ```
/// use rowkit_collection::Collection;
/// use rowkit_serializers::SerializerDefinition;
/// use serde_json::{json, Value};
///
/// let serializer = SerializerDefinition::<Value>::standard("foo", ["id"]);
/// let collection = Collection::new(vec![json!({"id": 1}), json!({"id": 2})], serializer).unwrap();
///
/// assert_eq!(collection.to_csv().unwrap(), "id\n1\n2\n");
/// assert_eq!(collection.to_json().unwrap(), r#"[{"id":1},{"id":2}]"#);
/// ```
#[derive(Debug, Clone)]
pub struct Collection<T> {
	items: Vec<T>,
	serializer: SerializerDefinition<T>,
	csv: CsvRenderer,
	json: JsonRenderer,
}

impl<T: AttributeSource> Collection<T> {
	/// Create a new collection.
	///
	/// Fails with `InvalidSerializer` when the serializer lacks an attribute
	/// list or a render strategy. Nothing is kept on failure.
	pub fn new<I, S>(items: I, serializer: S) -> Result<Self>
	where
		I: IntoIterator<Item = T>,
		S: SerializerType<T>,
	{
		let mut collection = Self::empty(serializer)?;
		collection.set_items(items);
		Ok(collection)
	}

	fn empty<S: SerializerType<T>>(serializer: S) -> Result<Self> {
		let serializer = serializer.into_definition();
		serializer.validate()?;
		tracing::debug!(serializer = serializer.name(), "created collection");
		Ok(Self {
			items: Vec::new(),
			serializer,
			csv: CsvRenderer::default(),
			json: JsonRenderer::default(),
		})
	}

	/// Replace the items in the collection
	pub fn set_items<I>(&mut self, items: I) -> &mut Self
	where
		I: IntoIterator<Item = T>,
	{
		self.items = items.into_iter().collect();
		tracing::trace!(items = self.items.len(), "replaced collection items");
		self
	}

	pub fn items(&self) -> &[T] {
		&self.items
	}

	pub fn serializer(&self) -> &SerializerDefinition<T> {
		&self.serializer
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Use `renderer` for [`to_csv`](Self::to_csv)
	pub fn with_csv_renderer(mut self, renderer: CsvRenderer) -> Self {
		self.csv = renderer;
		self
	}

	/// Use `renderer` for [`to_json`](Self::to_json)
	pub fn with_json_renderer(mut self, renderer: JsonRenderer) -> Self {
		self.json = renderer;
		self
	}

	/// Configure both renderers from settings
	pub fn with_options(self, options: &RendererOptions) -> Result<Self> {
		let csv = CsvRenderer::from_options(&options.csv)?;
		Ok(self
			.with_csv_renderer(csv)
			.with_json_renderer(JsonRenderer::from_options(&options.json)))
	}

	/// The attribute names for the collection.
	///
	/// Empty while the collection holds no items, even though the
	/// serializer declares attributes. CSV output of an empty collection
	/// therefore has an empty header line.
	pub fn attributes(&self) -> Attributes {
		if self.items.is_empty() {
			return Attributes::new();
		}
		self.serializer.attributes().cloned().unwrap_or_default()
	}

	/// Render every item, in order, through a fresh serializer instance.
	///
	/// The first failure aborts the whole render.
	pub fn rows(&self) -> Result<Vec<RenderedMapping>> {
		self.items
			.iter()
			.map(|item| self.serializer.bind(item).render())
			.collect()
	}

	/// Render the collection with any renderer
	pub fn render_with(&self, renderer: &dyn Renderer) -> Result<String> {
		let rows = self.rows()?;
		tracing::debug!(
			serializer = self.serializer.name(),
			format = renderer.format().unwrap_or("unknown"),
			rows = rows.len(),
			"rendering collection"
		);
		renderer.render(&self.attributes(), &rows)
	}

	/// Generate a CSV string for the collection.
	///
	/// Array cells are joined with `,` before being written, so they end up
	/// as a single quoted field.
	pub fn to_csv(&self) -> Result<String> {
		self.render_with(&self.csv)
	}

	/// Generate a JSON array string for the collection
	pub fn to_json(&self) -> Result<String> {
		self.render_with(&self.json)
	}
}

impl Collection<Value> {
	/// Create a collection from a JSON value holding the items.
	///
	/// The serializer is validated before the items.
	pub fn from_json<S>(items: Value, serializer: S) -> Result<Self>
	where
		S: SerializerType<Value>,
	{
		let mut collection = Self::empty(serializer)?;
		collection.try_set_items(items)?;
		Ok(collection)
	}

	/// Replace the items from a JSON value.
	///
	/// Fails with `InvalidItems` unless `items` is an array; the current
	/// items are kept on failure.
	pub fn try_set_items(&mut self, items: Value) -> Result<&mut Self> {
		let items = json_items(items)?;
		Ok(self.set_items(items))
	}
}
