use rowkit_serializers::{Attributes, RenderedMapping, Result, SerializerError};

use crate::options::JsonOptions;
use crate::renderer::Renderer;

/// JSON renderer for rendered mappings.
///
/// Produces one array with an object per mapping. Keys keep their rendered
/// order and values keep their native JSON types; arrays stay arrays.
/// Output is compact unless [`pretty`](Self::pretty) is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonRenderer {
	/// Indent output for human readers
	pub pretty: bool,
}

impl JsonRenderer {
	/// Creates a new compact JSON renderer
	///
	/// # Examples
	///
	/// ```
	/// use rowkit_renderers::JsonRenderer;
	///
	/// let renderer = JsonRenderer::new();
	/// assert!(!renderer.pretty);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_options(options: &JsonOptions) -> Self {
		Self {
			pretty: options.pretty,
		}
	}

	/// Enables or disables indented output
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}
}

impl Renderer for JsonRenderer {
	fn media_type(&self) -> String {
		"application/json".to_string()
	}

	fn format(&self) -> Option<&str> {
		Some("json")
	}

	fn render(&self, _attributes: &Attributes, rows: &[RenderedMapping]) -> Result<String> {
		let output = if self.pretty {
			serde_json::to_string_pretty(rows)
		} else {
			serde_json::to_string(rows)
		}
		.map_err(|e| SerializerError::encoding("JSON", e))?;

		tracing::debug!(rows = rows.len(), bytes = output.len(), "rendered JSON");
		Ok(output)
	}
}
