//! The renderer seam shared by every output format

use rowkit_serializers::{Attributes, RenderedMapping, Result};

/// Encodes a sequence of rendered mappings as text.
///
/// `attributes` is the header the caller wants for the output; formats
/// without a header row may ignore it.
pub trait Renderer {
	/// The preferred media type of the output
	fn media_type(&self) -> String;

	/// All media types this renderer can produce
	fn media_types(&self) -> Vec<String> {
		vec![self.media_type()]
	}

	/// Short format name, e.g. `csv`
	fn format(&self) -> Option<&str>;

	fn render(&self, attributes: &Attributes, rows: &[RenderedMapping]) -> Result<String>;
}
