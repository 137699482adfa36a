use rowkit_serializers::{Attributes, RenderedMapping, Result, SerializerError};
use serde_json::Value;

use crate::options::CsvOptions;
use crate::renderer::Renderer;

/// CSV renderer for rendered mappings.
///
/// Writes exactly one header row followed by one row per mapping, each
/// terminated by `\n`. Fields are quoted only when they contain the
/// delimiter, a quote or a line break. Array cells are joined into a single
/// string before quoting, so a joined array containing the delimiter ends up
/// as one quoted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRenderer {
	/// CSV delimiter (default: ',')
	pub delimiter: u8,
	/// Separator used to join array cells (default: ",")
	pub array_separator: String,
}

impl Default for CsvRenderer {
	fn default() -> Self {
		Self {
			delimiter: b',',
			array_separator: ",".to_string(),
		}
	}
}

impl CsvRenderer {
	/// Creates a new CSV renderer
	///
	/// # Examples
	///
	/// ```
	/// use rowkit_renderers::CsvRenderer;
	///
	/// let renderer = CsvRenderer::new();
	/// assert_eq!(renderer.delimiter, b',');
	/// assert_eq!(renderer.array_separator, ",");
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer from settings
	///
	/// Fails when the configured delimiter is not a single ASCII character.
	pub fn from_options(options: &CsvOptions) -> Result<Self> {
		if !options.delimiter.is_ascii() {
			return Err(SerializerError::encoding(
				"CSV",
				format!("delimiter {:?} is not an ASCII character", options.delimiter),
			));
		}
		Ok(Self {
			delimiter: options.delimiter as u8,
			array_separator: options.array_separator.clone(),
		})
	}

	/// Sets the delimiter character
	///
	/// # Examples
	///
	/// ```
	/// use rowkit_renderers::CsvRenderer;
	///
	/// let renderer = CsvRenderer::new().delimiter(b';');
	/// assert_eq!(renderer.delimiter, b';');
	/// ```
	pub fn delimiter(mut self, delimiter: u8) -> Self {
		self.delimiter = delimiter;
		self
	}

	/// Sets the separator used when joining array cells
	pub fn array_separator(mut self, separator: impl Into<String>) -> Self {
		self.array_separator = separator.into();
		self
	}

	/// Converts one value into its CSV cell text
	///
	/// # Examples
	///
	/// ```
	/// use rowkit_renderers::CsvRenderer;
	/// use serde_json::json;
	///
	/// let renderer = CsvRenderer::new();
	/// assert_eq!(renderer.cell(&json!([1, 2, 3])), "1,2,3");
	/// assert_eq!(renderer.cell(&json!("text")), "text");
	/// assert_eq!(renderer.cell(&json!(null)), "");
	/// ```
	pub fn cell(&self, value: &Value) -> String {
		match value {
			Value::Array(items) => items
				.iter()
				.map(|item| self.cell(item))
				.collect::<Vec<_>>()
				.join(&self.array_separator),
			other => scalar_cell(other),
		}
	}

	fn writer<'a>(&self, out: &'a mut Vec<u8>) -> csv::Writer<&'a mut Vec<u8>> {
		csv::WriterBuilder::new()
			.delimiter(self.delimiter)
			.terminator(csv::Terminator::Any(b'\n'))
			.flexible(true)
			.from_writer(out)
	}

	fn write_record(&self, out: &mut Vec<u8>, record: &[String]) -> Result<()> {
		// csv writes `""` for a record with no fields or a single empty
		// field; both are a bare line break here.
		if record.iter().all(String::is_empty) && record.len() <= 1 {
			out.push(b'\n');
			return Ok(());
		}
		let mut wtr = self.writer(out);
		wtr.write_record(record)
			.map_err(|e| SerializerError::encoding("CSV", e))?;
		wtr.flush().map_err(|e| SerializerError::encoding("CSV", e))
	}
}

// `null` and the empty string are both an unquoted empty cell.
fn scalar_cell(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		// Objects are not flattened; they are written as compact JSON text
		other => other.to_string(),
	}
}

impl Renderer for CsvRenderer {
	fn media_type(&self) -> String {
		"text/csv; charset=utf-8".to_string()
	}

	fn media_types(&self) -> Vec<String> {
		vec![
			"text/csv".to_string(),
			"text/csv; charset=utf-8".to_string(),
			"application/csv".to_string(),
		]
	}

	fn format(&self) -> Option<&str> {
		Some("csv")
	}

	fn render(&self, attributes: &Attributes, rows: &[RenderedMapping]) -> Result<String> {
		let mut data = Vec::new();
		self.write_record(&mut data, &attributes.to_vec())?;

		for row in rows {
			let values: Vec<String> = row.values().map(|v| self.cell(v)).collect();
			self.write_record(&mut data, &values)?;
		}

		tracing::debug!(rows = rows.len(), bytes = data.len(), "rendered CSV");
		String::from_utf8(data).map_err(|e| SerializerError::encoding("CSV", e))
	}
}
