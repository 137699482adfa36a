//! Renderer settings
//!
//! These structs deserialize from settings files; every field has a default
//! so partial tables are accepted.

use serde::{Deserialize, Serialize};

/// Settings for [`CsvRenderer`](crate::CsvRenderer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvOptions {
	pub delimiter: char,
	pub array_separator: String,
}

impl Default for CsvOptions {
	fn default() -> Self {
		Self {
			delimiter: ',',
			array_separator: ",".to_string(),
		}
	}
}

/// Settings for [`JsonRenderer`](crate::JsonRenderer)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonOptions {
	pub pretty: bool,
}

/// Settings for every renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
	pub csv: CsvOptions,
	pub json: JsonOptions,
}
