//! Settings file loading
//!
//! A settings file is TOML with optional `[csv]` and `[json]` renderer
//! tables and one `[serializers.<name>]` table per serializer:
//!
//! ```toml
//! [csv]
//! delimiter = ";"
//!
//! [serializers.user]
//! attributes = ["id", "name", "label"]
//!
//! [serializers.user.computed]
//! label = "{{ name }} <{{ email }}>"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rowkit_renderers::{CsvOptions, JsonOptions, RendererOptions};
use rowkit_serializers::SerializerDefinition;
use serde::Deserialize;
use serde_json::Value;

use crate::template::TemplateFields;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub csv: CsvOptions,
	pub json: JsonOptions,
	pub serializers: BTreeMap<String, SerializerSettings>,
}

/// One `[serializers.<name>]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerSettings {
	/// Declared attribute names. A table without this key describes a
	/// serializer with no attribute list.
	pub attributes: Option<Vec<String>>,
	/// Computed attributes, as Tera templates keyed by attribute name
	pub computed: BTreeMap<String, String>,
}

impl Settings {
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read settings file {}", path.display()))?;
		Self::from_toml(&content)
			.with_context(|| format!("failed to parse settings file {}", path.display()))
	}

	pub fn from_toml(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	pub fn renderer_options(&self) -> RendererOptions {
		RendererOptions {
			csv: self.csv.clone(),
			json: self.json.clone(),
		}
	}

	/// Build the serializer definition for `name`
	pub fn definition(&self, name: &str) -> Result<SerializerDefinition<Value>> {
		let Some(serializer) = self.serializers.get(name) else {
			let known: Vec<&str> = self.serializers.keys().map(String::as_str).collect();
			if known.is_empty() {
				bail!("unknown serializer '{name}': the settings file defines none");
			}
			bail!(
				"unknown serializer '{name}', expected one of: {}",
				known.join(", ")
			);
		};
		serializer.definition(name)
	}
}

impl SerializerSettings {
	pub fn definition(&self, name: &str) -> Result<SerializerDefinition<Value>> {
		let mut definition = SerializerDefinition::new(name.to_string()).with_default_render();
		if let Some(attributes) = &self.attributes {
			definition = definition.with_attributes(attributes.iter().cloned());
		}

		let fields = TemplateFields::compile(&self.computed)
			.with_context(|| format!("invalid computed attribute in serializer '{name}'"))?;
		for field in fields.method_fields() {
			definition = definition.with_method_field(field);
		}
		tracing::debug!(
			serializer = name,
			computed = self.computed.len(),
			"built serializer from settings"
		);
		Ok(definition)
	}
}
