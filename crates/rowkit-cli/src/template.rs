//! Computed attributes backed by Tera templates

use std::collections::BTreeMap;
use std::error::Error as _;
use std::sync::Arc;

use rowkit_serializers::{SerializerError, SerializerMethodField};
use serde_json::Value;
use tera::{Context, Tera};

/// A set of compiled templates, one per computed attribute.
///
/// Each template renders against the source object: object keys are
/// top-level template variables, any other value is exposed as `value`.
#[derive(Debug, Clone)]
pub struct TemplateFields {
	tera: Arc<Tera>,
	names: Vec<String>,
}

impl TemplateFields {
	pub fn compile(templates: &BTreeMap<String, String>) -> tera::Result<Self> {
		let mut tera = Tera::default();
		tera.autoescape_on(Vec::new());
		for (name, source) in templates {
			tera.add_raw_template(name, source)?;
		}
		Ok(Self {
			tera: Arc::new(tera),
			names: templates.keys().cloned().collect(),
		})
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Render the template for `name` against `object`
	pub fn render(&self, name: &str, object: &Value) -> rowkit_serializers::Result<Value> {
		let context = match object {
			Value::Object(_) => Context::from_value(object.clone()),
			other => {
				let mut context = Context::new();
				context.insert("value", other);
				Ok(context)
			}
		}
		.map_err(|e| SerializerError::encoding("template", describe(&e)))?;

		self.tera
			.render(name, &context)
			.map(Value::String)
			.map_err(|e| SerializerError::encoding("template", describe(&e)))
	}

	/// One method field per template
	pub fn method_fields(&self) -> impl Iterator<Item = SerializerMethodField<Value>> + '_ {
		self.names.iter().map(|name| {
			let fields = self.clone();
			let template = name.clone();
			SerializerMethodField::new(name.clone(), move |object: &Value| {
				fields.render(&template, object)
			})
		})
	}
}

// Tera keeps the useful detail in the source chain.
fn describe(error: &tera::Error) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
