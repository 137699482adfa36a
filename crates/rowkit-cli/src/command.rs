//! Subcommand implementations

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use rowkit_collection::Collection;
use serde_json::Value;

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	Csv,
	Json,
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
	pub settings: PathBuf,
	pub serializer: String,
	pub input: PathBuf,
	pub format: Format,
	pub output: Option<PathBuf>,
}

/// Render the input records and write them to the output file or stdout
pub fn run_render(args: &RenderArgs) -> Result<()> {
	let text = render_to_string(args)?;
	match &args.output {
		Some(path) => {
			std::fs::write(path, &text)
				.with_context(|| format!("failed to write {}", path.display()))?;
			tracing::info!(output = %path.display(), bytes = text.len(), "wrote output");
		}
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(text.as_bytes())?;
			if !text.ends_with('\n') {
				stdout.write_all(b"\n")?;
			}
			stdout.flush()?;
		}
	}
	Ok(())
}

pub fn render_to_string(args: &RenderArgs) -> Result<String> {
	let settings = Settings::load(&args.settings)?;
	let definition = settings.definition(&args.serializer)?;
	let items = read_input(&args.input)?;

	let collection = Collection::from_json(items, definition)
		.and_then(|collection| collection.with_options(&settings.renderer_options()))
		.with_context(|| format!("cannot build collection for '{}'", args.serializer))?;
	tracing::info!(
		serializer = %args.serializer,
		items = collection.len(),
		format = ?args.format,
		"rendering"
	);

	let text = match args.format {
		Format::Csv => collection.to_csv(),
		Format::Json => collection.to_json(),
	}
	.with_context(|| format!("failed to render with '{}'", args.serializer))?;
	Ok(text)
}

/// The attribute names declared by a serializer, one per line
pub fn run_attributes(settings: &Path, serializer: &str) -> Result<()> {
	let names = attribute_names(settings, serializer)?;
	let mut stdout = std::io::stdout().lock();
	for name in names {
		writeln!(stdout, "{name}")?;
	}
	Ok(())
}

pub fn attribute_names(settings: &Path, serializer: &str) -> Result<Vec<String>> {
	let settings = Settings::load(settings)?;
	let definition = settings.definition(serializer)?;
	definition
		.validate()
		.with_context(|| format!("invalid serializer '{serializer}'"))?;
	Ok(definition
		.attributes()
		.map(|attributes| attributes.to_vec())
		.unwrap_or_default())
}

// `-` reads from stdin.
fn read_input(path: &Path) -> Result<Value> {
	let content = if path.as_os_str() == "-" {
		let mut content = String::new();
		std::io::stdin()
			.read_to_string(&mut content)
			.context("failed to read stdin")?;
		content
	} else {
		std::fs::read_to_string(path)
			.with_context(|| format!("failed to read input file {}", path.display()))?
	};
	serde_json::from_str(&content)
		.with_context(|| format!("input {} is not valid JSON", path.display()))
}
