//! rowkit CLI
//!
//! Renders a JSON array of records as CSV or JSON through a serializer
//! described in a TOML settings file.
//!
//! ## Usage
//!
//! ```bash
//! rowkit render --settings rowkit.toml --serializer user --input users.json
//! rowkit render --settings rowkit.toml --serializer user --input - --format json
//! rowkit attributes --settings rowkit.toml --serializer user
//! ```
//!
//! `RUST_LOG` overrides the log filter chosen by `-v`.

mod command;
mod settings;
mod template;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::command::{Format, RenderArgs};

#[derive(Parser)]
#[command(name = "rowkit")]
#[command(about = "Render JSON records as CSV or JSON", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Render records through a serializer
	Render {
		/// Path to the TOML settings file
		#[arg(short, long, value_name = "PATH")]
		settings: PathBuf,

		/// Name of a `[serializers.<name>]` table in the settings file
		#[arg(long, value_name = "NAME")]
		serializer: String,

		/// JSON file holding an array of records, or `-` for stdin
		#[arg(short, long, value_name = "PATH")]
		input: PathBuf,

		/// Output format
		#[arg(short, long, value_enum, default_value_t = Format::Csv)]
		format: Format,

		/// Write to this file instead of stdout
		#[arg(short, long, value_name = "PATH")]
		output: Option<PathBuf>,
	},

	/// List the attribute names a serializer declares
	Attributes {
		/// Path to the TOML settings file
		#[arg(short, long, value_name = "PATH")]
		settings: PathBuf,

		/// Name of a `[serializers.<name>]` table in the settings file
		#[arg(long, value_name = "NAME")]
		serializer: String,
	},
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let result = match cli.command {
		Commands::Render {
			settings,
			serializer,
			input,
			format,
			output,
		} => command::run_render(&RenderArgs {
			settings,
			serializer,
			input,
			format,
			output,
		}),
		Commands::Attributes {
			settings,
			serializer,
		} => command::run_attributes(&settings, &serializer),
	};

	if let Err(e) = result {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}

fn init_tracing(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn default_filter(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}
