//! Renderers for rowkit
//!
//! Text encoders that turn a header and a sequence of
//! [`RenderedMapping`](rowkit_serializers::RenderedMapping)s into CSV or JSON.

pub mod csv_renderer;
pub mod json_renderer;
pub mod options;
pub mod renderer;

pub use csv_renderer::CsvRenderer;
pub use json_renderer::JsonRenderer;
pub use options::{CsvOptions, JsonOptions, RendererOptions};
pub use renderer::Renderer;
