//! Renderers module.
//!
//! This module provides the CSV and JSON encodings of rendered rows.

pub use rowkit_renderers::*;
