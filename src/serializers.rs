//! Serializers module.
//!
//! This module provides attribute declarations, method fields, and the
//! resolution chain that renders one object.
//!
//! # Examples
//!
//! ```rust
//! use rowkit::serializers::{SerializerDefinition, Value};
//! use serde_json::json;
//!
//! let definition = SerializerDefinition::<Value>::standard("point", ["x", "y"]);
//! let rendered = definition.bind(&json!({"x": 1, "y": 2, "z": 3})).render().unwrap();
//! assert_eq!(rendered.keys().collect::<Vec<_>>(), ["x", "y"]);
//! ```

pub use rowkit_serializers::*;
