//! # rowkit
//!
//! Declarative serializers and collections that render objects as CSV or
//! JSON text.
//!
//! A serializer names an ordered list of attributes. Each attribute is
//! answered by a method field on the serializer when one is registered, or
//! by the object's own accessors otherwise. A [`Collection`] pairs a set of
//! items with a serializer and renders all of them through a renderer.
//!
//! ## Crates
//!
//! - [`serializers`] - attribute declarations, method fields, resolution
//! - [`renderers`] - CSV and JSON text encodings
//! - [`collection`] - collections of items bound to a serializer
//!
//! ## Examples
//!
//! ```rust
//! use rowkit::prelude::*;
//! use serde_json::json;
//!
//! struct User {
//!     first: String,
//!     last: String,
//! }
//!
//! attribute_source!(User { first, last });
//!
//! struct UserSerializer;
//!
//! impl Serializer for UserSerializer {
//!     type Object = User;
//!
//!     fn attributes() -> Attributes {
//!         Attributes::from_static(&["first", "full_name"])
//!     }
//!
//!     fn method_fields(fields: &mut MethodFieldRegistry<User>) {
//!         fields.register_fn("full_name", |user| json!(format!("{} {}", user.first, user.last)));
//!     }
//! }
//!
//! let users = vec![User { first: "Ada".into(), last: "Lovelace".into() }];
//! let collection = Collection::new(users, UserSerializer).unwrap();
//!
//! assert_eq!(collection.to_csv().unwrap(), "first,full_name\nAda,Ada Lovelace\n");
//! assert_eq!(
//!     collection.to_json().unwrap(),
//!     r#"[{"first":"Ada","full_name":"Ada Lovelace"}]"#
//! );
//! ```

pub mod collection;
pub mod renderers;
pub mod serializers;

pub use rowkit_collection::Collection;
pub use rowkit_renderers::{CsvRenderer, JsonRenderer, Renderer, RendererOptions};
pub use rowkit_serializers::{
	AttributeSource, Attributes, InvalidItems, InvalidSerializer, MethodFieldRegistry,
	RenderedMapping, Result, Serializer, SerializerDefinition, SerializerError,
	SerializerMethodField, attribute_source,
};

/// Re-exports for the common case of defining a serializer and rendering
/// a collection
pub mod prelude {
	pub use crate::{
		AttributeSource, Attributes, Collection, MethodFieldRegistry, RenderedMapping, Result,
		Serializer, SerializerDefinition, SerializerError, SerializerMethodField,
		attribute_source,
	};

	// External
	pub use serde::{Deserialize, Serialize};
}
