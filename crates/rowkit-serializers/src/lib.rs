//! # rowkit-serializers
//!
//! Declarative serializers that extract a fixed, ordered set of named
//! attributes from arbitrary source objects.
//!
//! ## Features
//!
//! - **Attribute Declarations**: Each serializer variant owns an ordered [`Attributes`] list
//! - **Method Fields**: Serializer-defined computations that override object accessors
//! - **Accessor Fallback**: Any [`AttributeSource`] answers the remaining names
//! - **Typed and Runtime Variants**: [`Serializer`] for compile-time variants,
//!   [`SerializerDefinition`] for variants assembled at runtime
//!
//! ## Resolution Order
//!
//! For every declared attribute, a render asks the serializer's method fields
//! first and the object's accessors second. A name neither knows fails the
//! whole render with [`SerializerError::UnknownAttribute`].
//!
//! ## Examples
//!
//! ```rust
//! use rowkit_serializers::{attribute_source, Attributes, MethodFieldRegistry, Serializer};
//! use serde_json::json;
//!
//! struct Foo {
//!     id: u32,
//! }
//!
//! attribute_source!(Foo { id });
//!
//! struct FooSerializer;
//!
//! impl Serializer for FooSerializer {
//!     type Object = Foo;
//!
//!     fn attributes() -> Attributes {
//!         Attributes::from_static(&["id", "computed"])
//!     }
//!
//!     fn method_fields(fields: &mut MethodFieldRegistry<Foo>) {
//!         fields.register_fn("computed", |foo| json!(format!("computed - {}", foo.id)));
//!     }
//! }
//!
//! let definition = FooSerializer::definition();
//! let rendered = definition.bind(&Foo { id: 12 }).render().unwrap();
//! assert_eq!(rendered.get("id"), Some(&json!(12)));
//! assert_eq!(rendered.get("computed"), Some(&json!("computed - 12")));
//! ```

pub mod attributes;
pub mod definition;
pub mod error;
pub mod method_field;
pub mod rendered;
pub mod resolver;
pub mod serializer;
pub mod source;

// Re-export commonly used types
pub use attributes::Attributes;
pub use definition::{RenderStrategy, SerializerDefinition, SerializerType};
pub use error::{InvalidItems, InvalidSerializer, Result, SerializerError};
pub use method_field::{MethodFieldRegistry, SerializerMethodField};
pub use rendered::RenderedMapping;
pub use resolver::{MethodOverride, ObjectAccessor, ResolutionChain, Resolve};
pub use serializer::{BoundSerializer, Serializer};
pub use source::{AttributeSource, SerdeObject, to_value};

#[doc(no_inline)]
pub use serde_json::Value;
