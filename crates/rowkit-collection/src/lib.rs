//! Collections of items rendered through a serializer
//!
//! A [`Collection`] combines a set of items with a serializer and renders
//! all of them as CSV or JSON text.
//!
//! ```
//! use rowkit_collection::Collection;
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
//! let collection = Collection::new((0..2).map(|id| Foo { id }), FooSerializer).unwrap();
//! assert_eq!(collection.to_csv().unwrap(), "id,computed\n0,computed - 0\n1,computed - 1\n");
//! ```

pub mod collection;
pub mod items;

pub use collection::Collection;
pub use items::json_items;
