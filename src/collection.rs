//! Collection module.

pub use rowkit_collection::*;
