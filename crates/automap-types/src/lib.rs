//! Automap Type System
//!
//! Explicit type descriptors, the interning type context, type pairs, and
//! the dynamic value representation used by the automap mapping engine.

#![warn(missing_docs)]

pub mod context;
pub mod pair;
pub mod ty;
pub mod value;

pub use context::TypeContext;
pub use pair::TypePair;
pub use ty::{DerivedField, FieldDef, MapType, ObjectType, RecordType, Type, TypeId, TypeKind};
pub use value::Value;
