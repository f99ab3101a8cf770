//! Automap Mapping Engine
//!
//! Type-pair resolution and recursive object-graph mapping: given a source
//! value and a declared (source type, destination type) pair, produce an
//! equivalent value of the destination type, recursively transforming nested
//! fields, collection elements, and mapping entries.
//!
//! The engine dispatches each pair to the first compatible strategy in a
//! fixed, ordered registry of five: primitive, ordered-collection,
//! key-value-collection, record, and general-object. Strategies re-enter the
//! registry for nested pairs, so every level of the source graph can pick a
//! different strategy, down to the primitives.
//!
//! ```
//! use automap_engine::Mapper;
//! use automap_types::{TypeContext, Value};
//!
//! let mut ctx = TypeContext::new();
//! let from = ctx.list_of(ctx.int_type());
//! let to = ctx.set_of(ctx.string_type());
//!
//! let mapper = Mapper::new(&ctx, from, to);
//! let mapped = mapper.map(&Value::List(vec![Value::Int(1), Value::Int(1)])).unwrap();
//! assert_eq!(mapped, Value::Set(vec![Value::str("1")]));
//! ```

pub mod error;
pub mod mapper;
pub mod strategy;

pub use error::MapError;
pub use mapper::Mapper;
pub use strategy::{
    CollectionStrategy, KeyValueStrategy, MappingStrategy, ObjectStrategy, PrimitiveStrategy,
    RecordStrategy, StrategyRegistry, MAX_MAP_DEPTH,
};
