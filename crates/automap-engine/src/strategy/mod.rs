//! Mapping strategies
//!
//! Each strategy owns one category of type pair: it can say whether a pair
//! is in its category (`is_compatible`) and transform a value across such a
//! pair (`map`). Strategies hold no state; recursion re-enters the registry
//! for nested pairs, which is a read-only lookup.

use crate::error::MapError;
use automap_types::{TypeContext, TypeKind, TypePair, Value};

pub mod collection;
pub mod key_value;
pub mod object;
pub mod primitive;
pub mod record;
pub mod registry;

pub use collection::CollectionStrategy;
pub use key_value::KeyValueStrategy;
pub use object::ObjectStrategy;
pub use primitive::PrimitiveStrategy;
pub use record::RecordStrategy;
pub use registry::StrategyRegistry;

/// Maximum mapping recursion depth
///
/// Values are owned trees, so recursion always terminates; the guard turns
/// pathologically deep inputs into an error instead of a stack overflow.
pub const MAX_MAP_DEPTH: usize = 100;

/// A mapping algorithm for one category of type pair
pub trait MappingStrategy: Send + Sync {
    /// Whether both sides of the pair fall in this strategy's category
    ///
    /// Total and side-effect free; never fails.
    fn is_compatible(&self, ctx: &TypeContext, pair: TypePair) -> bool;

    /// Map a value of type `pair.from` to a value of type `pair.to`
    ///
    /// Precondition: the caller has confirmed `is_compatible(pair)` and the
    /// value's concrete type is `pair.from`. Violations are internal
    /// failures, not recoverable errors.
    fn map(
        &self,
        ctx: &TypeContext,
        registry: &StrategyRegistry,
        pair: TypePair,
        value: &Value,
        depth: usize,
    ) -> Result<Value, MapError>;
}

/// Kind of the descriptor behind `id`, if interned
pub(crate) fn kind_of(ctx: &TypeContext, id: automap_types::TypeId) -> Option<TypeKind> {
    ctx.get(id).map(|ty| ty.kind())
}

/// Depth guard, checked at entry by every strategy that recurses
pub(crate) fn check_depth(pair: TypePair, depth: usize) -> Result<(), MapError> {
    if depth > MAX_MAP_DEPTH {
        Err(MapError::RecursionLimit { pair })
    } else {
        Ok(())
    }
}
