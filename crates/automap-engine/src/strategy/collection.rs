//! Ordered-collection mapping

use crate::error::MapError;
use crate::strategy::{check_depth, kind_of, MappingStrategy, StrategyRegistry};
use automap_types::{Type, TypeContext, TypeKind, TypePair, Value};

/// Maps between ordered-collection kinds (list, set)
///
/// A key-value collection is never treated as an ordered collection, even
/// though it is iterable: the kind tag keeps the two categories disjoint.
/// The element strategy is resolved once, before any element is visited, so
/// an unmappable element type fails even on empty input. Source iteration
/// order is preserved into the mapping step; the destination constructor may
/// then deduplicate (set) on its own.
pub struct CollectionStrategy;

impl MappingStrategy for CollectionStrategy {
    fn is_compatible(&self, ctx: &TypeContext, pair: TypePair) -> bool {
        kind_of(ctx, pair.from) == Some(TypeKind::Collection)
            && kind_of(ctx, pair.to) == Some(TypeKind::Collection)
    }

    fn map(
        &self,
        ctx: &TypeContext,
        registry: &StrategyRegistry,
        pair: TypePair,
        value: &Value,
        depth: usize,
    ) -> Result<Value, MapError> {
        check_depth(pair, depth)?;

        let from_elem = ctx
            .get(pair.from)
            .and_then(|ty| ty.element())
            .expect("source must be an ordered collection");
        let to_elem = ctx
            .get(pair.to)
            .and_then(|ty| ty.element())
            .expect("destination must be an ordered collection");

        let elem_pair = TypePair::new(from_elem, to_elem);
        let strategy = registry.resolve(ctx, elem_pair)?;

        let items = match value {
            Value::List(items) | Value::Set(items) => items,
            _ => unreachable!("collection strategy invoked with a non-collection value"),
        };

        let mut mapped = Vec::with_capacity(items.len());
        for item in items {
            mapped.push(strategy.map(ctx, registry, elem_pair, item, depth + 1)?);
        }

        match ctx.get(pair.to) {
            Some(Type::List(_)) => Ok(Value::List(mapped)),
            Some(Type::Set(_)) => Ok(Value::new_set(mapped)),
            _ => unreachable!("collection strategy invoked for non-collection destination"),
        }
    }
}
