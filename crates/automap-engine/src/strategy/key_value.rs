//! Key-value-collection mapping

use crate::error::MapError;
use crate::strategy::{check_depth, kind_of, MappingStrategy, StrategyRegistry};
use automap_types::{Type, TypeContext, TypeKind, TypePair, Value};

/// Maps between key-value collection kinds
///
/// The key pair and the value pair are resolved independently, so keys and
/// values may go through different strategies. Entries are mapped in source
/// order; if two mapped keys collide, the destination constructor lets the
/// later value overwrite the earlier one (no dedup policy of the strategy's
/// own).
pub struct KeyValueStrategy;

impl MappingStrategy for KeyValueStrategy {
    fn is_compatible(&self, ctx: &TypeContext, pair: TypePair) -> bool {
        kind_of(ctx, pair.from) == Some(TypeKind::KeyValue)
            && kind_of(ctx, pair.to) == Some(TypeKind::KeyValue)
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

        let from_map = match ctx.get(pair.from) {
            Some(Type::Map(map)) => map.clone(),
            _ => unreachable!("source must be a key-value collection"),
        };
        let to_map = match ctx.get(pair.to) {
            Some(Type::Map(map)) => map.clone(),
            _ => unreachable!("destination must be a key-value collection"),
        };

        let key_pair = TypePair::new(from_map.key, to_map.key);
        let key_strategy = registry.resolve(ctx, key_pair)?;

        let value_pair = TypePair::new(from_map.value, to_map.value);
        let value_strategy = registry.resolve(ctx, value_pair)?;

        let entries = match value {
            Value::Map(entries) => entries,
            _ => unreachable!("key-value strategy invoked with a non-map value"),
        };

        let mut mapped = Vec::with_capacity(entries.len());
        for (key, val) in entries {
            let mapped_key = key_strategy.map(ctx, registry, key_pair, key, depth + 1)?;
            let mapped_val = value_strategy.map(ctx, registry, value_pair, val, depth + 1)?;
            mapped.push((mapped_key, mapped_val));
        }

        Ok(Value::new_map(mapped))
    }
}
