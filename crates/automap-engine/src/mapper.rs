//! Typed mapper entry point

use crate::error::MapError;
use crate::strategy::registry;
use automap_types::{Type, TypeContext, TypeId, TypePair, Value};

/// A typed mapper for one declared (source type, destination type) pair
///
/// Validates a supplied value's concrete runtime type against the declared
/// source type, then delegates to the strategy registry. Parameterized
/// declarations (list, set, dict) are unwrapped to their base kind for the
/// check; nominal types (records, objects) must match exactly — a value of
/// a subtype is rejected.
#[derive(Debug, Clone, Copy)]
pub struct Mapper<'a> {
    ctx: &'a TypeContext,
    pair: TypePair,
}

impl<'a> Mapper<'a> {
    /// Create a mapper for the declared pair
    pub fn new(ctx: &'a TypeContext, from: TypeId, to: TypeId) -> Self {
        Mapper {
            ctx,
            pair: TypePair::new(from, to),
        }
    }

    /// The declared pair
    pub fn pair(&self) -> TypePair {
        self.pair
    }

    /// Map a value of the declared source type to the destination type
    pub fn map(&self, value: &Value) -> Result<Value, MapError> {
        self.assert_is_type(value)?;

        let registry = registry::global();
        let strategy = registry.resolve(self.ctx, self.pair)?;
        strategy.map(self.ctx, registry, self.pair, value, 0)
    }

    fn assert_is_type(&self, value: &Value) -> Result<(), MapError> {
        let matches = match self.ctx.get(self.pair.from) {
            None => false,
            Some(ty) => match ty {
                Type::Int => matches!(value, Value::Int(_)),
                Type::Float => matches!(value, Value::Float(_)),
                Type::Str => matches!(value, Value::Str(_)),
                Type::Bool => matches!(value, Value::Bool(_)),
                // Parameterized declarations compare by base kind only
                Type::List(_) => matches!(value, Value::List(_)),
                Type::Set(_) => matches!(value, Value::Set(_)),
                Type::Map(_) => matches!(value, Value::Map(_)),
                // Nominal declarations compare exactly; subtypes are rejected
                Type::Record(_) | Type::Object(_) => {
                    value.concrete_type() == Some(self.pair.from)
                }
                Type::Opaque(_) => false,
            },
        };

        if matches {
            Ok(())
        } else {
            Err(MapError::ValueType {
                value: value.clone(),
                expected: self.pair.from,
            })
        }
    }
}
