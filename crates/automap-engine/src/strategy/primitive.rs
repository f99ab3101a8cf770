//! Primitive scalar coercion

use crate::error::MapError;
use crate::strategy::{kind_of, MappingStrategy, StrategyRegistry};
use automap_types::{Type, TypeContext, TypeKind, TypePair, Value};

/// Maps between the four scalar kinds: int, float, str, bool
///
/// Coercion goes through the destination type's canonical constructor:
/// numeric-to-string uses the canonical textual form (an integral float
/// keeps its `.0`), string-to-numeric parses, and a failed parse surfaces
/// as a conversion error.
pub struct PrimitiveStrategy;

impl MappingStrategy for PrimitiveStrategy {
    fn is_compatible(&self, ctx: &TypeContext, pair: TypePair) -> bool {
        kind_of(ctx, pair.from) == Some(TypeKind::Primitive)
            && kind_of(ctx, pair.to) == Some(TypeKind::Primitive)
    }

    fn map(
        &self,
        ctx: &TypeContext,
        _registry: &StrategyRegistry,
        pair: TypePair,
        value: &Value,
        _depth: usize,
    ) -> Result<Value, MapError> {
        let to = ctx
            .get(pair.to)
            .expect("destination type must be interned in the context");

        match to {
            Type::Int => to_int(value, pair),
            Type::Float => to_float(value, pair),
            Type::Str => to_str(value, pair),
            Type::Bool => to_bool(value, pair),
            _ => unreachable!("primitive strategy invoked for non-primitive destination"),
        }
    }
}

fn to_int(value: &Value, pair: TypePair) -> Result<Value, MapError> {
    match value {
        Value::Int(i) => Ok(Value::Int(*i)),
        // Truncates toward zero, like an int constructor applied to a float
        Value::Float(x) => Ok(Value::Int(x.trunc() as i64)),
        Value::Str(s) => s
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| conversion(value, pair, e.to_string())),
        Value::Bool(b) => Ok(Value::Int(*b as i64)),
        _ => Err(conversion(value, pair, "value is not a primitive".into())),
    }
}

fn to_float(value: &Value, pair: TypePair) -> Result<Value, MapError> {
    match value {
        Value::Int(i) => Ok(Value::Float(*i as f64)),
        Value::Float(x) => Ok(Value::Float(*x)),
        Value::Str(s) => s
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| conversion(value, pair, e.to_string())),
        Value::Bool(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
        _ => Err(conversion(value, pair, "value is not a primitive".into())),
    }
}

fn to_str(value: &Value, pair: TypePair) -> Result<Value, MapError> {
    match value {
        Value::Int(i) => Ok(Value::Str(i.to_string())),
        Value::Float(x) => Ok(Value::Str(format_float(*x))),
        Value::Str(s) => Ok(Value::Str(s.clone())),
        Value::Bool(b) => Ok(Value::Str(b.to_string())),
        _ => Err(conversion(value, pair, "value is not a primitive".into())),
    }
}

fn to_bool(value: &Value, pair: TypePair) -> Result<Value, MapError> {
    match value {
        Value::Int(i) => Ok(Value::Bool(*i != 0)),
        Value::Float(x) => Ok(Value::Bool(*x != 0.0)),
        Value::Str(s) => s
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|e| conversion(value, pair, e.to_string())),
        Value::Bool(b) => Ok(Value::Bool(*b)),
        _ => Err(conversion(value, pair, "value is not a primitive".into())),
    }
}

fn conversion(value: &Value, pair: TypePair, reason: String) -> MapError {
    MapError::Conversion {
        value: value.clone(),
        target: pair.to,
        reason,
    }
}

/// Canonical textual form of a float: integral values keep their `.0`
/// (`0.0` stringifies as `"0.0"`, not `"0"`)
fn format_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}
