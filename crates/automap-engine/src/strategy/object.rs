//! General-object mapping

use crate::error::MapError;
use crate::strategy::{check_depth, kind_of, MappingStrategy, StrategyRegistry};
use automap_types::{ObjectType, TypeContext, TypeKind, TypePair, Value};

/// Maps between general object kinds
///
/// Works off the constructor parameter lists of both sides: for every source
/// parameter whose name also appears among the destination's parameters, the
/// same-named attribute is read off the source instance, mapped, and passed
/// to the destination constructor. Destination-only parameters are neither
/// defaulted nor validated, unlike record mapping, which raises a
/// missing-fields error for them.
pub struct ObjectStrategy;

impl MappingStrategy for ObjectStrategy {
    fn is_compatible(&self, ctx: &TypeContext, pair: TypePair) -> bool {
        kind_of(ctx, pair.from) == Some(TypeKind::Object)
            && kind_of(ctx, pair.to) == Some(TypeKind::Object)
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

        let from_obj = object_descriptor(ctx, pair.from, "source");
        let to_obj = object_descriptor(ctx, pair.to, "destination");

        let mut attrs = Vec::new();
        for (name, from_ty) in &from_obj.params {
            let Some(to_ty) = to_obj.param(name) else {
                continue;
            };

            let param_pair = TypePair::new(*from_ty, to_ty);
            let from_value = value
                .attr(name)
                .expect("constructor parameter missing as attribute on source instance");
            let mapped = registry
                .resolve(ctx, param_pair)?
                .map(ctx, registry, param_pair, from_value, depth + 1)?;
            attrs.push((name.clone(), mapped));
        }

        Ok(Value::Object {
            ty: pair.to,
            attrs,
        })
    }
}

fn object_descriptor<'a>(ctx: &'a TypeContext, id: automap_types::TypeId, side: &str) -> &'a ObjectType {
    ctx.get(id)
        .and_then(|ty| ty.as_object())
        .unwrap_or_else(|| panic!("{} must be an object", side))
}
