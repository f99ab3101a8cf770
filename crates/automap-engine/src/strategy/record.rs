//! Record mapping

use crate::error::MapError;
use crate::strategy::{check_depth, kind_of, MappingStrategy, StrategyRegistry};
use automap_types::{RecordType, TypeContext, TypeKind, TypePair, Value};

/// Maps between record kinds
///
/// Destination fields are populated from two sources, in order: same-named
/// declared fields on the source record, then same-named derived fields for
/// destinations the first pass left unsatisfied. Field matching is by name
/// only; type compatibility is discovered when the nested pair is resolved.
/// Every destination field still unsatisfied after both passes and lacking
/// a default is reported in a single batched error.
pub struct RecordStrategy;

impl MappingStrategy for RecordStrategy {
    fn is_compatible(&self, ctx: &TypeContext, pair: TypePair) -> bool {
        kind_of(ctx, pair.from) == Some(TypeKind::Record)
            && kind_of(ctx, pair.to) == Some(TypeKind::Record)
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

        let from_rec = record_descriptor(ctx, pair.from, "source");
        let to_rec = record_descriptor(ctx, pair.to, "destination");

        let mut assembled: Vec<(String, Value)> = Vec::new();

        // Pass 1: declared fields, matched by name
        for from_field in &from_rec.fields {
            let Some(to_field) = to_rec.field(&from_field.name) else {
                continue;
            };

            let field_pair = TypePair::new(from_field.ty, to_field.ty);
            let from_value = value
                .field(&from_field.name)
                .expect("declared field missing on source instance");
            let mapped = registry
                .resolve(ctx, field_pair)?
                .map(ctx, registry, field_pair, from_value, depth + 1)?;
            assembled.push((to_field.name.clone(), mapped));
        }

        // Pass 2: derived fields, only for destinations pass 1 left unset
        for derived in &from_rec.derived {
            let Some(to_field) = to_rec.field(&derived.name) else {
                continue;
            };
            if assembled.iter().any(|(name, _)| *name == to_field.name) {
                continue;
            }

            let field_pair = TypePair::new(derived.ty, to_field.ty);
            let from_value = (derived.get)(value);
            let mapped = registry
                .resolve(ctx, field_pair)?
                .map(ctx, registry, field_pair, &from_value, depth + 1)?;
            assembled.push((to_field.name.clone(), mapped));
        }

        let missing: Vec<String> = to_rec
            .fields
            .iter()
            .filter(|field| {
                field.default.is_none() && !assembled.iter().any(|(name, _)| *name == field.name)
            })
            .map(|field| field.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(MapError::MissingFields {
                pair,
                fields: missing,
            });
        }

        // Construct in destination declaration order, defaults filling the gaps
        let fields = to_rec
            .fields
            .iter()
            .map(|field| {
                let mapped = match assembled.iter().position(|(name, _)| *name == field.name) {
                    Some(idx) => assembled.remove(idx).1,
                    None => field
                        .default
                        .clone()
                        .expect("unsatisfied destination field has a default"),
                };
                (field.name.clone(), mapped)
            })
            .collect();

        Ok(Value::Record {
            ty: pair.to,
            fields,
        })
    }
}

fn record_descriptor<'a>(ctx: &'a TypeContext, id: automap_types::TypeId, side: &str) -> &'a RecordType {
    ctx.get(id)
        .and_then(|ty| ty.as_record())
        .unwrap_or_else(|| panic!("{} must be a record", side))
}
