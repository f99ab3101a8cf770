//! Strategy registry: ordered resolution of type pairs to strategies

use crate::error::MapError;
use crate::strategy::{
    CollectionStrategy, KeyValueStrategy, MappingStrategy, ObjectStrategy, PrimitiveStrategy,
    RecordStrategy,
};
use automap_types::{TypeContext, TypePair};
use std::sync::OnceLock;

/// An ordered, fixed sequence of mapping strategies
///
/// Order encodes precedence: resolution returns the first strategy whose
/// `is_compatible` holds, so even if several strategies would accept a pair,
/// ordering is the tie-break. Immutable after construction; strategies are
/// stateless, so a registry is freely shared across threads.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn MappingStrategy>>,
}

impl StrategyRegistry {
    /// Create a registry with the default precedence order:
    /// Primitive → Collection → KeyValue → Record → Object
    pub fn new() -> Self {
        StrategyRegistry {
            strategies: vec![
                Box::new(PrimitiveStrategy),
                Box::new(CollectionStrategy),
                Box::new(KeyValueStrategy),
                Box::new(RecordStrategy),
                Box::new(ObjectStrategy),
            ],
        }
    }

    /// Resolve a pair to the first compatible strategy
    pub fn resolve(
        &self,
        ctx: &TypeContext,
        pair: TypePair,
    ) -> Result<&dyn MappingStrategy, MapError> {
        self.strategies
            .iter()
            .map(|s| s.as_ref())
            .find(|s| s.is_compatible(ctx, pair))
            .ok_or(MapError::MapperNotFound { pair })
    }

    /// Number of registered strategies
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the registry holds no strategies
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<StrategyRegistry> = OnceLock::new();

/// The process-wide registry, initialized on first use and never mutated
pub fn global() -> &'static StrategyRegistry {
    GLOBAL.get_or_init(StrategyRegistry::new)
}
