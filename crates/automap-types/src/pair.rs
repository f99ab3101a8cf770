//! Type pairs: the mapping engine's resolution key

use crate::ty::TypeId;
use std::fmt;

/// An ordered (source type, destination type) pair
///
/// The dispatch key throughout the engine: strategies test compatibility
/// against a pair and are invoked with it. Constructed fresh per resolution
/// request and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    /// Source type
    pub from: TypeId,
    /// Destination type
    pub to: TypeId,
}

impl TypePair {
    /// Create a pair
    pub fn new(from: TypeId, to: TypeId) -> Self {
        TypePair { from, to }
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TypeContext;

    #[test]
    fn equality_is_structural_and_ordered() {
        let ctx = TypeContext::new();
        let int = ctx.int_type();
        let str_ = ctx.string_type();

        assert_eq!(TypePair::new(int, str_), TypePair::new(int, str_));
        assert_ne!(TypePair::new(int, str_), TypePair::new(str_, int));
    }

    #[test]
    fn display_renders_arrow_form() {
        let ctx = TypeContext::new();
        let pair = TypePair::new(ctx.int_type(), ctx.string_type());
        assert_eq!(pair.to_string(), "TypeId(0) -> TypeId(2)");
    }
}
