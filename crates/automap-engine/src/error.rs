//! Mapping engine errors
//!
//! All variants are fail-fast: a failure inside a nested field, element, or
//! entry mapping propagates unchanged through every enclosing strategy call,
//! so the caller always sees the innermost error.

use automap_types::{TypeId, TypePair, Value};
use thiserror::Error;

/// Errors that can occur while resolving or performing a mapping
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MapError {
    /// The runtime type of a supplied value does not equal the declared
    /// source type
    #[error("value '{value}' is not of type '{expected}'")]
    ValueType {
        /// The offending value
        value: Value,
        /// The declared source type
        expected: TypeId,
    },

    /// No strategy in the registry is compatible with the type pair
    #[error("object mapper not found for type pair '{pair}'")]
    MapperNotFound {
        /// The unresolved pair
        pair: TypePair,
    },

    /// One or more destination record fields could not be populated and
    /// have no default
    #[error("missing fields for type pair '{pair}': {}", .fields.join(", "))]
    MissingFields {
        /// The record pair being mapped
        pair: TypePair,
        /// Every unsatisfied field name, in destination declaration order
        fields: Vec<String>,
    },

    /// A primitive coercion failed
    #[error("cannot convert '{value}' to '{target}': {reason}")]
    Conversion {
        /// The value that failed to convert
        value: Value,
        /// The destination primitive type
        target: TypeId,
        /// Why the conversion failed
        reason: String,
    },

    /// The recursion depth guard tripped
    #[error("mapping depth limit exceeded for type pair '{pair}'")]
    RecursionLimit {
        /// The pair being mapped when the limit was hit
        pair: TypePair,
    },
}
