//! Dynamic value representation
//!
//! Values form an owned tree: scalars, collections of values, and
//! record/object instances tagged with their concrete type. There is no
//! sharing between nodes, so a value's nesting depth is always finite.

use crate::ty::TypeId;
use std::fmt;

/// A dynamic value handled by the mapping engine
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer
    Int(i64),
    /// IEEE 754 double precision float
    Float(f64),
    /// String
    Str(String),
    /// Boolean
    Bool(bool),
    /// Ordered list of values
    List(Vec<Value>),
    /// Set of values, deduplicated preserving first-occurrence order
    Set(Vec<Value>),
    /// Key-value entries in insertion order
    Map(Vec<(Value, Value)>),
    /// Record instance with its concrete type and fields in declaration order
    Record {
        /// Concrete record type
        ty: TypeId,
        /// Field name to value, in declaration order
        fields: Vec<(String, Value)>,
    },
    /// Object instance with its concrete type and named attributes
    Object {
        /// Concrete object type
        ty: TypeId,
        /// Attribute name to value
        attrs: Vec<(String, Value)>,
    },
}

impl Value {
    /// Create a string value
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Construct a set from an ordered sequence of values
    ///
    /// Deduplicates, keeping the first occurrence of each value. This is the
    /// destination constructor's semantics, not a mapping policy: mapping a
    /// list into a set dedups only because set construction does.
    pub fn new_set(items: Vec<Value>) -> Self {
        let mut out: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            if !out.contains(&item) {
                out.push(item);
            }
        }
        Value::Set(out)
    }

    /// Construct a map from an ordered sequence of entries
    ///
    /// A duplicate key overwrites the previous value while keeping the key's
    /// original position.
    pub fn new_map(entries: Vec<(Value, Value)>) -> Self {
        let mut out: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match out.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => out.push((key, value)),
            }
        }
        Value::Map(out)
    }

    /// Name of this value's category, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "dict",
            Value::Record { .. } => "record",
            Value::Object { .. } => "object",
        }
    }

    /// The concrete type id, for values that carry one
    pub fn concrete_type(&self) -> Option<TypeId> {
        match self {
            Value::Record { ty, .. } | Value::Object { ty, .. } => Some(*ty),
            _ => None,
        }
    }

    /// Look up a record field by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record { fields, .. } => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Look up an object attribute by name
    pub fn attr(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object { attrs, .. } => attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Set(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Record { ty, fields } => {
                write!(f, "{}(", ty)?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", name, value)?;
                }
                write!(f, ")")
            }
            Value::Object { ty, attrs } => {
                write!(f, "{}(", ty)?;
                for (i, (name, value)) in attrs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", name, value)?;
                }
                write!(f, ")")
            }
        }
    }
}
