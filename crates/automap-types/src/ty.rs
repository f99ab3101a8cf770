//! Core type descriptor definitions for the automap type system

use crate::value::Value;
use std::fmt;

/// Unique identifier for a type in the type context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    /// Get the raw index value
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Closed set of type categories
///
/// Strategy compatibility checks compare kinds by equality rather than
/// probing descriptor structure, so every descriptor maps to exactly one
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Scalar kinds: int, float, str, bool
    Primitive,
    /// Ordered collections: list, set
    Collection,
    /// Key-value collections: dict
    KeyValue,
    /// Record types with declaratively known fields
    Record,
    /// General object types constructible via a parameterized initializer
    Object,
    /// Named types no strategy can map
    Opaque,
}

/// Key-value collection type: dict[K, V]
#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    /// Key type
    pub key: TypeId,
    /// Value type
    pub value: TypeId,
}

/// A declared field on a record type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name
    pub name: String,
    /// Field type
    pub ty: TypeId,
    /// Default value used when mapping supplies no value for this field
    pub default: Option<Value>,
}

impl FieldDef {
    /// Create a field with no default
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        FieldDef {
            name: name.into(),
            ty,
            default: None,
        }
    }

    /// Create a field with a default value
    pub fn with_default(name: impl Into<String>, ty: TypeId, default: Value) -> Self {
        FieldDef {
            name: name.into(),
            ty,
            default: Some(default),
        }
    }
}

/// Accessor function for a derived field, invoked on the source instance
pub type DerivedGet = fn(&Value) -> Value;

/// A computed read-only field on a record type
///
/// Models property-style accessors: a name, a declared return type, and a
/// function evaluated against the record instance during mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedField {
    /// Derived field name
    pub name: String,
    /// Declared return type of the accessor
    pub ty: TypeId,
    /// The accessor itself
    pub get: DerivedGet,
}

impl DerivedField {
    /// Create a derived field
    pub fn new(name: impl Into<String>, ty: TypeId, get: DerivedGet) -> Self {
        DerivedField {
            name: name.into(),
            ty,
            get,
        }
    }
}

/// Record type: declaratively known, named, typed fields plus derived fields
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    /// Record name (nominal identity)
    pub name: String,
    /// Declared fields, in declaration order
    pub fields: Vec<FieldDef>,
    /// Derived (computed read-only) fields, in declaration order
    pub derived: Vec<DerivedField>,
}

impl RecordType {
    /// Create a record type with no derived fields
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        RecordType {
            name: name.into(),
            fields,
            derived: Vec::new(),
        }
    }

    /// Attach derived fields
    pub fn with_derived(mut self, derived: Vec<DerivedField>) -> Self {
        self.derived = derived;
        self
    }

    /// Look up a declared field by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// General object type: fields are inferred from constructor parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    /// Object type name (nominal identity)
    pub name: String,
    /// Constructor parameters, in declaration order
    pub params: Vec<(String, TypeId)>,
    /// Parent type, if any
    pub extends: Option<TypeId>,
}

impl ObjectType {
    /// Create an object type with no parent
    pub fn new(name: impl Into<String>, params: Vec<(String, TypeId)>) -> Self {
        ObjectType {
            name: name.into(),
            params,
            extends: None,
        }
    }

    /// Set the parent type
    pub fn with_extends(mut self, parent: TypeId) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Look up a constructor parameter's type by name
    pub fn param(&self, name: &str) -> Option<TypeId> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ty)| *ty)
    }
}

/// A type descriptor
///
/// The runtime-inspectable representation of a type: its kind plus the
/// metadata each kind needs (element types for collections, field lists for
/// records, constructor parameters for objects).
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Signed integer
    Int,
    /// IEEE 754 double precision float
    Float,
    /// String
    Str,
    /// Boolean
    Bool,
    /// Ordered list with the given element type
    List(TypeId),
    /// Deduplicating set with the given element type
    Set(TypeId),
    /// Key-value collection
    Map(MapType),
    /// Record with declared fields
    Record(RecordType),
    /// General object with constructor parameters
    Object(ObjectType),
    /// Named type no strategy can map
    Opaque(String),
}

impl Type {
    /// The kind of this descriptor
    pub fn kind(&self) -> TypeKind {
        match self {
            Type::Int | Type::Float | Type::Str | Type::Bool => TypeKind::Primitive,
            Type::List(_) | Type::Set(_) => TypeKind::Collection,
            Type::Map(_) => TypeKind::KeyValue,
            Type::Record(_) => TypeKind::Record,
            Type::Object(_) => TypeKind::Object,
            Type::Opaque(_) => TypeKind::Opaque,
        }
    }

    /// Whether this is one of the four scalar kinds
    pub fn is_primitive(&self) -> bool {
        self.kind() == TypeKind::Primitive
    }

    /// Whether this is an ordered collection (never true for key-value kinds)
    pub fn is_collection(&self) -> bool {
        self.kind() == TypeKind::Collection
    }

    /// Whether this is a key-value collection
    pub fn is_key_value(&self) -> bool {
        self.kind() == TypeKind::KeyValue
    }

    /// Whether this is a record
    pub fn is_record(&self) -> bool {
        self.kind() == TypeKind::Record
    }

    /// Whether this is a general object
    pub fn is_object(&self) -> bool {
        self.kind() == TypeKind::Object
    }

    /// The record descriptor, if this is a record type
    pub fn as_record(&self) -> Option<&RecordType> {
        match self {
            Type::Record(rec) => Some(rec),
            _ => None,
        }
    }

    /// The object descriptor, if this is an object type
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The element type, if this is an ordered collection
    pub fn element(&self) -> Option<TypeId> {
        match self {
            Type::List(elem) | Type::Set(elem) => Some(*elem),
            _ => None,
        }
    }
}
