//! Type context: interning and lookup of type descriptors

use crate::ty::{MapType, ObjectType, RecordType, Type, TypeId};
use rustc_hash::FxHashMap;

/// Append-only store of type descriptors
///
/// Hands out a `TypeId` per interned descriptor. The four primitive types
/// are interned at construction; nominal types (records, objects, opaques)
/// are additionally indexed by name. Descriptors are immutable once
/// interned.
#[derive(Debug, Clone)]
pub struct TypeContext {
    types: Vec<Type>,

    /// Name index for nominal types
    names: FxHashMap<String, TypeId>,

    int: TypeId,
    float: TypeId,
    str_: TypeId,
    bool_: TypeId,
}

impl TypeContext {
    /// Create a context with the four primitive types pre-interned
    pub fn new() -> Self {
        let types = vec![Type::Int, Type::Float, Type::Str, Type::Bool];
        TypeContext {
            types,
            names: FxHashMap::default(),
            int: TypeId(0),
            float: TypeId(1),
            str_: TypeId(2),
            bool_: TypeId(3),
        }
    }

    /// The `int` type
    pub fn int_type(&self) -> TypeId {
        self.int
    }

    /// The `float` type
    pub fn float_type(&self) -> TypeId {
        self.float
    }

    /// The `str` type
    pub fn string_type(&self) -> TypeId {
        self.str_
    }

    /// The `bool` type
    pub fn bool_type(&self) -> TypeId {
        self.bool_
    }

    /// Intern a descriptor, returning its id
    ///
    /// Structurally equal descriptors intern to the same id. Equality is a
    /// linear scan: descriptors can hold float defaults, so they have no
    /// `Hash`, and contexts are small and write-rarely.
    pub fn intern(&mut self, ty: Type) -> TypeId {
        if let Some(pos) = self.types.iter().position(|t| *t == ty) {
            return TypeId(pos as u32);
        }
        let id = TypeId(self.types.len() as u32);
        if let Some(name) = nominal_name(&ty) {
            self.names.insert(name.to_string(), id);
        }
        self.types.push(ty);
        id
    }

    /// Intern `list[elem]`
    pub fn list_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(Type::List(elem))
    }

    /// Intern `set[elem]`
    pub fn set_of(&mut self, elem: TypeId) -> TypeId {
        self.intern(Type::Set(elem))
    }

    /// Intern `dict[key, value]`
    pub fn map_of(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(Type::Map(MapType { key, value }))
    }

    /// Intern an opaque type with the given name
    pub fn opaque(&mut self, name: impl Into<String>) -> TypeId {
        self.intern(Type::Opaque(name.into()))
    }

    /// Register a record type
    pub fn register_record(&mut self, record: RecordType) -> TypeId {
        self.intern(Type::Record(record))
    }

    /// Register an object type
    pub fn register_object(&mut self, object: ObjectType) -> TypeId {
        self.intern(Type::Object(object))
    }

    /// Get a descriptor by id
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.0 as usize)
    }

    /// Find a nominal type by name
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    /// Number of interned descriptors
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the context holds no descriptors (never true: primitives are
    /// pre-interned)
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Render a human-readable name for a type
    pub fn name_of(&self, id: TypeId) -> String {
        match self.get(id) {
            None => id.to_string(),
            Some(ty) => match ty {
                Type::Int => "int".to_string(),
                Type::Float => "float".to_string(),
                Type::Str => "str".to_string(),
                Type::Bool => "bool".to_string(),
                Type::List(elem) => format!("list[{}]", self.name_of(*elem)),
                Type::Set(elem) => format!("set[{}]", self.name_of(*elem)),
                Type::Map(map) => {
                    format!("dict[{}, {}]", self.name_of(map.key), self.name_of(map.value))
                }
                Type::Record(rec) => rec.name.clone(),
                Type::Object(obj) => obj.name.clone(),
                Type::Opaque(name) => name.clone(),
            },
        }
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

fn nominal_name(ty: &Type) -> Option<&str> {
    match ty {
        Type::Record(rec) => Some(&rec.name),
        Type::Object(obj) => Some(&obj.name),
        Type::Opaque(name) => Some(name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::FieldDef;

    #[test]
    fn primitives_are_pre_interned() {
        let mut ctx = TypeContext::new();
        assert_eq!(ctx.int_type(), ctx.intern(Type::Int));
        assert_eq!(ctx.string_type(), ctx.intern(Type::Str));
        assert_eq!(ctx.len(), 4);
    }

    #[test]
    fn interning_dedups_structurally_equal_types() {
        let mut ctx = TypeContext::new();
        let int = ctx.int_type();
        let a = ctx.list_of(int);
        let b = ctx.list_of(int);
        assert_eq!(a, b);
    }

    #[test]
    fn nominal_types_are_indexed_by_name() {
        let mut ctx = TypeContext::new();
        let int = ctx.int_type();
        let id = ctx.register_record(RecordType::new("Point", vec![FieldDef::new("x", int)]));
        assert_eq!(ctx.lookup("Point"), Some(id));
        assert_eq!(ctx.name_of(id), "Point");
    }

    #[test]
    fn rendered_names_nest() {
        let mut ctx = TypeContext::new();
        let int = ctx.int_type();
        let str_ = ctx.string_type();
        let inner = ctx.set_of(int);
        let map = ctx.map_of(str_, inner);
        assert_eq!(ctx.name_of(map), "dict[str, set[int]]");
    }
}
