use automap_types::{
    DerivedField, FieldDef, ObjectType, RecordType, Type, TypeContext, TypeKind, Value,
};

#[test]
fn every_descriptor_has_exactly_one_kind() {
    let mut ctx = TypeContext::new();
    let int = ctx.int_type();
    let list = ctx.list_of(int);
    let set = ctx.set_of(int);
    let map = ctx.map_of(int, int);
    let rec = ctx.register_record(RecordType::new("Rec", vec![FieldDef::new("a", int)]));
    let obj = ctx.register_object(ObjectType::new("Obj", vec![("a".to_string(), int)]));
    let opaque = ctx.opaque("Mystery");

    let kind = |id| ctx.get(id).unwrap().kind();
    assert_eq!(kind(int), TypeKind::Primitive);
    assert_eq!(kind(list), TypeKind::Collection);
    assert_eq!(kind(set), TypeKind::Collection);
    assert_eq!(kind(map), TypeKind::KeyValue);
    assert_eq!(kind(rec), TypeKind::Record);
    assert_eq!(kind(obj), TypeKind::Object);
    assert_eq!(kind(opaque), TypeKind::Opaque);
}

#[test]
fn collection_descriptors_expose_their_element_type() {
    let mut ctx = TypeContext::new();
    let str_ = ctx.string_type();
    let list = ctx.list_of(str_);
    let set = ctx.set_of(str_);

    assert_eq!(ctx.get(list).unwrap().element(), Some(str_));
    assert_eq!(ctx.get(set).unwrap().element(), Some(str_));
    assert_eq!(ctx.get(str_).unwrap().element(), None);
}

#[test]
fn map_descriptors_expose_key_and_value_types() {
    let mut ctx = TypeContext::new();
    let int = ctx.int_type();
    let str_ = ctx.string_type();
    let map = ctx.map_of(int, str_);

    match ctx.get(map).unwrap() {
        Type::Map(m) => {
            assert_eq!(m.key, int);
            assert_eq!(m.value, str_);
        }
        other => panic!("expected a map descriptor, got {:?}", other),
    }
}

#[test]
fn record_fields_are_ordered_and_looked_up_by_name() {
    let mut ctx = TypeContext::new();
    let int = ctx.int_type();
    let str_ = ctx.string_type();
    let rec = RecordType::new(
        "Pair",
        vec![FieldDef::new("a", int), FieldDef::new("b", str_)],
    );

    assert_eq!(rec.field("a").map(|f| f.ty), Some(int));
    assert_eq!(rec.field("b").map(|f| f.ty), Some(str_));
    assert_eq!(rec.field("missing"), None);

    let id = ctx.register_record(rec);
    let names: Vec<&str> = ctx
        .get(id)
        .unwrap()
        .as_record()
        .unwrap()
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b"], "declaration order is preserved");
}

#[test]
fn derived_fields_carry_name_type_and_accessor() {
    fn get_a(instance: &Value) -> Value {
        instance.field("a").cloned().unwrap()
    }

    let mut ctx = TypeContext::new();
    let int = ctx.int_type();
    let rec = RecordType::new("Rec", vec![FieldDef::new("a", int)])
        .with_derived(vec![DerivedField::new("doubled", int, get_a)]);

    let derived = &rec.derived[0];
    assert_eq!(derived.name, "doubled");
    assert_eq!(derived.ty, int);

    let instance = Value::Record {
        ty: ctx.register_record(rec.clone()),
        fields: vec![("a".to_string(), Value::Int(21))],
    };
    assert_eq!((derived.get)(&instance), Value::Int(21));
}

#[test]
fn object_params_are_looked_up_by_name() {
    let mut ctx = TypeContext::new();
    let int = ctx.int_type();
    let base = ctx.register_object(ObjectType::new("Base", vec![("a".to_string(), int)]));
    let sub = ObjectType::new("Sub", vec![("a".to_string(), int)]).with_extends(base);

    assert_eq!(sub.param("a"), Some(int));
    assert_eq!(sub.param("missing"), None);
    assert_eq!(sub.extends, Some(base));
}

#[test]
fn defaults_live_on_field_definitions() {
    let mut ctx = TypeContext::new();
    let int = ctx.int_type();
    let rec = RecordType::new(
        "Rec",
        vec![
            FieldDef::new("required", int),
            FieldDef::with_default("optional", int, Value::Int(42)),
        ],
    );

    assert_eq!(rec.field("required").unwrap().default, None);
    assert_eq!(rec.field("optional").unwrap().default, Some(Value::Int(42)));
    ctx.register_record(rec);
}
