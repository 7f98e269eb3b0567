use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_tag_follows_variant() {
    assert_eq!(Value::Int(3).type_tag(), TypeTag::INT);
    assert_eq!(Value::Bool(true).type_tag(), TypeTag::BOOL);
    assert_eq!(Value::Void.type_tag(), TypeTag::VOID);

    let native = NativeFunction::new("noop", |_| Ok(Value::Void));
    assert_eq!(Value::Native(native).type_tag(), TypeTag::EXTERN);

    let def = FunctionDef {
        name: "f".to_string(),
        params: Vec::new(),
        body: Vec::new(),
    };
    assert_eq!(Value::Function(Rc::new(def)).type_tag(), TypeTag::FUNCTION);
}

#[test]
fn test_inferred_and_explicit_tags() {
    assert_eq!(TypedValue::inferred(Value::Bool(false)).tag, TypeTag::BOOL);
    let retagged = TypedValue::with_tag(TypeTag::INT, Value::Bool(false));
    assert_eq!(retagged.tag, TypeTag::INT);
    assert_eq!(retagged.value, Value::Bool(false));
    assert_eq!(TypedValue::void().tag, TypeTag::VOID);
}

#[test]
fn test_native_call_and_identity() {
    let double = NativeFunction::new("double", |args| match args {
        [Value::Int(n)] => Ok(Value::Int(n * 2)),
        _ => Err("expected one int".to_string()),
    });
    assert_eq!(double.name(), "double");
    assert_eq!(double.call(&[Value::Int(21)]), Ok(Value::Int(42)));
    assert_eq!(double.call(&[]), Err("expected one int".to_string()));

    let same = double.clone();
    assert_eq!(double, same);
    assert_ne!(double, NativeFunction::new("double", |_| Ok(Value::Void)));
}

#[test]
fn test_display() {
    assert_eq!(Value::Int(-4).to_string(), "-4");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Void.to_string(), "void");
    let native = NativeFunction::new("print", |_| Ok(Value::Void));
    assert_eq!(Value::Native(native).to_string(), "<extern print>");
}
