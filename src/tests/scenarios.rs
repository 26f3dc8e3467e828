use crate::{Identifier, MemoryError, MemorySpace, Span, Type, Value};
use pretty_assertions::assert_eq;

fn ident(name: &str, start: usize) -> Identifier {
    Identifier::new(name, Span::new(start, start + name.len()))
}

// int i = 0; str log; while i < 3 { log = "step"; i = i + 1 }
#[test]
fn loop_assignments_grow_heap_once_per_string_store() {
    let mut memory = MemorySpace::new();
    let i = ident("i", 4);
    let log = ident("log", 15);
    memory.declare(&i, Type::Integer);
    memory.set_value(&i, Value::Integer(0)).unwrap();
    memory.declare(&log, Type::String);

    while memory.get_value(&i).unwrap().as_integer().unwrap() < 3 {
        let step = memory.get_value(&i).unwrap().as_integer().unwrap();
        memory
            .set_value(&log, Value::String(format!("step {step}")))
            .unwrap();
        memory.set_value(&i, Value::Integer(step + 1)).unwrap();
    }

    assert_eq!(memory.get_value(&i).unwrap(), &Value::Integer(3));
    assert_eq!(memory.get_value(&log).unwrap(), &Value::from("step 2"));
    assert_eq!(
        memory.heap(),
        &[
            Value::from("step 0"),
            Value::from("step 1"),
            Value::from("step 2"),
        ]
    );
}

#[test]
fn equal_strings_are_not_interned() {
    let mut memory = MemorySpace::new();
    let a = ident("a", 0);
    let b = ident("b", 10);
    memory.declare(&a, Type::String);
    memory.declare(&b, Type::String);
    memory.set_value(&a, Value::from("same")).unwrap();
    memory.set_value(&b, Value::from("same")).unwrap();
    assert_eq!(memory.heap_len(), 2);
    assert_eq!(memory.get_value(&a).unwrap(), memory.get_value(&b).unwrap());
}

#[test]
fn evaluator_checks_declaration_before_use() {
    let mut memory = MemorySpace::new();
    let flag = ident("flag", 5);
    assert!(!memory.is_declared(&flag));
    assert!(matches!(
        memory.get_type(&flag),
        Err(MemoryError::UndeclaredVariable { .. })
    ));

    memory.declare(&flag, "bool".parse().unwrap());
    assert!(memory.is_declared(&flag));
    assert_eq!(memory.get_type(&flag), Ok(Type::Boolean));

    let err = memory.get_value(&flag).unwrap_err();
    assert_eq!(
        err,
        MemoryError::UnpopulatedRead {
            name: "flag".into(),
            span: Span::new(5, 9),
        }
    );
    assert_eq!(
        err.to_string(),
        "Variable `flag` was read before a value was assigned"
    );

    memory.set_value(&flag, Value::Boolean(true)).unwrap();
    assert_eq!(memory.get_value(&flag).unwrap().as_bool(), Some(true));
}

#[test]
fn type_survives_every_store() {
    let mut memory = MemorySpace::new();
    let name = ident("name", 0);
    memory.declare(&name, Type::String);
    for word in ["x", "y", "z"] {
        memory.set_value(&name, Value::from(word)).unwrap();
        assert_eq!(memory.get_type(&name), Ok(Type::String));
    }
    let declared: Vec<_> = memory
        .bindings()
        .map(|(ident, ty)| (ident.name().to_string(), ty))
        .collect();
    assert_eq!(declared, vec![("name".to_string(), Type::String)]);
}
