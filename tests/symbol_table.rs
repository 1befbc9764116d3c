use reckon::{
    error::RuntimeError,
    interpreter::symbol_table::{E, PI, SymbolTable},
};

#[test]
fn declare_returns_the_value() {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.declare("x", 5.0, 1).unwrap(), 5.0);
    assert!(table.is_declared("x"));
    assert_eq!(table.lookup("x", 1).unwrap(), 5.0);
    assert_eq!(table.len(), 1);
}

#[test]
fn duplicate_declaration_keeps_the_first_value() {
    let mut table = SymbolTable::new();
    table.declare("x", 1.0, 1).unwrap();

    let err = table.declare("x", 2.0, 4).unwrap_err();
    assert_eq!(err,
               RuntimeError::DuplicateDeclaration { name: "x".to_string(),
                                                    line: 4, });
    assert_eq!(table.lookup("x", 1).unwrap(), 1.0);
    assert_eq!(table.len(), 1);
}

#[test]
fn lookup_of_unknown_name_fails() {
    let table = SymbolTable::new();
    assert_eq!(table.lookup("nope", 2).unwrap_err(),
               RuntimeError::UndefinedVariable { name: "nope".to_string(),
                                                 line: 2, });
    assert!(!table.is_declared("nope"));
}

#[test]
fn set_overwrites_declared_names_only() {
    let mut table = SymbolTable::new();
    table.declare("x", 1.0, 1).unwrap();

    table.set("x", 10.0, 1).unwrap();
    assert_eq!(table.lookup("x", 1).unwrap(), 10.0);

    assert!(matches!(table.set("y", 3.0, 7),
                     Err(RuntimeError::UndefinedVariable { line: 7, .. })));
    assert!(!table.is_declared("y"));
}

#[test]
fn names_are_case_sensitive() {
    let mut table = SymbolTable::new();
    table.declare("x", 1.0, 1).unwrap();
    assert_eq!(table.declare("X", 2.0, 1).unwrap(), 2.0);
    assert_eq!(table.len(), 2);
}

#[test]
fn constants() {
    let table = SymbolTable::with_constants();
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("pi", 1).unwrap(), PI);
    assert_eq!(table.lookup("e", 1).unwrap(), E);
}
