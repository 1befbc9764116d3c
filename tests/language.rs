use reckon::{
    Options,
    error::{Error, ParseError, RuntimeError},
    interpreter::calculator::{Calculator, Outcome},
    run,
};

fn session(src: &str, options: Options) -> (String, String) {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();
    run(src.as_bytes(), &mut output, &mut diagnostics, options).unwrap_or_else(|e| {
                                                                    panic!("Session failed: {e}")
                                                                });
    (String::from_utf8(output).unwrap(), String::from_utf8(diagnostics).unwrap())
}

fn assert_output(src: &str, expected: &str) {
    let (output, diagnostics) = session(src, Options::default());
    assert_eq!(output, expected, "output of {src:?}");
    assert!(diagnostics.is_empty(), "unexpected diagnostics for {src:?}: {diagnostics}");
}

fn first_value(src: &str) -> f64 {
    match Calculator::new(src.as_bytes()).evaluate_next() {
        Ok(Outcome::Value(v)) => v,
        Ok(Outcome::Quit) => panic!("{src:?} quit instead of producing a value"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn first_error(src: &str) -> Error {
    match Calculator::new(src.as_bytes()).evaluate_next() {
        Err(e) => e,
        Ok(outcome) => panic!("{src:?} succeeded with {outcome:?} but was expected to fail"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_output("1 + 2 =", "=3\n");
    assert_output("7 * 9 =", "=63\n");
    assert_output("8 - 5 =", "=3\n");
    assert_output("10 / 4 =", "=2.5\n");
    assert_output("0.1 + 0.2 =", "=0.3\n");
}

#[test]
fn operator_precedence_and_associativity() {
    assert_eq!(first_value("2+3*4="), 14.0);
    assert_eq!(first_value("(2+3)*4="), 20.0);
    assert_eq!(first_value("10-4-3="), 3.0);
    assert_eq!(first_value("48/4/2="), 6.0);
    assert_eq!(first_value("2*3/4="), 1.5);
    assert_eq!(first_value("((1))="), 1.0);
}

#[test]
fn unary_signs_bind_tightest() {
    assert_eq!(first_value("- -3="), 3.0);
    assert_eq!(first_value("-2*3="), -6.0);
    assert_eq!(first_value("+4="), 4.0);
    assert_eq!(first_value("-(2+3)="), -5.0);
    assert_eq!(first_value("2--1="), 3.0);
}

#[test]
fn remainder_follows_the_dividend() {
    assert_eq!(first_value("7%3="), 1.0);
    assert_eq!(first_value("-7%3="), -1.0);
    assert_eq!(first_value("7%-3="), 1.0);
    assert_eq!(first_value("5.5%2="), 1.5);
}

#[test]
fn builtin_functions() {
    assert_eq!(first_value("pow(2,10)="), 1024.0);
    assert_eq!(first_value("pow(2,-1)="), 0.5);
    assert_eq!(first_value("pow(2, 2.9)="), 4.0);
    assert_eq!(first_value("pow(1+1, 3)*2="), 16.0);
    assert_eq!(first_value("sqrt(4)="), 2.0);
    assert_eq!(first_value("sqrt(pow(3,2)+pow(4,2))="), 5.0);
    assert_eq!(first_value("-sqrt(9)="), -3.0);
}

#[test]
fn constants_are_predeclared() {
    assert_output("pi =", "=3.14159\n");
    assert_output("e =", "=2.71828\n");
    assert_output("2 * pi =", "=6.28319\n");
}

#[test]
fn declaration_then_use() {
    assert_output("let x = 5 = x + 1 =", "=5\n=6\n");
    assert_output("let r = 2 = pi * r * r =", "=2\n=12.5664\n");
    assert_output("let a1 = 3 = let b2 = a1 * 2 = a1 + b2 =", "=3\n=6\n=9\n");
}

#[test]
fn declaration_value_is_stored() {
    let mut calculator = Calculator::new("let width = 4 * 2 =".as_bytes());
    assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(8.0));
    assert_eq!(calculator.symbols().lookup("width", 1).unwrap(), 8.0);
}

#[test]
fn redeclaring_a_name_is_rejected_and_keeps_the_first_value() {
    let mut calculator = Calculator::new("let x = 1 = let x = 2 = x =".as_bytes());
    assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(1.0));

    // `x` is already a number by the time the declaration sees it.
    let err = calculator.evaluate_next().unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::ExpectedName { .. })), "{err}");
    calculator.recover().unwrap();

    assert_eq!(calculator.symbols().lookup("x", 1).unwrap(), 1.0);
}

#[test]
fn undefined_variable_is_error() {
    let err = first_error("y + 1 =");
    assert!(matches!(&err, Error::Runtime(RuntimeError::UndefinedVariable { name, .. }) if name == "y"),
            "{err}");
}

#[test]
fn division_and_remainder_by_zero_are_errors() {
    for src in ["1 / 0 =", "0 / 0 =", "-5 / (2 - 2) ="] {
        assert!(matches!(first_error(src), Error::Runtime(RuntimeError::DivideByZero { .. })),
                "{src}");
    }
    for src in ["1 % 0 =", "-3.5 % 0 ="] {
        assert!(matches!(first_error(src), Error::Runtime(RuntimeError::ModuloByZero { .. })),
                "{src}");
    }
}

#[test]
fn function_argument_errors() {
    assert!(matches!(first_error("sqrt(-1)="),
                     Error::Runtime(RuntimeError::NegativeSqrt { .. })));
    assert!(matches!(first_error("pow(2, 1e10)="),
                     Error::Runtime(RuntimeError::ExponentOutOfRange { .. })));
    assert!(matches!(first_error("pow 2 ="),
                     Error::Parse(ParseError::ExpectedToken { expected: '(', .. })));
    assert!(matches!(first_error("pow(2 3) ="),
                     Error::Parse(ParseError::ExpectedToken { expected: ',', .. })));
    assert!(matches!(first_error("sqrt(4 ="),
                     Error::Parse(ParseError::ExpectedToken { expected: ')', .. })));
}

#[test]
fn syntax_errors() {
    assert!(matches!(first_error("(1 + 2 ="),
                     Error::Parse(ParseError::ExpectedToken { expected: ')', .. })));
    assert!(matches!(first_error("* 3 ="), Error::Parse(ParseError::ExpectedPrimary { .. })));
    assert!(matches!(first_error("let 3 = 4 ="), Error::Parse(ParseError::ExpectedName { .. })));
    assert!(matches!(first_error("let pi = 4 ="), Error::Parse(ParseError::ExpectedName { .. })));
    assert!(matches!(first_error("let y 4 ="),
                     Error::Parse(ParseError::ExpectedAssignment { .. })));
    assert!(matches!(&first_error("2 # 3 ="),
                     Error::Parse(ParseError::BadToken { token, .. }) if token == "#"));
}

#[test]
fn recovery_after_incomplete_declaration() {
    let (output, diagnostics) = session("let x = = 1 + 1 = x", Options::default());
    assert_eq!(output, "=2\n");
    assert_eq!(diagnostics, "Error on line 1: Primary expected.\n");

    let mut calculator = Calculator::new("let x = = 7 =".as_bytes());
    assert!(calculator.evaluate_next().is_err());
    calculator.recover().unwrap();
    assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(7.0));
    assert!(!calculator.symbols().is_declared("x"));
}

#[test]
fn recovery_skips_to_the_next_terminator() {
    let (output, diagnostics) = session("1 / 0 + 5 * 2 = 2 =\n(1 + 2 = 4 =", Options::default());
    assert_eq!(output, "=2\n=4\n");
    assert_eq!(diagnostics,
               "Error on line 1: Divide by zero.\nError on line 2: ')' expected.\n");
}

#[test]
fn errors_report_their_line() {
    let (output, diagnostics) = session("1 =\n\n2 / 0 =\n3 =", Options::default());
    assert_eq!(output, "=1\n=3\n");
    assert_eq!(diagnostics, "Error on line 3: Divide by zero.\n");
}

#[test]
fn statements_may_span_lines() {
    assert_output("1 +\n  2\n=\n", "=3\n");
}

#[test]
fn quit_commands_stop_the_session() {
    assert_output("1 = exit 2 =", "=1\n");
    assert_output("1 = x 2 =", "=1\n");
    assert_output("= = = 3 = x", "=3\n");
}

#[test]
fn x_quits_only_while_undeclared() {
    assert_output("let x = 5 = x + 1 = x = exit 1 =", "=5\n=6\n=5\n");
}

#[test]
fn end_of_input_ends_the_last_statement() {
    assert_output("3 + 4", "=7\n");
    assert_output("", "");
    assert_output("  \n\n", "");
}

#[test]
fn adjacent_values_are_separate_statements() {
    assert_output("2 3 =", "=2\n=3\n");
}

#[test]
fn output_precision() {
    let (output, _) = session("pi = 1000000 = 123456 = 0.0001 = 0.00001 =", Options::default());
    assert_eq!(output, "=3.14159\n=1e+06\n=123456\n=0.0001\n=1e-05\n");

    let (output, _) = session("pi =", Options { precision: 12 });
    assert_eq!(output, "=3.1415926535\n");
}

#[test]
fn output_precision_is_clamped() {
    let (output, diagnostics) = session("1.5 = 0.1 =", Options { precision: 70_000 });
    assert_eq!(output, "=1.5\n=0.10000000000000001\n");
    assert!(diagnostics.is_empty());
}

#[test]
fn invalid_utf8_does_not_end_the_session() {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();
    run(&b"1 = \xff = 2 = 3 ="[..], &mut output, &mut diagnostics, Options::default()).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "=1\n=2\n=3\n");
    assert_eq!(String::from_utf8(diagnostics).unwrap(),
               "Error on line 1: Bad token '\u{FFFD}'.\n");
}

#[test]
fn assignment_syntax_does_not_rebind() {
    let mut calculator = Calculator::new("let v = 1 = v = v + 1 =".as_bytes());
    assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(1.0));
    assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(1.0));
    assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(2.0));
    assert_eq!(calculator.symbols().lookup("v", 1).unwrap(), 1.0);
}
