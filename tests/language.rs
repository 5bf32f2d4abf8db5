use numera::{
    error::{InterpretError, ParseError, RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, tokenize},
        symbol_table::SymbolTable,
        value::Value,
    },
    position::{Position, Span},
    report::{render_error, underline},
    run,
};

fn eval_fresh(source: &str) -> Result<Value, InterpretError> {
    let mut context = Context::root("<program>");
    run(source, &mut context)
}

fn assert_evaluates_to(source: &str, expected: Value) {
    match eval_fresh(source) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {source:?}"),
        Err(e) => panic!("Script failed: {source:?}: {e}"),
    }
}

fn assert_failure(source: &str) {
    if eval_fresh(source).is_ok() {
        panic!("Script succeeded but was expected to fail: {source:?}")
    }
}

#[test]
fn basic_arithmetic() {
    assert_evaluates_to("1 + 2", Value::Integer(3));
    assert_evaluates_to("7 * 9", Value::Integer(63));
    assert_evaluates_to("8 - 5", Value::Integer(3));
    assert_evaluates_to("10 / 2", Value::Integer(5));
}

#[test]
fn precedence_and_grouping() {
    assert_evaluates_to("1 + 2 * 3", Value::Integer(7));
    assert_evaluates_to("(1 + 2) * 3", Value::Integer(9));
    assert_evaluates_to("10 - 4 - 3", Value::Integer(3));
    assert_evaluates_to("100 / 10 / 5", Value::Integer(2));
}

#[test]
fn power_is_right_associative() {
    assert_evaluates_to("2 ^ 3 ^ 2", Value::Integer(512));
    assert_evaluates_to("2 ^ 10", Value::Integer(1024));
}

#[test]
fn power_binds_tighter_than_sign() {
    // The sign applies to the whole power on the left...
    assert_evaluates_to("-2 ^ 2", Value::Integer(-4));
    // ...but a signed exponent is legal because the right operand re-enters
    // at the sign level.
    assert_evaluates_to("2 ^ -2", Value::Real(0.25));
}

#[test]
fn unary_signs() {
    assert_evaluates_to("-5", Value::Integer(-5));
    assert_evaluates_to("+5", Value::Integer(5));
    assert_evaluates_to("--5", Value::Integer(5));
    assert_evaluates_to("-2.5", Value::Real(-2.5));
}

#[test]
fn integer_division_truncates() {
    assert_evaluates_to("7 / 2", Value::Integer(3));
    assert_evaluates_to("-7 / 2", Value::Integer(-3));
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    assert_evaluates_to("7.0 / 2", Value::Real(3.5));
    assert_evaluates_to("1 + 0.5", Value::Real(1.5));
    assert_evaluates_to("2 ^ 0.5", Value::Real(2.0_f64.powf(0.5)));
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_evaluates_to("1 == 1", Value::Integer(1));
    assert_evaluates_to("1 != 1", Value::Integer(0));
    assert_evaluates_to("2 < 3", Value::Integer(1));
    assert_evaluates_to("2 > 3", Value::Integer(0));
    assert_evaluates_to("3 <= 3", Value::Integer(1));
    assert_evaluates_to("3 >= 4", Value::Integer(0));
    assert_evaluates_to("1 < 1.5", Value::Integer(1));
}

#[test]
fn logical_operators() {
    assert_evaluates_to("1 and 1", Value::Integer(1));
    assert_evaluates_to("1 and 0", Value::Integer(0));
    assert_evaluates_to("0 or 1", Value::Integer(1));
    assert_evaluates_to("0 or 0", Value::Integer(0));
    assert_evaluates_to("not 0", Value::Integer(1));
    assert_evaluates_to("not 5", Value::Integer(0));
    assert_evaluates_to("not not 1", Value::Integer(1));
    assert_evaluates_to("1 < 2 and 2 < 3", Value::Integer(1));
}

#[test]
fn builtin_constants() {
    assert_evaluates_to("null", Value::Integer(0));
    assert_evaluates_to("true", Value::Integer(1));
    assert_evaluates_to("false", Value::Integer(0));
    assert_evaluates_to("true and false", Value::Integer(0));
    assert_evaluates_to("true or false", Value::Integer(1));
}

#[test]
fn declaration_yields_its_value() {
    assert_evaluates_to("variable x = 1 + 2", Value::Integer(3));
    assert_evaluates_to("variable a = variable b = 2", Value::Integer(2));
}

#[test]
fn variables_persist_across_runs() {
    let mut context = Context::root("<program>");

    run("variable x = 5", &mut context).unwrap();
    assert_eq!(run("x ^ 2", &mut context).unwrap(), Value::Integer(25));

    run("variable x = x + 1", &mut context).unwrap();
    assert_eq!(run("x", &mut context).unwrap(), Value::Integer(6));
}

#[test]
fn constants_can_be_shadowed() {
    let mut context = Context::root("<program>");

    run("variable true = 0", &mut context).unwrap();
    assert_eq!(run("true", &mut context).unwrap(), Value::Integer(0));
}

fn runtime_error(source: &str) -> RuntimeError {
    match eval_fresh(source) {
        Err(InterpretError::Runtime(error)) => error,
        other => panic!("expected a runtime error for {source:?}, got {other:?}"),
    }
}

fn parse_error(source: &str) -> ParseError {
    match eval_fresh(source) {
        Err(InterpretError::Parse(error)) => error,
        other => panic!("expected a parse error for {source:?}, got {other:?}"),
    }
}

#[test]
fn undefined_variable_is_a_runtime_error() {
    let error = runtime_error("y + 1");

    assert_eq!(error.kind,
               RuntimeErrorKind::UnknownVariable { name: "y".to_string() });
    // The error is anchored exactly at the access, not the whole sum.
    assert_eq!(error.span.start.column, 0);
    assert_eq!(error.span.end.column, 1);
    assert_eq!(error.trace.len(), 1);
    assert_eq!(error.trace[0].display_name, "<program>");
    assert_eq!(error.trace[0].line, 0);
}

#[test]
fn self_referential_declaration_fails_until_seeded() {
    let mut context = Context::root("<program>");

    assert!(run("variable x = x + 1", &mut context).is_err());

    run("variable x = 1", &mut context).unwrap();
    assert_eq!(run("variable x = x + 1", &mut context).unwrap(),
               Value::Integer(2));
}

#[test]
fn division_by_zero_points_at_the_divisor() {
    let error = runtime_error("10 / 0");

    assert_eq!(error.kind, RuntimeErrorKind::DivisionByZero);
    assert_eq!(error.span.start.column, 5);

    assert_failure("1 / 0.0");
    assert_failure("1.5 / 0");
}

#[test]
fn integer_overflow_is_a_runtime_error() {
    let error = runtime_error("9223372036854775807 + 1");

    assert_eq!(error.kind, RuntimeErrorKind::Overflow);

    assert_failure("2 ^ 64");
    assert_failure("-(-9223372036854775807 - 1)");
}

#[test]
fn illegal_character_is_reported_with_its_position() {
    let error = parse_error("1 $ 2");

    assert!(matches!(error, ParseError::IllegalCharacter { character: '$', .. }));
    assert_eq!(error.span().start.column, 2);
    assert_eq!(error.name(), "Illegal Character");
}

#[test]
fn lone_bang_expects_an_equals_sign() {
    let error = parse_error("5 ! 3");

    assert!(matches!(error, ParseError::ExpectedCharacter { .. }));
    assert_eq!(error.name(), "Expected Character");
}

#[test]
fn missing_closing_paren_points_at_end_of_input() {
    let source = "(1 + 2";
    let error = parse_error(source);

    assert!(matches!(error, ParseError::ExpectedClosingParen { .. }));
    assert_eq!(error.span().start.index, source.len());
    assert_eq!(error.details(), "Expected a closing bracket ')'");
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    let error = parse_error("1 2");

    assert!(matches!(error, ParseError::TrailingTokens { .. }));
    assert_eq!(error.span().start.column, 2);
    assert_eq!(error.name(), "Invalid Syntax");
}

#[test]
fn malformed_declarations_are_rejected() {
    let error = eval_fresh("variable 5 = 1").unwrap_err();
    assert!(matches!(error,
                     InterpretError::Parse(ParseError::ExpectedIdentifier { .. })));

    let error = eval_fresh("variable x 5").unwrap_err();
    assert!(matches!(error,
                     InterpretError::Parse(ParseError::ExpectedAssignment { .. })));

    assert_failure("variable x =");
    assert_failure("variable");
}

#[test]
fn empty_and_operator_only_input_is_rejected() {
    assert_failure("");
    assert_failure("*");
    assert_failure("1 +");
    assert_failure("()");
}

#[test]
fn double_dotted_literal_lexes_as_two_floats() {
    let tokens = tokenize("1.2.3").unwrap();
    let kinds: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();

    assert!(matches!(kinds.as_slice(),
                     [Token::Float(a), Token::Float(b), Token::Eof]
                     if *a == 1.2 && *b == 0.3));

    // The parser then rejects the second literal as a trailing token.
    let error = eval_fresh("1.2.3").unwrap_err();
    assert!(matches!(error,
                     InterpretError::Parse(ParseError::TrailingTokens { .. })));
}

#[test]
fn float_literal_forms() {
    assert_evaluates_to("3.14", Value::Real(3.14));
    assert_evaluates_to("2.", Value::Real(2.0));
    assert_evaluates_to(".5", Value::Real(0.5));
}

#[test]
fn symbol_tables_resolve_through_their_parent() {
    let mut outer = SymbolTable::new();
    outer.set("x", Value::Integer(1));

    let mut inner = SymbolTable::with_parent(outer);
    assert_eq!(inner.get("x"), Some(Value::Integer(1)));

    // Writes stay local: the inner binding shadows, never overwrites.
    inner.set("x", Value::Integer(2));
    assert_eq!(inner.get("x"), Some(Value::Integer(2)));

    // So does removal: deleting the shadow exposes the parent binding again.
    assert_eq!(inner.remove("x"), Some(Value::Integer(2)));
    assert_eq!(inner.get("x"), Some(Value::Integer(1)));
    assert_eq!(inner.remove("x"), None);
}

#[test]
fn removing_an_unbound_name_is_a_no_op() {
    let mut symbols = SymbolTable::new();

    assert_eq!(symbols.remove("missing"), None);

    symbols.set("x", Value::Integer(5));
    assert_eq!(symbols.remove("missing"), None);
    assert_eq!(symbols.get("x"), Some(Value::Integer(5)));
}

#[test]
fn unpromotable_integer_is_a_runtime_error() {
    // 2^53 + 1 has no exact f64 representation, so mixing it with a real
    // cannot silently round.
    let error = runtime_error("9007199254740993 + 0.5");

    assert_eq!(error.kind, RuntimeErrorKind::LiteralTooLarge);

    assert_failure("9007199254740993 < 0.5");
    assert_failure("1.5 * 9007199254740993");
}

#[test]
fn parse_errors_render_with_file_and_line() {
    let source = "1 2";
    let error = run(source, &mut Context::root("<program>")).unwrap_err();

    assert_eq!(render_error("<stdin>", source, &error),
               "ERROR: Invalid Syntax: Expected a valid operator\n\
                File: <stdin>, Line: 1\n\
                \n\
                1 2\n  \
                ^");
}

#[test]
fn runtime_errors_render_with_a_traceback() {
    let source = "10 / 0";
    let error = run(source, &mut Context::root("<program>")).unwrap_err();

    assert_eq!(render_error("<stdin>", source, &error),
               "Traceback (most recent call last):\n  \
                File: <stdin>, Line: 1, in <program>\n\
                ERROR: Runtime Error: Division by zero is not possible\n\
                \n\
                10 / 0\n     \
                ^");
}

#[test]
fn reports_use_one_based_line_numbers() {
    let source = "1 +\n2 $";
    let error = run(source, &mut Context::root("<program>")).unwrap_err();

    let rendered = render_error("script.nm", source, &error);
    assert!(rendered.contains("File: script.nm, Line: 2"),
            "unexpected report:\n{rendered}");
}

#[test]
fn caret_alignment_survives_multibyte_characters() {
    // "é" is two bytes but one column wide; neither the marker under it nor
    // one past it may drift.
    let covering_e = Span::new(Position { index:  0,
                                          line:   0,
                                          column: 0, },
                               Position { index:  2,
                                          line:   0,
                                          column: 2, });
    assert_eq!(underline("é $", covering_e), "é $\n^");

    let covering_dollar = Span::new(Position { index:  3,
                                               line:   0,
                                               column: 3, },
                                    Position { index:  4,
                                               line:   0,
                                               column: 4, });
    assert_eq!(underline("é $", covering_dollar), "é $\n  ^");
}

#[test]
fn evaluation_is_idempotent() {
    let mut context = Context::root("<program>");

    let first = run("1 + 2 * 3", &mut context).unwrap();
    let second = run("1 + 2 * 3", &mut context).unwrap();

    assert_eq!(first, second);
}
