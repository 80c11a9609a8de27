// Literal and expression parsing tests

use crate::{ast::*, parse_expression, ParseError};
use pretty_assertions::assert_eq;

fn string_value(expr: &Expression) -> &str {
    match &expr.kind {
        ExpressionKind::String(string) => &string.value,
        _ => panic!("Expected string in expression, got: {:?}", expr.kind),
    }
}

#[test]
fn test_parse_single_and_double_quoted_strings() {
    let single = parse_expression("'authorized'").unwrap();
    assert_eq!(string_value(&single), "authorized");

    let double = parse_expression("\"Moonlight\"").unwrap();
    assert_eq!(string_value(&double), "Moonlight");

    match &double.kind {
        ExpressionKind::String(string) => assert_eq!(string.quote, QuoteStyle::Double),
        _ => panic!("Expected string"),
    }
}

#[test]
fn test_strings_are_taken_verbatim() {
    let expr = parse_expression(r"'no \n escapes # here'").unwrap();
    assert_eq!(string_value(&expr), r"no \n escapes # here");

    let expr = parse_expression("\"it's\"").unwrap();
    assert_eq!(string_value(&expr), "it's");

    let empty = parse_expression("''").unwrap();
    assert_eq!(string_value(&empty), "");
}

#[test]
fn test_parse_integer() {
    let expr = parse_expression("100").unwrap();
    match expr.kind {
        ExpressionKind::Integer(int) => assert_eq!(int.value, 100),
        other => panic!("Expected integer, got {:?}", other),
    }
}

#[test]
fn test_integer_overflow_is_rejected() {
    let result = parse_expression("99999999999999999999");
    assert!(matches!(result, Err(ParseError::InvalidInteger { line: 1, .. })));
}

#[test]
fn test_no_negative_or_float_literals() {
    assert!(parse_expression("-1").is_err());
    assert!(parse_expression("1.5").is_err());
    assert!(parse_expression("1_000").is_err());
}

#[test]
fn test_parse_booleans_case_sensitive() {
    let expr = parse_expression("True").unwrap();
    assert!(matches!(expr.kind, ExpressionKind::Boolean(BooleanLiteral { value: true, .. })));

    let expr = parse_expression("False").unwrap();
    assert!(matches!(expr.kind, ExpressionKind::Boolean(BooleanLiteral { value: false, .. })));

    // Lowercase is just a name, not a boolean
    let expr = parse_expression("true").unwrap();
    match expr.kind {
        ExpressionKind::Identifier(id) => assert_eq!(id.name, "true"),
        other => panic!("Expected identifier, got {:?}", other),
    }
}

#[test]
fn test_keyword_prefixed_names_are_identifiers() {
    for name in ["Trueish", "index", "format", "andrew", "length"] {
        let expr = parse_expression(name).unwrap();
        match expr.kind {
            ExpressionKind::Identifier(id) => assert_eq!(id.name, name),
            other => panic!("Expected identifier for {name}, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_list_literal() {
    let expr = parse_expression("['Sage', 'Water', 3, True]").unwrap();
    let list = match expr.kind {
        ExpressionKind::List(list) => list,
        other => panic!("Expected list, got {:?}", other),
    };

    assert_eq!(list.elements.len(), 4);
    assert_eq!(string_value(&list.elements[0]), "Sage");
    assert_eq!(string_value(&list.elements[1]), "Water");
    assert!(matches!(list.elements[2].kind, ExpressionKind::Integer(_)));
    assert!(matches!(list.elements[3].kind, ExpressionKind::Boolean(_)));
}

#[test]
fn test_empty_list_and_trailing_comma() {
    match parse_expression("[]").unwrap().kind {
        ExpressionKind::List(list) => assert!(list.elements.is_empty()),
        other => panic!("Expected list, got {:?}", other),
    }

    match parse_expression("['a', 'b',]").unwrap().kind {
        ExpressionKind::List(list) => assert_eq!(list.elements.len(), 2),
        other => panic!("Expected list, got {:?}", other),
    }
}

#[test]
fn test_parse_len_call() {
    let expr = parse_expression("len(souls)").unwrap();
    match expr.kind {
        ExpressionKind::Len(call) => match &call.argument.kind {
            ExpressionKind::Identifier(id) => assert_eq!(id.name, "souls"),
            other => panic!("Expected identifier argument, got {:?}", other),
        },
        other => panic!("Expected len call, got {:?}", other),
    }

    // `len` on its own is an ordinary name
    match parse_expression("len").unwrap().kind {
        ExpressionKind::Identifier(id) => assert_eq!(id.name, "len"),
        other => panic!("Expected identifier, got {:?}", other),
    }
}

#[test]
fn test_malformed_expressions_fail() {
    for input in ["'unterminated", "[1, 2", "12abc", "size(souls)", "a b"] {
        let result = parse_expression(input);
        assert!(
            matches!(result, Err(ParseError::InvalidSyntax { .. })),
            "{input} should be invalid syntax, got {:?}",
            result
        );
    }
}

#[test]
fn test_expression_spans() {
    let expr = parse_expression("[1, 'a']").unwrap();
    assert_eq!(expr.span, Span::new(0, 8));
    match expr.kind {
        ExpressionKind::List(list) => assert_eq!(list.elements[1].span, Span::new(4, 7)),
        other => panic!("Expected list, got {:?}", other),
    }
}
