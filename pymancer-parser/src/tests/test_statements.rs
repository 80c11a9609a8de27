// Statement classification tests

use crate::{ast::*, classify_line, ParseError};
use pretty_assertions::assert_eq;

#[test]
fn test_classify_assignment() {
    let statement = classify_line("mana_level = 100").unwrap();
    assert_eq!(statement.form_name(), "assignment");
    assert_eq!(statement.line, 1);

    match statement.kind {
        StatementKind::Assignment(assignment) => {
            assert_eq!(assignment.target.name, "mana_level");
            match assignment.value.kind {
                ExpressionKind::Integer(int) => assert_eq!(int.value, 100),
                other => panic!("Expected integer value, got {:?}", other),
            }
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_classify_print_with_and_without_argument() {
    match classify_line("print('The gate swings open!')").unwrap().kind {
        StatementKind::Print(print) => {
            let argument = print.argument.expect("print argument");
            assert!(matches!(argument.kind, ExpressionKind::String(_)));
        }
        other => panic!("Expected print, got {:?}", other),
    }

    match classify_line("print()").unwrap().kind {
        StatementKind::Print(print) => assert!(print.argument.is_none()),
        other => panic!("Expected print, got {:?}", other),
    }
}

#[test]
fn test_classify_method_call() {
    match classify_line("cauldron.append('Moonlight')").unwrap().kind {
        StatementKind::MethodCall(call) => {
            assert_eq!(call.receiver.name, "cauldron");
            assert_eq!(call.method.name, "append");
            assert!(matches!(call.argument.kind, ExpressionKind::String(_)));
        }
        other => panic!("Expected method call, got {:?}", other),
    }
}

#[test]
fn test_any_method_name_classifies() {
    // Unsupported methods are rejected when executed, not when parsed
    match classify_line("souls.remove('Gwen')").unwrap().kind {
        StatementKind::MethodCall(call) => assert_eq!(call.method.name, "remove"),
        other => panic!("Expected method call, got {:?}", other),
    }
}

#[test]
fn test_classify_if_header() {
    let statement = classify_line("if status == 'authorized':").unwrap();
    assert!(statement.is_block_header());
    assert!(statement.body().is_none());

    match statement.kind {
        StatementKind::If(if_statement) => {
            assert!(matches!(if_statement.condition.kind, ConditionKind::Equality { .. }))
        }
        other => panic!("Expected if, got {:?}", other),
    }
}

#[test]
fn test_classify_for_header() {
    let statement = classify_line("for head in hydra_heads:").unwrap();
    assert_eq!(statement.form_name(), "for");

    match statement.kind {
        StatementKind::For(for_statement) => {
            assert_eq!(for_statement.variable.name, "head");
            assert_eq!(for_statement.iterable.name, "hydra_heads");
        }
        other => panic!("Expected for, got {:?}", other),
    }
}

#[test]
fn test_for_requires_a_named_iterable() {
    assert!(matches!(
        classify_line("for x in ['a', 'b']:"),
        Err(ParseError::InvalidSyntax { .. })
    ));
}

#[test]
fn test_keyword_prefixed_targets_are_assignments() {
    for line in ["ifx = 1", "format = 'x'", "print_count = 2", "print = 3"] {
        let statement = classify_line(line).unwrap();
        assert_eq!(statement.form_name(), "assignment", "{line}");
    }
}

#[test]
fn test_equality_is_not_a_statement() {
    let result = classify_line("x == 5");
    assert!(matches!(result, Err(ParseError::InvalidSyntax { line: 1, .. })));
}

#[test]
fn test_unsupported_statements_fail() {
    for line in [
        "while True:",
        "x += 1",
        "def cast():",
        "print('a', 'b')",
        "souls.append()",
        "if x",
        "print 'old style'",
        "x = y = 1",
    ] {
        let result = classify_line(line);
        assert!(
            matches!(result, Err(ParseError::InvalidSyntax { .. })),
            "{line} should be invalid syntax, got {:?}",
            result
        );
    }
}

#[test]
fn test_trailing_comment_is_ignored() {
    let statement = classify_line("spell = 'lumos'  # light it up").unwrap();
    match statement.kind {
        StatementKind::Assignment(assignment) => match assignment.value.kind {
            ExpressionKind::String(string) => assert_eq!(string.value, "lumos"),
            other => panic!("Expected string, got {:?}", other),
        },
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_hash_inside_string_is_not_a_comment() {
    match classify_line("print('#1 wizard')").unwrap().kind {
        StatementKind::Print(print) => match print.argument.map(|argument| argument.kind) {
            Some(ExpressionKind::String(string)) => assert_eq!(string.value, "#1 wizard"),
            other => panic!("Expected string argument, got {:?}", other),
        },
        other => panic!("Expected print, got {:?}", other),
    }
}
