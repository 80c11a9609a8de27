// Placeholder guard tests

use crate::{parse_program, parse_program_with_placeholder, ParseError};
use pretty_assertions::assert_eq;

#[test]
fn test_placeholder_fails_with_its_line() {
    let result = parse_program("status = 'authorized'\nif status == ???:\n    print('open')");
    match result {
        Err(ParseError::UnresolvedPlaceholder { line, marker, span }) => {
            assert_eq!(line, 2);
            assert_eq!(marker, "???");
            assert_eq!(span.offset(), 35);
            assert_eq!(span.len(), 3);
        }
        other => panic!("Expected unresolved placeholder, got {:?}", other),
    }
}

#[test]
fn test_placeholder_in_body_line_fails() {
    let result = parse_program("if False:\n    print(???)");
    assert!(matches!(
        result,
        Err(ParseError::UnresolvedPlaceholder { line: 2, .. })
    ));
}

#[test]
fn test_placeholder_wins_over_syntax_errors() {
    // The line is nonsense either way; the placeholder is reported first
    let result = parse_program("??? what is this");
    assert!(matches!(
        result,
        Err(ParseError::UnresolvedPlaceholder { line: 1, .. })
    ));
}

#[test]
fn test_placeholder_in_trailing_comment_still_counts() {
    let result = parse_program("x = 1  # fill ???");
    assert!(matches!(
        result,
        Err(ParseError::UnresolvedPlaceholder { line: 1, .. })
    ));
}

#[test]
fn test_comment_lines_are_skipped_entirely() {
    let program = parse_program("# replace ??? below\nx = 1").unwrap();
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_custom_marker() {
    let program = parse_program_with_placeholder("x = '???'", "__").unwrap();
    assert_eq!(program.statements.len(), 1);

    let result = parse_program_with_placeholder("x = __", "__");
    assert!(matches!(
        result,
        Err(ParseError::UnresolvedPlaceholder { line: 1, .. })
    ));
}

#[test]
fn test_empty_marker_disables_guard() {
    let program = parse_program_with_placeholder("print('???')", "").unwrap();
    assert_eq!(program.statements.len(), 1);
}
