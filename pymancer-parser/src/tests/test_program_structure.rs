// Program structuring tests: line walking, header/body pairing, spans

use crate::{ast::*, parse_program, ParseError};
use pretty_assertions::assert_eq;

fn forms(program: &Program) -> Vec<&'static str> {
    program.statements.iter().map(Statement::form_name).collect()
}

#[test]
fn test_empty_and_comment_only_programs() {
    assert!(parse_program("").unwrap().statements.is_empty());
    assert!(parse_program("\n\n   \n").unwrap().statements.is_empty());
    assert!(parse_program("# just a note\n   # another").unwrap().statements.is_empty());
}

#[test]
fn test_statements_keep_their_line_numbers() {
    let program = parse_program("a = 1\n\n# comment\nprint(a)").unwrap();
    let lines: Vec<usize> = program.statements.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![1, 4]);
    assert_eq!(forms(&program), vec!["assignment", "print"]);
}

#[test]
fn test_header_takes_indented_body() {
    let program = parse_program("if True:\n    print('yes')\nprint('after')").unwrap();
    assert_eq!(forms(&program), vec!["if", "print"]);

    let body = program.statements[0].body().expect("if body");
    assert_eq!(body.form_name(), "print");
    assert_eq!(body.line, 2);
}

#[test]
fn test_tab_indented_body() {
    let program = parse_program("for x in xs:\n\tprint(x)").unwrap();
    assert_eq!(program.statements.len(), 1);
    assert!(program.statements[0].body().is_some());
}

#[test]
fn test_header_without_indented_body_runs_next_line_at_top_level() {
    let program = parse_program("if True:\nprint('top level')").unwrap();
    assert_eq!(forms(&program), vec!["if", "print"]);
    assert!(program.statements[0].body().is_none());
}

#[test]
fn test_header_at_end_of_program_has_no_body() {
    let program = parse_program("x = 1\nif x == 1:").unwrap();
    assert_eq!(forms(&program), vec!["assignment", "if"]);
    assert!(program.statements[1].body().is_none());
}

#[test]
fn test_indented_comment_is_an_empty_body() {
    let program = parse_program("if True:\n    # nothing yet\nprint('after')").unwrap();
    assert_eq!(forms(&program), vec!["if", "print"]);
    assert!(program.statements[0].body().is_none());
}

#[test]
fn test_only_one_body_line_is_taken() {
    let program = parse_program("for x in xs:\n    print(x)\n    print('again')").unwrap();
    assert_eq!(forms(&program), vec!["for", "print"]);
    assert_eq!(program.statements[1].line, 3);
}

#[test]
fn test_nested_block_is_rejected() {
    let result = parse_program("for x in xs:\n    if x == 1:\n        print(x)");
    match result {
        Err(error @ ParseError::NestedBlock { .. }) => assert_eq!(error.line(), 2),
        other => panic!("Expected nested block error, got {:?}", other),
    }
}

#[test]
fn test_unrecognized_line_reports_its_number() {
    let result = parse_program("x = 1\nprint(x)\nx++");
    match result {
        Err(error @ ParseError::InvalidSyntax { .. }) => assert_eq!(error.line(), 3),
        other => panic!("Expected invalid syntax, got {:?}", other),
    }
}

#[test]
fn test_syntax_error_in_unexecuted_body_still_fails() {
    let result = parse_program("if False:\n    not valid at all");
    assert!(matches!(result, Err(ParseError::InvalidSyntax { line: 2, .. })));
}

#[test]
fn test_spans_are_absolute() {
    let source = "x = 1\nif True:\n    print(x)";
    let program = parse_program(source).unwrap();

    let header = &program.statements[1];
    assert_eq!(header.span, Span::new(6, 14));

    let body = header.body().expect("if body");
    assert_eq!(&source[body.span.start..body.span.end], "print(x)");

    assert_eq!(program.span, Span::new(0, source.len()));
}

#[test]
fn test_error_spans_are_absolute() {
    let source = "x = 1\ny = [1, 2";
    let error = parse_program(source).unwrap_err();
    assert_eq!(error.line(), 2);
    assert!(error.span().offset() >= 6);
}

#[test]
fn test_crlf_sources_parse() {
    let program = parse_program("x = 1\r\nif x == 1:\r\n    print(x)\r\n").unwrap();
    assert_eq!(forms(&program), vec!["assignment", "if"]);
}

#[test]
fn test_stray_indented_line_is_an_ordinary_statement() {
    let program = parse_program("    print('indented')\nx = 1").unwrap();
    assert_eq!(forms(&program), vec!["print", "assignment"]);
}
