//! Assignment, print and append acceptance tests

use crate::{ExecutionResult, execute};
use crate::test_harness::InterpreterSession;
use pretty_assertions::assert_eq;

#[test]
fn test_append_then_print_renders_in_order() {
    let result = execute("items = ['a']\nitems.append('b')\nprint(items)");
    assert_eq!(
        result,
        ExecutionResult {
            output: "[a, b]".to_string(),
            success: true,
            error: None,
        }
    );
}

#[test]
fn test_print_renders_every_kind() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "print(100)\nprint(True)\nprint(False)\nprint('Sage')\nprint(['Sage', 3, True, []])",
            "100\nTrue\nFalse\nSage\n[Sage, 3, True, []]",
        )
        .unwrap();
}

#[test]
fn test_print_without_argument_prints_empty_line() {
    let session = InterpreterSession::new();
    session.assert_output("print('a')\nprint()\nprint('b')", "a\n\nb").unwrap();
}

#[test]
fn test_output_trailing_whitespace_is_trimmed() {
    let session = InterpreterSession::new();
    session.assert_output("print('end  ')\nprint()\nprint()", "end").unwrap();
}

#[test]
fn test_reassignment_overwrites() {
    let session = InterpreterSession::new();
    session
        .assert_output("rune = 'fire'\nrune = 7\nprint(rune)", "7")
        .unwrap();
}

#[test]
fn test_assignment_shares_lists() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "a = ['x']\nb = a\nb.append('y')\nprint(a)\nprint(b)",
            "[x, y]\n[x, y]",
        )
        .unwrap();
    session
        .assert_output("a = [1]\nb = a\na.append(2)\nprint(b)", "[1, 2]")
        .unwrap();
}

#[test]
fn test_nested_list_sees_appends() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "inner = []\nouter = [inner]\ninner.append('rune')\nprint(outer)",
            "[[rune]]",
        )
        .unwrap();
}

#[test]
fn test_rebinding_does_not_touch_the_old_list() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "a = [1]\nb = a\na = []\na.append(2)\nprint(b)\nprint(a)",
            "[1]\n[2]",
        )
        .unwrap();
}

#[test]
fn test_list_appended_to_itself() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "ring = [1]\nring.append(ring)\nprint(ring)\nprint(len(ring))",
            "[1, [...]]\n2",
        )
        .unwrap();
}

#[test]
fn test_append_evaluates_argument() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "herbs = []\nsage = 'Sage'\nherbs.append(sage)\nherbs.append(len(herbs))\nprint(herbs)",
            "[Sage, 1]",
        )
        .unwrap();
}

#[test]
fn test_len_of_literal_and_nested_list() {
    let session = InterpreterSession::new();
    session
        .assert_output("print(len([1, [2, 3], 4]))\nprint(len([]))", "3\n0")
        .unwrap();
}

#[test]
fn test_comments_and_blank_lines_have_no_effect() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "# The gate\n\nstatus = 'authorized'  # set it\n   \nprint(status)",
            "authorized",
        )
        .unwrap();
}

#[test]
fn test_empty_program_succeeds_silently() {
    assert_eq!(execute(""), ExecutionResult::succeeded(String::new()));
}

#[test]
fn test_repeated_runs_are_identical() {
    let source = "xs = ['a']\nxs.append('b')\nfor x in xs:\n    print(x)\nprint(ghost)";
    let first = execute(source);
    let second = execute(source);
    assert_eq!(first, second);
    assert_eq!(first.output, "a\nb");
}
