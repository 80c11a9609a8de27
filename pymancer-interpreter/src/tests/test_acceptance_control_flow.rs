//! `if` and `for` acceptance tests

use crate::ErrorKind;
use crate::test_harness::InterpreterSession;

#[test]
fn test_if_equality_true() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "status = 'authorized'\nif status == 'authorized':\n    print('open')",
            "open",
        )
        .unwrap();
}

#[test]
fn test_if_false_is_not_an_error() {
    let session = InterpreterSession::new();
    session
        .assert_output("mana_level = 100\nif mana_level == 100:\n    print('full')", "full")
        .unwrap();
    session
        .assert_output("mana_level = 50\nif mana_level == 100:\n    print('full')", "")
        .unwrap();
}

#[test]
fn test_if_with_len() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "souls = ['a', 'b', 'c']\ncount = len(souls)\nif count == 3:\n    print('ok')",
            "ok",
        )
        .unwrap();
}

#[test]
fn test_if_membership() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "cauldron = ['Water']\ncauldron.append('Moonlight')\nif 'Moonlight' in cauldron:\n    print('sparkles')",
            "sparkles",
        )
        .unwrap();
    session
        .assert_output("cauldron = ['Water']\nif 'Moon' in cauldron:\n    print('x')", "")
        .unwrap();
}

#[test]
fn test_if_and() {
    let session = InterpreterSession::new();
    let spell = |left: &str, right: &str| {
        format!(
            "left_orb = {left}\nright_orb = {right}\nif left_orb and right_orb:\n    print('clear')"
        )
    };

    session.assert_output(&spell("True", "True"), "clear").unwrap();
    session.assert_output(&spell("True", "False"), "").unwrap();
    session.assert_output(&spell("False", "True"), "").unwrap();
}

#[test]
fn test_equality_never_coerces() {
    let session = InterpreterSession::new();
    session
        .assert_output("flag = True\nif flag == 1:\n    print('coerced')", "")
        .unwrap();
    session
        .assert_output("n = 3\nif n == '3':\n    print('coerced')", "")
        .unwrap();
    session
        .assert_output("xs = ['a']\nif xs == ['a']:\n    print('same')", "same")
        .unwrap();
}

#[test]
fn test_for_runs_body_per_element() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "heads = ['a', 'b', 'c']\nfor head in heads:\n    print('Strike!')",
            "Strike!\nStrike!\nStrike!",
        )
        .unwrap();
}

#[test]
fn test_for_binds_loop_variable() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "heads = ['a', 'b']\nfor head in heads:\n    print(head)\nprint(head)",
            "a\nb\nb",
        )
        .unwrap();
}

#[test]
fn test_for_over_empty_list_leaves_variable_unbound() {
    let session = InterpreterSession::new();
    let error = session
        .assert_partial_output(
            "empty = []\nfor item in empty:\n    print(item)\nprint('after')\nprint(item)",
            "after",
            ErrorKind::NameError,
        )
        .unwrap();
    assert_eq!(error.line, Some(5));
}

#[test]
fn test_for_iterates_a_snapshot() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "xs = [1, 2]\nfor x in xs:\n    xs.append(x)\nprint(xs)",
            "[1, 2, 1, 2]",
        )
        .unwrap();
}

#[test]
fn test_header_without_indented_body_is_a_no_op() {
    let session = InterpreterSession::new();
    session
        .assert_output("if True:\nprint('top level')", "top level")
        .unwrap();
    session
        .assert_output("xs = [1, 2]\nfor x in xs:\nprint(x)", "2")
        .unwrap();
}

#[test]
fn test_only_the_first_indented_line_is_the_body() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "if False:\n    print('body')\n    print('top level')",
            "top level",
        )
        .unwrap();
}

#[test]
fn test_body_condition_false_skips_errors_in_body() {
    // A runtime error in a skipped body never happens
    let session = InterpreterSession::new();
    session
        .assert_output("if False:\n    print(ghost)\nprint('fine')", "fine")
        .unwrap();
}

#[test]
fn test_long_and_chain() {
    let session = InterpreterSession::new();
    let condition = vec!["True"; 3000].join(" and ");
    session
        .assert_output(&format!("if {condition}:\n    print('ok')"), "ok")
        .unwrap();
    session
        .assert_output(&format!("if {condition} and False:\n    print('ok')\nprint('done')"), "done")
        .unwrap();
}

#[test]
fn test_loop_variable_shares_the_element() {
    let session = InterpreterSession::new();
    session
        .assert_output(
            "shelves = [['Sage'], ['Moonlight']]\nfor shelf in shelves:\n    shelf.append('Dust')\nprint(shelves)",
            "[[Sage, Dust], [Moonlight, Dust]]",
        )
        .unwrap();
}
