// S-expression formatter for PyMancer AST
// Renders parsed spells as Lisp-like trees for `pymancer parse`

use pymancer_parser::*;

pub fn format_program_as_sexpr(program: &Program) -> String {
    format_program_with_indent(program, 0)
}

fn format_program_with_indent(program: &Program, indent: usize) -> String {
    let statements: Vec<String> = program
        .statements
        .iter()
        .map(|statement| format_statement_with_indent(statement, indent + 2))
        .collect();

    if statements.is_empty() {
        "(program)".to_string()
    } else if statements.len() == 1 {
        format!("(program {})", statements[0])
    } else {
        format!(
            "(program\n{}{})",
            " ".repeat(indent + 2),
            statements.join(&format!("\n{}", " ".repeat(indent + 2)))
        )
    }
}

fn format_statement_with_indent(statement: &Statement, indent: usize) -> String {
    match &statement.kind {
        StatementKind::Assignment(assignment) => format!(
            "(assign {} {})",
            assignment.target.name,
            format_expression(&assignment.value)
        ),
        StatementKind::Print(print) => match &print.argument {
            Some(argument) => format!("(print {})", format_expression(argument)),
            None => "(print)".to_string(),
        },
        StatementKind::MethodCall(call) => format!(
            "(call {}.{} {})",
            call.receiver.name,
            call.method.name,
            format_expression(&call.argument)
        ),
        StatementKind::If(if_statement) => format_block(
            format!("(if {}", format_condition(&if_statement.condition)),
            if_statement.body.as_deref(),
            indent,
        ),
        StatementKind::For(for_statement) => format_block(
            format!(
                "(for {} {}",
                for_statement.variable.name, for_statement.iterable.name
            ),
            for_statement.body.as_deref(),
            indent,
        ),
    }
}

fn format_block(head: String, body: Option<&Statement>, indent: usize) -> String {
    match body {
        Some(body) => format!(
            "{}\n{}{})",
            head,
            " ".repeat(indent + 2),
            format_statement_with_indent(body, indent + 2)
        ),
        None => format!("{head})"),
    }
}

fn format_condition(condition: &Condition) -> String {
    match &condition.kind {
        ConditionKind::And(terms) => {
            let terms: Vec<String> = terms.iter().map(format_condition).collect();
            format!("(and {})", terms.join(" "))
        }
        ConditionKind::Membership {
            element,
            collection,
        } => format!(
            "(in {} {})",
            format_expression(element),
            format_expression(collection)
        ),
        ConditionKind::Equality { left, right } => {
            format!("(== {} {})", format_expression(left), format_expression(right))
        }
        ConditionKind::Bare(operand) => format_expression(operand),
    }
}

fn format_expression(expr: &Expression) -> String {
    match &expr.kind {
        ExpressionKind::Identifier(id) => format!("(identifier {})", id.name),
        ExpressionKind::Boolean(bool_lit) => format!("(boolean {})", bool_lit.value),
        ExpressionKind::Integer(int_lit) => format!("(integer {})", int_lit.value),
        ExpressionKind::String(string_lit) => format!("(string {:?})", string_lit.value),
        ExpressionKind::List(list) => {
            if list.elements.is_empty() {
                "(list)".to_string()
            } else {
                let elements: Vec<String> = list.elements.iter().map(format_expression).collect();
                format!("(list {})", elements.join(" "))
            }
        }
        ExpressionKind::Len(call) => format!("(len {})", format_expression(&call.argument)),
    }
}
