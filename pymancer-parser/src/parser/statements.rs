// Statement parsing module
// Handles method calls, print calls and assignments

use pest::iterators::Pair;

use super::{AstBuilder, Rule};
use crate::ast::*;
use crate::error::*;

impl AstBuilder {
    /// Parse a statement from a Pest pair
    pub(crate) fn parse_statement(&self, pair: Pair<Rule>) -> ParseResult<Statement> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();
        let form_pair = self.next_pair(&mut inner_pairs, "statement form", span)?;

        let kind = match form_pair.as_rule() {
            Rule::method_call => StatementKind::MethodCall(self.parse_method_call(form_pair)?),
            Rule::print_call => StatementKind::Print(self.parse_print_call(form_pair)?),
            Rule::assignment => StatementKind::Assignment(self.parse_assignment(form_pair)?),
            Rule::if_header => StatementKind::If(self.parse_if_header(form_pair)?),
            Rule::for_header => StatementKind::For(self.parse_for_header(form_pair)?),
            _ => return Err(self.unexpected_rule("statement form", &form_pair)),
        };

        Ok(Statement {
            kind,
            line: self.line(),
            span,
        })
    }

    /// Parse `receiver.method(argument)`
    pub(crate) fn parse_method_call(&self, pair: Pair<Rule>) -> ParseResult<MethodCall> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();

        let receiver = self.parse_identifier(self.next_pair(&mut inner_pairs, "receiver", span)?)?;
        let method = self.parse_identifier(self.next_pair(&mut inner_pairs, "method name", span)?)?;
        let argument_pair = self.next_pair(&mut inner_pairs, "argument", span)?;
        let argument = self.parse_expression(argument_pair)?;

        Ok(MethodCall {
            receiver,
            method,
            argument,
            span,
        })
    }

    /// Parse `print(...)`
    pub(crate) fn parse_print_call(&self, pair: Pair<Rule>) -> ParseResult<PrintCall> {
        let span = self.span(&pair);
        let mut argument = None;

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::kw_print => {} // Skip the keyword
                Rule::expression => argument = Some(self.parse_expression(inner_pair)?),
                _ => return Err(self.unexpected_rule("print argument", &inner_pair)),
            }
        }

        Ok(PrintCall { argument, span })
    }

    /// Parse `target = value`
    pub(crate) fn parse_assignment(&self, pair: Pair<Rule>) -> ParseResult<Assignment> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();

        let target = self.parse_identifier(self.next_pair(&mut inner_pairs, "target", span)?)?;

        // Skip the `=` operator
        let _assign = self.next_pair(&mut inner_pairs, "`=`", span)?;

        let value_pair = self.next_pair(&mut inner_pairs, "value", span)?;
        let value = self.parse_expression(value_pair)?;

        Ok(Assignment {
            target,
            value,
            span,
        })
    }
}
