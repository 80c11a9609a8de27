// Control flow parsing module
// Handles if/for headers and the condition sub-grammar

use pest::iterators::Pair;

use super::{AstBuilder, Rule};
use crate::ast::*;
use crate::error::*;

impl AstBuilder {
    /// Parse an if header; the body is attached later by the program structurer
    pub(crate) fn parse_if_header(&self, pair: Pair<Rule>) -> ParseResult<IfStatement> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();

        // First pair should be the "if" keyword, skip it
        let _if_keyword = self.next_pair(&mut inner_pairs, "`if`", span)?;

        let condition_pair = self.next_pair(&mut inner_pairs, "condition", span)?;
        let condition = self.parse_condition(condition_pair)?;

        Ok(IfStatement {
            condition,
            body: None,
            span,
        })
    }

    /// Parse a for header
    pub(crate) fn parse_for_header(&self, pair: Pair<Rule>) -> ParseResult<ForStatement> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();

        // First pair should be the "for" keyword, skip it
        let _for_keyword = self.next_pair(&mut inner_pairs, "`for`", span)?;

        let variable = self.parse_identifier(self.next_pair(&mut inner_pairs, "loop variable", span)?)?;

        // Skip the "in" keyword
        let _in_keyword = self.next_pair(&mut inner_pairs, "`in`", span)?;

        let iterable = self.parse_identifier(self.next_pair(&mut inner_pairs, "iterable", span)?)?;

        Ok(ForStatement {
            variable,
            iterable,
            body: None,
            span,
        })
    }

    /// Parse a condition: a single term, or terms joined by `and`
    pub(crate) fn parse_condition(&self, pair: Pair<Rule>) -> ParseResult<Condition> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();

        let first = self.next_pair(&mut inner_pairs, "condition term", span)?;
        let mut terms = vec![self.parse_condition_term(first)?];

        while let Some(op_pair) = inner_pairs.next() {
            if op_pair.as_rule() != Rule::op_and {
                return Err(self.unexpected_rule("`and`", &op_pair));
            }
            let term_pair = self.next_pair(&mut inner_pairs, "condition term", span)?;
            terms.push(self.parse_condition_term(term_pair)?);
        }

        if terms.len() == 1 {
            return Ok(terms.remove(0));
        }

        let combined = self.span_from_range(terms[0].span.start, terms[terms.len() - 1].span.end);
        Ok(Condition {
            kind: ConditionKind::And(terms),
            span: combined,
        })
    }

    fn parse_condition_term(&self, pair: Pair<Rule>) -> ParseResult<Condition> {
        let span = self.span(&pair);

        let kind = match pair.as_rule() {
            Rule::membership => {
                let mut inner_pairs = pair.into_inner();
                let element = self.parse_expression(self.next_pair(&mut inner_pairs, "element", span)?)?;
                let _in_keyword = self.next_pair(&mut inner_pairs, "`in`", span)?;
                let collection =
                    self.parse_expression(self.next_pair(&mut inner_pairs, "collection", span)?)?;
                ConditionKind::Membership {
                    element,
                    collection,
                }
            }
            Rule::equality => {
                let mut inner_pairs = pair.into_inner();
                let left = self.parse_expression(self.next_pair(&mut inner_pairs, "left operand", span)?)?;
                let _equal = self.next_pair(&mut inner_pairs, "`==`", span)?;
                let right =
                    self.parse_expression(self.next_pair(&mut inner_pairs, "right operand", span)?)?;
                ConditionKind::Equality { left, right }
            }
            Rule::bare_condition => {
                let mut inner_pairs = pair.into_inner();
                let operand = self.next_pair(&mut inner_pairs, "identifier or boolean", span)?;
                ConditionKind::Bare(self.parse_primary(operand)?)
            }
            _ => return Err(self.unexpected_rule("condition term", &pair)),
        };

        Ok(Condition { kind, span })
    }
}
