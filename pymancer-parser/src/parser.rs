// PyMancer Parser
// Pest grammar plus AST construction, one source line at a time

use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

use crate::ast::*;
use crate::error::*;

mod collections;
mod control_flow;
mod expressions;
mod literals;
mod program;
mod statements;

pub use program::SourceLine;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct PymancerParser;

/// Builds AST nodes for one source line
///
/// Pest spans are relative to the line text; the builder shifts them by the
/// line's byte offset so every node carries a position in the full program.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AstBuilder {
    line: usize,
    offset: usize,
}

impl AstBuilder {
    pub(crate) fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Absolute span of a pair
    pub(crate) fn span(&self, pair: &Pair<Rule>) -> Span {
        let pest_span = pair.as_span();
        Span::new(self.offset + pest_span.start(), self.offset + pest_span.end())
    }

    pub(crate) fn span_from_range(&self, start: usize, end: usize) -> Span {
        Span::new(start, end)
    }

    /// Take the next inner pair, failing with an `UnexpectedRule` error when the
    /// parse tree does not have the shape the grammar promises
    pub(crate) fn next_pair<'i>(
        &self,
        pairs: &mut Pairs<'i, Rule>,
        expected: &str,
        parent: Span,
    ) -> ParseResult<Pair<'i, Rule>> {
        pairs.next().ok_or_else(|| ParseError::UnexpectedRule {
            line: self.line,
            expected: expected.to_string(),
            found: "end of input".to_string(),
            span: parent.into(),
        })
    }

    pub(crate) fn unexpected_rule(&self, expected: &str, pair: &Pair<Rule>) -> ParseError {
        ParseError::UnexpectedRule {
            line: self.line,
            expected: expected.to_string(),
            found: format!("{:?}", pair.as_rule()),
            span: self.span(pair).into(),
        }
    }

    pub(crate) fn parse_identifier(&self, pair: Pair<Rule>) -> ParseResult<Identifier> {
        if pair.as_rule() != Rule::identifier {
            return Err(self.unexpected_rule("identifier", &pair));
        }
        Ok(Identifier {
            name: pair.as_str().to_string(),
            span: self.span(&pair),
        })
    }
}

impl PymancerParser {
    /// Run a grammar entry rule over `input`, mapping failures to line-tagged errors
    pub(crate) fn parse_rule<'i>(
        rule: Rule,
        input: &'i str,
        builder: &AstBuilder,
    ) -> ParseResult<Pairs<'i, Rule>> {
        <PymancerParser as Parser<Rule>>::parse(rule, input)
            .map_err(|error| ParseError::from_pest_error(error, builder.line, builder.offset))
    }

    /// Parse a standalone expression (treated as line 1)
    pub fn parse_expression(input: &str) -> ParseResult<Expression> {
        let builder = AstBuilder::new(1, 0);
        let mut pairs = Self::parse_rule(Rule::expression_input, input, &builder)?;
        let input_pair = builder.next_pair(&mut pairs, "expression_input", Span::new(0, input.len()))?;
        let input_span = builder.span(&input_pair);
        let mut inner = input_pair.into_inner();
        let expression_pair = builder.next_pair(&mut inner, "expression", input_span)?;
        builder.parse_expression(expression_pair)
    }

    /// Parse a standalone condition (treated as line 1)
    pub fn parse_condition(input: &str) -> ParseResult<Condition> {
        let builder = AstBuilder::new(1, 0);
        let mut pairs = Self::parse_rule(Rule::condition_input, input, &builder)?;
        let input_pair = builder.next_pair(&mut pairs, "condition_input", Span::new(0, input.len()))?;
        let input_span = builder.span(&input_pair);
        let mut inner = input_pair.into_inner();
        let condition_pair = builder.next_pair(&mut inner, "condition", input_span)?;
        builder.parse_condition(condition_pair)
    }

    /// Classify a single line into its statement form (treated as line 1)
    ///
    /// Headers come back with no body attached.
    pub fn classify_line(input: &str) -> ParseResult<Statement> {
        Self::parse_line(input, &AstBuilder::new(1, 0))
    }
}
