// Literal parsing functions for the PyMancer parser
// Handles boolean, integer and string literals

use pest::iterators::Pair;

use super::{AstBuilder, Rule};
use crate::ast::*;
use crate::error::*;

impl AstBuilder {
    /// Parse a boolean literal from a Pest pair
    pub(crate) fn parse_boolean(&self, pair: Pair<Rule>) -> ParseResult<BooleanLiteral> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();
        let inner = self.next_pair(&mut inner_pairs, "True or False", span)?;

        let value = match inner.as_rule() {
            Rule::boolean_true => true,
            Rule::boolean_false => false,
            _ => return Err(self.unexpected_rule("True or False", &inner)),
        };

        Ok(BooleanLiteral { value, span })
    }

    /// Parse a decimal integer literal from a Pest pair
    pub(crate) fn parse_integer(&self, pair: Pair<Rule>) -> ParseResult<IntegerLiteral> {
        let span = self.span(&pair);
        let text = pair.as_str();

        let value = text
            .parse::<i64>()
            .map_err(|_| ParseError::invalid_integer(self.line(), text.to_string(), span.into()))?;

        Ok(IntegerLiteral { value, span })
    }

    /// Parse a single- or double-quoted string literal from a Pest pair
    pub(crate) fn parse_string(&self, pair: Pair<Rule>) -> ParseResult<StringLiteral> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();
        let quoted = self.next_pair(&mut inner_pairs, "quoted string", span)?;

        let quote = match quoted.as_rule() {
            Rule::single_quoted => QuoteStyle::Single,
            Rule::double_quoted => QuoteStyle::Double,
            _ => return Err(self.unexpected_rule("quoted string", &quoted)),
        };

        // The text pair is the only inner token; quote characters are not exposed
        let value = quoted
            .into_inner()
            .next()
            .map(|text| text.as_str().to_string())
            .unwrap_or_default();

        Ok(StringLiteral { value, quote, span })
    }
}
