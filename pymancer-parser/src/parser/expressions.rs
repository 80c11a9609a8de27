// Expression parsing module
// Dispatches an expression pair to the literal, collection or builtin parsers

use pest::iterators::Pair;

use super::{AstBuilder, Rule};
use crate::ast::*;
use crate::error::*;

impl AstBuilder {
    /// Parse an expression from a Pest pair
    pub(crate) fn parse_expression(&self, pair: Pair<Rule>) -> ParseResult<Expression> {
        match pair.as_rule() {
            Rule::expression => {
                let span = self.span(&pair);
                let mut inner_pairs = pair.into_inner();
                let primary = self.next_pair(&mut inner_pairs, "expression", span)?;
                self.parse_primary(primary)
            }
            _ => self.parse_primary(pair),
        }
    }

    /// Parse a primary expression (literal, name or builtin call)
    pub(crate) fn parse_primary(&self, pair: Pair<Rule>) -> ParseResult<Expression> {
        let span = self.span(&pair);

        let kind = match pair.as_rule() {
            Rule::identifier => ExpressionKind::Identifier(self.parse_identifier(pair)?),
            Rule::boolean => ExpressionKind::Boolean(self.parse_boolean(pair)?),
            Rule::integer => ExpressionKind::Integer(self.parse_integer(pair)?),
            Rule::string => ExpressionKind::String(self.parse_string(pair)?),
            Rule::list => ExpressionKind::List(self.parse_list(pair)?),
            Rule::len_call => ExpressionKind::Len(self.parse_len_call(pair)?),
            _ => return Err(self.unexpected_rule("expression", &pair)),
        };

        Ok(Expression { kind, span })
    }

    /// Parse the builtin `len(...)`
    pub(crate) fn parse_len_call(&self, pair: Pair<Rule>) -> ParseResult<LenCall> {
        let span = self.span(&pair);
        let mut inner_pairs = pair.into_inner();

        // Skip the "len" keyword
        let _len_keyword = self.next_pair(&mut inner_pairs, "`len`", span)?;

        let argument_pair = self.next_pair(&mut inner_pairs, "len argument", span)?;
        let argument = self.parse_expression(argument_pair)?;

        Ok(LenCall {
            argument: Box::new(argument),
            span,
        })
    }
}
