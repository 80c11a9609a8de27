// Collection parsing functions for the PyMancer parser
// Handles list literals

use pest::iterators::Pair;

use super::{AstBuilder, Rule};
use crate::ast::*;
use crate::error::*;

impl AstBuilder {
    /// Parse a list literal from a Pest pair
    pub(crate) fn parse_list(&self, pair: Pair<Rule>) -> ParseResult<ListLiteral> {
        let span = self.span(&pair);
        let mut elements = Vec::new();

        for inner_pair in pair.into_inner() {
            if inner_pair.as_rule() == Rule::list_elements {
                for element_pair in inner_pair.into_inner() {
                    elements.push(self.parse_expression(element_pair)?);
                }
            } // Brackets and commas are not exposed
        }

        Ok(ListLiteral { elements, span })
    }
}
