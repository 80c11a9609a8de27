// PyMancer Parser Error Handling
// Every parse failure is a syntax error tied to a source line, with miette labels

use crate::parser::Rule;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Main parse error type with miette integration
///
/// Spans are absolute byte offsets into the program source, so a report can be
/// rendered by attaching the full source with `Report::with_source_code`.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unresolved placeholder on line {line}. All voids must be filled.")]
    #[diagnostic(
        code(pymancer::parse::unresolved_placeholder),
        help("Replace `{marker}` with one of the offered tokens")
    )]
    UnresolvedPlaceholder {
        line: usize,
        marker: String,
        #[label("unfilled placeholder")]
        span: SourceSpan,
    },

    #[error("Invalid syntax on line {line}: {message}")]
    #[diagnostic(
        code(pymancer::parse::invalid_syntax),
        help(
            "Supported statements: assignment, print(...), list.append(...), `if <condition>:` and `for <name> in <list>:`"
        )
    )]
    InvalidSyntax {
        line: usize,
        message: String,
        #[label("not understood")]
        span: SourceSpan,
    },

    #[error("Invalid integer literal on line {line}: {found}")]
    #[diagnostic(
        code(pymancer::parse::invalid_integer),
        help("Integer literals must fit in a signed 64-bit number")
    )]
    InvalidInteger {
        line: usize,
        found: String,
        #[label("invalid integer")]
        span: SourceSpan,
    },

    #[error("Nested block on line {line}: the body of `if` or `for` must be a single simple statement")]
    #[diagnostic(
        code(pymancer::parse::nested_block),
        help("Bodies may assign, print or append, but cannot open another block")
    )]
    NestedBlock {
        line: usize,
        #[label("block header used as a body")]
        span: SourceSpan,
    },

    #[error("Unexpected grammar rule on line {line}")]
    #[diagnostic(
        code(pymancer::parse::unexpected_rule),
        help("Expected rule: {expected}")
    )]
    UnexpectedRule {
        line: usize,
        expected: String,
        found: String,
        #[label("found {found}")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Create a parse error from a Pest error raised while parsing one line
    ///
    /// `offset` is the byte position of the line start in the full source.
    pub fn from_pest_error(error: pest::error::Error<Rule>, line: usize, offset: usize) -> Self {
        let span = match error.location {
            pest::error::InputLocation::Pos(pos) => SourceSpan::new((offset + pos).into(), 1),
            pest::error::InputLocation::Span((start, end)) => {
                SourceSpan::new((offset + start).into(), end - start)
            }
        };

        let error = error.renamed_rules(rule_to_user_friendly_description);
        ParseError::InvalidSyntax {
            line,
            message: error.variant.message().into_owned(),
            span,
        }
    }

    /// Create an unresolved placeholder error
    pub fn unresolved_placeholder(line: usize, marker: &str, span: SourceSpan) -> Self {
        ParseError::UnresolvedPlaceholder {
            line,
            marker: marker.to_string(),
            span,
        }
    }

    /// Create an invalid integer error
    pub fn invalid_integer(line: usize, found: String, span: SourceSpan) -> Self {
        ParseError::InvalidInteger { line, found, span }
    }

    /// Create a nested block error
    pub fn nested_block(line: usize, span: SourceSpan) -> Self {
        ParseError::NestedBlock { line, span }
    }

    /// The 1-based source line the error belongs to
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnresolvedPlaceholder { line, .. }
            | ParseError::InvalidSyntax { line, .. }
            | ParseError::InvalidInteger { line, .. }
            | ParseError::NestedBlock { line, .. }
            | ParseError::UnexpectedRule { line, .. } => *line,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            ParseError::UnresolvedPlaceholder { span, .. }
            | ParseError::InvalidSyntax { span, .. }
            | ParseError::InvalidInteger { span, .. }
            | ParseError::NestedBlock { span, .. }
            | ParseError::UnexpectedRule { span, .. } => *span,
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Convert a parser rule to a user-friendly description
fn rule_to_user_friendly_description(rule: &Rule) -> String {
    match rule {
        Rule::identifier => "a name (like spell or mana_level)".to_string(),
        Rule::integer => "a number (like 100)".to_string(),
        Rule::boolean | Rule::boolean_true | Rule::boolean_false => {
            "True or False".to_string()
        }
        Rule::string | Rule::single_quoted | Rule::double_quoted => {
            "a string (like 'authorized')".to_string()
        }
        Rule::list => "a list (like ['Sage', 'Water'])".to_string(),
        Rule::len_call => "len(...)".to_string(),
        Rule::expression => "a value or a name".to_string(),
        Rule::condition | Rule::membership | Rule::equality | Rule::bare_condition => {
            "a condition".to_string()
        }
        Rule::statement => "a statement".to_string(),
        Rule::op_and => "`and`".to_string(),
        Rule::op_in => "`in`".to_string(),
        Rule::op_equal => "`==`".to_string(),
        Rule::op_assign => "`=`".to_string(),
        Rule::kw_if => "`if`".to_string(),
        Rule::kw_for => "`for`".to_string(),
        Rule::kw_print => "`print`".to_string(),
        Rule::kw_len => "`len`".to_string(),
        Rule::EOI => "end of line".to_string(),
        other => format!("{other:?}"),
    }
}
