// PyMancer Parser Library
// Pest-based parser for the PyMancer spell language, a small Python subset

pub mod ast;
pub mod error;
pub mod parser;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

pub use ast::*;
pub use error::*;
pub use parser::*;

/// Marker the exercises use for blanks the student has not filled yet
pub const DEFAULT_PLACEHOLDER: &str = "???";

// Main parsing functions
pub fn parse_program(input: &str) -> Result<Program, ParseError> {
    parser::PymancerParser::parse_program_with_placeholder(input, DEFAULT_PLACEHOLDER)
}

pub fn parse_program_with_placeholder(
    input: &str,
    placeholder: &str,
) -> Result<Program, ParseError> {
    parser::PymancerParser::parse_program_with_placeholder(input, placeholder)
}

pub fn parse_expression(input: &str) -> Result<Expression, ParseError> {
    parser::PymancerParser::parse_expression(input)
}

pub fn parse_condition(input: &str) -> Result<Condition, ParseError> {
    parser::PymancerParser::parse_condition(input)
}

/// Classify one line of source into its statement form
pub fn classify_line(input: &str) -> Result<Statement, ParseError> {
    parser::PymancerParser::classify_line(input)
}

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
