//! Runtime error types for the PyMancer interpreter.
//!
//! Every runtime failure records the source line it happened on and the span of
//! the offending node, so reports render with miette labels against the spell.

use miette::{Diagnostic, SourceSpan};
use pymancer_parser::Span;
use thiserror::Error;

/// Runtime errors that can occur while executing a spell
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("name '{name}' is not defined")]
    #[diagnostic(
        code(pymancer::runtime::undefined_variable),
        help("Assign `{name}` before using it")
    )]
    UndefinedVariable {
        name: String,
        line: usize,
        #[label("undefined variable")]
        span: SourceSpan,
    },

    #[error("{message}")]
    #[diagnostic(
        code(pymancer::runtime::type_error),
        help("Check that the value has the expected kind")
    )]
    TypeError {
        message: String,
        line: usize,
        #[label("type mismatch here")]
        span: SourceSpan,
    },

    #[error("'{type_name}' object has no attribute '{attribute}'")]
    #[diagnostic(
        code(pymancer::runtime::attribute_error),
        help("Only lists support methods, and `append` is the only one")
    )]
    AttributeError {
        type_name: String,
        attribute: String,
        line: usize,
        #[label("unsupported method")]
        span: SourceSpan,
    },

    #[error("Step limit of {limit} exceeded")]
    #[diagnostic(
        code(pymancer::runtime::step_limit_exceeded),
        help("The spell ran too long; raise the limit with --max-steps if this is expected")
    )]
    StepLimitExceeded {
        limit: usize,
        line: usize,
        #[label("limit reached here")]
        span: SourceSpan,
    },
}

impl RuntimeError {
    /// Create an undefined variable error
    pub fn undefined_variable(name: &str, line: usize, span: Span) -> Self {
        Self::UndefinedVariable {
            name: name.to_string(),
            line,
            span: span.into(),
        }
    }

    /// Create a type error with a complete message
    pub fn type_error(message: String, line: usize, span: Span) -> Self {
        Self::TypeError {
            message,
            line,
            span: span.into(),
        }
    }

    /// Create an attribute error for `type_name.attribute`
    pub fn attribute_error(type_name: &str, attribute: &str, line: usize, span: Span) -> Self {
        Self::AttributeError {
            type_name: type_name.to_string(),
            attribute: attribute.to_string(),
            line,
            span: span.into(),
        }
    }

    pub fn step_limit_exceeded(limit: usize, line: usize, span: Span) -> Self {
        Self::StepLimitExceeded {
            limit,
            line,
            span: span.into(),
        }
    }

    /// The 1-based source line the error was raised on
    pub fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::AttributeError { line, .. }
            | Self::StepLimitExceeded { line, .. } => *line,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::UndefinedVariable { span, .. }
            | Self::TypeError { span, .. }
            | Self::AttributeError { span, .. }
            | Self::StepLimitExceeded { span, .. } => *span,
        }
    }
}

/// Type alias for interpreter results
pub type Result<T> = std::result::Result<T, RuntimeError>;
