//! Error classification
//!
//! Maps the parser's and the executor's rich errors onto the flat
//! `{kind, message, line}` record hosts consume.

use crate::error::RuntimeError;
use miette::Diagnostic;
use pymancer_parser::ParseError;
use std::fmt;
use thiserror::Error;

/// Any failure of a spell run
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}

impl ExecutionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecutionError::Parse(_) => ErrorKind::SyntaxError,
            ExecutionError::Runtime(RuntimeError::UndefinedVariable { .. }) => {
                ErrorKind::NameError
            }
            ExecutionError::Runtime(RuntimeError::TypeError { .. }) => ErrorKind::TypeError,
            ExecutionError::Runtime(RuntimeError::AttributeError { .. }) => {
                ErrorKind::AttributeError
            }
            ExecutionError::Runtime(RuntimeError::StepLimitExceeded { .. }) => {
                ErrorKind::ResourceExhausted
            }
        }
    }

    pub fn line(&self) -> usize {
        match self {
            ExecutionError::Parse(error) => error.line(),
            ExecutionError::Runtime(error) => error.line(),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            kind: self.kind(),
            message: self.to_string(),
            line: Some(self.line()),
        }
    }
}

/// Error taxonomy shared by every failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SyntaxError,
    NameError,
    TypeError,
    AttributeError,
    ResourceExhausted,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::NameError => "NameError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::AttributeError => "AttributeError",
            ErrorKind::ResourceExhausted => "ResourceExhausted",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
    /// 1-based source line, when one is known
    pub line: Option<usize>,
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

/// Outcome of a spell run as seen by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Everything printed before the run finished or failed
    pub output: String,
    pub success: bool,
    pub error: Option<ErrorInfo>,
}

impl ExecutionResult {
    pub fn succeeded(output: String) -> Self {
        Self {
            output,
            success: true,
            error: None,
        }
    }

    pub fn failed(output: String, error: ErrorInfo) -> Self {
        Self {
            output,
            success: false,
            error: Some(error),
        }
    }
}

impl From<crate::Evaluation> for ExecutionResult {
    fn from(evaluation: crate::Evaluation) -> Self {
        match evaluation.error {
            Some(error) => ExecutionResult::failed(evaluation.output, error.to_error_info()),
            None => ExecutionResult::succeeded(evaluation.output),
        }
    }
}
