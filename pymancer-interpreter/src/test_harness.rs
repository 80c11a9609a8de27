//! Interpreter session for testing spells
//!
//! Wraps an [`Interpreter`] with assertion helpers that return descriptive
//! errors instead of panicking, so tests can `.unwrap()` them and get a
//! readable failure.

use crate::{ErrorInfo, ErrorKind, ExecutionResult, Interpreter, InterpreterConfig};
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by session assertions
#[derive(Debug, Error, Diagnostic, Clone, PartialEq)]
pub enum TestHarnessError {
    #[error("Assertion failed: expected output {expected:?}, but got {actual:?}")]
    OutputMismatch { expected: String, actual: String },

    #[error("Expected the spell to succeed, but it failed with {error}")]
    UnexpectedFailure { error: ErrorInfo, output: String },

    #[error("Expected a {expected} failure, but the spell succeeded with output {output:?}")]
    UnexpectedSuccess { expected: ErrorKind, output: String },

    #[error("Expected a {expected} failure, but got {actual}")]
    WrongErrorKind { expected: ErrorKind, actual: ErrorInfo },
}

/// Interpreter session for evaluating spells under one configuration
#[derive(Debug, Clone, Default)]
pub struct InterpreterSession {
    interpreter: Interpreter,
}

impl InterpreterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InterpreterConfig) -> Self {
        Self {
            interpreter: Interpreter::new(config),
        }
    }

    pub fn run(&self, source: &str) -> ExecutionResult {
        self.interpreter.evaluate(source).into()
    }

    /// Assert the spell succeeds and prints exactly `expected`
    pub fn assert_output(&self, source: &str, expected: &str) -> Result<(), TestHarnessError> {
        let result = self.run(source);
        if let Some(error) = result.error {
            return Err(TestHarnessError::UnexpectedFailure {
                error,
                output: result.output,
            });
        }
        if result.output != expected {
            return Err(TestHarnessError::OutputMismatch {
                expected: expected.to_string(),
                actual: result.output,
            });
        }
        Ok(())
    }

    /// Assert the spell fails with `kind`, returning the error for further checks
    pub fn assert_error_kind(
        &self,
        source: &str,
        kind: ErrorKind,
    ) -> Result<ErrorInfo, TestHarnessError> {
        let result = self.run(source);
        match result.error {
            None => Err(TestHarnessError::UnexpectedSuccess {
                expected: kind,
                output: result.output,
            }),
            Some(error) if error.kind != kind => Err(TestHarnessError::WrongErrorKind {
                expected: kind,
                actual: error,
            }),
            Some(error) => Ok(error),
        }
    }

    /// Assert the spell fails with `kind` after printing exactly `expected`
    pub fn assert_partial_output(
        &self,
        source: &str,
        expected: &str,
        kind: ErrorKind,
    ) -> Result<ErrorInfo, TestHarnessError> {
        let error = self.assert_error_kind(source, kind)?;
        let output = self.run(source).output;
        if output != expected {
            return Err(TestHarnessError::OutputMismatch {
                expected: expected.to_string(),
                actual: output,
            });
        }
        Ok(error)
    }
}
