//! PyMancer Interpreter
//!
//! Executes spells written in a small Python subset: assignment, `print`,
//! `list.append`, `len`, and one-line `if` and `for` blocks.
//!
//! Hosts call [`execute`] for a flat [`ExecutionResult`], or drive an
//! [`Interpreter`] directly to get the rich miette diagnostic on failure.
//! Each call owns its scope and output buffer, so runs never observe one
//! another and any number may proceed concurrently.

#![allow(clippy::result_large_err)]

pub mod classify;
pub mod config;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod interpreter;
pub mod test_harness;
pub mod value;

// Include tests directory with all test modules
#[cfg(test)]
#[path = "tests/mod.rs"]
pub mod tests;

// Re-export public API
pub use classify::{ErrorInfo, ErrorKind, ExecutionError, ExecutionResult};
pub use config::{DEFAULT_MAX_STEPS, InterpreterConfig};
pub use environment::Scope;
pub use error::RuntimeError;
pub use evaluator::ExpressionEvaluator;
pub use interpreter::{Evaluation, Interpreter};
pub use test_harness::{InterpreterSession, TestHarnessError};
pub use value::{ListRef, Value};

/// Run a spell with the default configuration
pub fn execute(source: &str) -> ExecutionResult {
    execute_with_config(source, &InterpreterConfig::default())
}

/// Run a spell with an explicit placeholder marker and step ceiling
pub fn execute_with_config(source: &str, config: &InterpreterConfig) -> ExecutionResult {
    Interpreter::new(config.clone()).evaluate(source).into()
}
