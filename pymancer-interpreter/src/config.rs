//! Interpreter configuration

use pymancer_parser::DEFAULT_PLACEHOLDER;

/// Default ceiling on executed statements per run
pub const DEFAULT_MAX_STEPS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Marker for unfilled blanks; any line holding it is a syntax error.
    /// Empty disables the check.
    pub placeholder: String,
    /// Executed statements allowed before the run fails, body executions included
    pub max_steps: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl InterpreterConfig {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}
