//! Acceptance tests for the PyMancer interpreter
//!
//! These tests drive whole spells through parse and execution and check the
//! `ExecutionResult` a host would see.

pub mod test_acceptance_control_flow;
pub mod test_acceptance_statements;
