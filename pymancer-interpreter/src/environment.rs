//! Variable scope for one spell execution.
//!
//! There is a single flat scope: loops and `if` bodies bind into it directly.

use crate::error::{Result, RuntimeError};
use crate::value::Value;
use pymancer_parser::Identifier;
use std::collections::HashMap;
use std::rc::Rc;

/// Name to value bindings
#[derive(Debug, Default)]
pub struct Scope {
    variables: HashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name, replacing any previous value
    pub fn define(&mut self, name: String, value: Value) {
        if let Some(previous) = self.variables.insert(name, value) {
            dismantle(vec![previous]);
        }
    }

    /// Look up a name used on `line`, failing with a NameError when unbound
    pub fn lookup(&self, identifier: &Identifier, line: usize) -> Result<&Value> {
        self.variables.get(&identifier.name).ok_or_else(|| {
            RuntimeError::undefined_variable(&identifier.name, line, identifier.span)
        })
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        dismantle(self.variables.drain().map(|(_, value)| value).collect());
    }
}

/// Free values one list level at a time
///
/// Lists nest as deep as a spell builds them; a recursive drop of a deep
/// chain would overflow the stack.
fn dismantle(mut pending: Vec<Value>) {
    while let Some(value) = pending.pop() {
        if let Value::List(list) = value {
            if let Ok(items) = Rc::try_unwrap(list) {
                pending.extend(items.into_inner());
            }
        }
    }
}
