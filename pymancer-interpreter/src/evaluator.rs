//! Expression and condition evaluation
//!
//! Evaluation reads the scope but never changes it. Only the statement executor
//! binds names or appends to lists.

use crate::environment::Scope;
use crate::error::{Result, RuntimeError};
use crate::value::Value;
use pymancer_parser::{Condition, ConditionKind, Expression, ExpressionKind, LenCall};

/// Evaluates expressions and conditions for the statement on one source line
#[derive(Debug, Clone, Copy)]
pub struct ExpressionEvaluator<'s> {
    scope: &'s Scope,
    line: usize,
}

impl<'s> ExpressionEvaluator<'s> {
    pub fn new(scope: &'s Scope, line: usize) -> Self {
        Self { scope, line }
    }

    /// Evaluate an expression to a value
    pub fn evaluate(&self, expression: &Expression) -> Result<Value> {
        match &expression.kind {
            ExpressionKind::Identifier(identifier) => {
                self.scope.lookup(identifier, self.line).cloned()
            }
            ExpressionKind::Boolean(literal) => Ok(Value::Boolean(literal.value)),
            ExpressionKind::Integer(literal) => Ok(Value::Integer(literal.value)),
            ExpressionKind::String(literal) => Ok(Value::String(literal.value.clone())),
            ExpressionKind::List(literal) => {
                let items = literal
                    .elements
                    .iter()
                    .map(|element| self.evaluate(element))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::list(items))
            }
            ExpressionKind::Len(call) => self.evaluate_len(call),
        }
    }

    fn evaluate_len(&self, call: &LenCall) -> Result<Value> {
        let argument = self.evaluate(&call.argument)?;
        match argument.as_list() {
            Some(items) => {
                let len = items.borrow().len();
                Ok(Value::Integer(i64::try_from(len).unwrap_or(i64::MAX)))
            }
            None => Err(RuntimeError::type_error(
                format!("object of type '{}' has no len()", argument.type_name()),
                self.line,
                call.argument.span,
            )),
        }
    }

    /// Evaluate a condition to a boolean
    ///
    /// `and` short-circuits: terms after the first false one are never
    /// evaluated, so they cannot raise.
    pub fn evaluate_condition(&self, condition: &Condition) -> Result<bool> {
        match &condition.kind {
            ConditionKind::And(terms) => {
                for term in terms {
                    if !self.evaluate_condition(term)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            ConditionKind::Membership {
                element,
                collection,
            } => {
                let element = self.evaluate(element)?;
                let container = self.evaluate(collection)?;
                match container.as_list() {
                    Some(items) => {
                        let found = items.borrow().contains(&element);
                        Ok(found)
                    }
                    None => Err(RuntimeError::type_error(
                        format!(
                            "argument of type '{}' is not iterable",
                            container.type_name()
                        ),
                        self.line,
                        collection.span,
                    )),
                }
            }
            ConditionKind::Equality { left, right } => {
                Ok(self.evaluate(left)? == self.evaluate(right)?)
            }
            ConditionKind::Bare(operand) => {
                let value = self.evaluate(operand)?;
                value.as_bool().ok_or_else(|| {
                    RuntimeError::type_error(
                        format!("condition must be a Boolean, not '{}'", value.type_name()),
                        self.line,
                        operand.span,
                    )
                })
            }
        }
    }
}
