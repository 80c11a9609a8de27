//! Statement executor for PyMancer programs.

use crate::config::InterpreterConfig;
use crate::environment::Scope;
use crate::error::{Result, RuntimeError};
use crate::evaluator::ExpressionEvaluator;
use crate::value::Value;
use crate::ExecutionError;
use pymancer_parser::{
    ForStatement, IfStatement, MethodCall, Program, Statement, StatementKind,
    parse_program_with_placeholder,
};
use std::rc::Rc;
use tracing::{debug, trace};

/// Everything one run produced, kept even when the run failed
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Printed lines joined with `\n`, trailing whitespace trimmed
    pub output: String,
    /// Statements executed before the run finished or failed
    pub steps: usize,
    pub error: Option<ExecutionError>,
}

impl Evaluation {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs spells under one configuration
///
/// The interpreter holds no state between runs; every call starts from an
/// empty scope and an empty output buffer.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: InterpreterConfig,
}

impl Interpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Run a spell, returning its output or the first error
    pub fn run(&self, source: &str) -> std::result::Result<String, ExecutionError> {
        let evaluation = self.evaluate(source);
        match evaluation.error {
            Some(error) => Err(error),
            None => Ok(evaluation.output),
        }
    }

    /// Parse and run a spell, keeping partial output on failure
    ///
    /// Syntax errors are found before anything executes, so they always come
    /// back with empty output.
    pub fn evaluate(&self, source: &str) -> Evaluation {
        match parse_program_with_placeholder(source, &self.config.placeholder) {
            Ok(program) => self.evaluate_program(&program),
            Err(error) => {
                debug!(line = error.line(), "spell rejected by parser");
                Evaluation {
                    output: String::new(),
                    steps: 0,
                    error: Some(error.into()),
                }
            }
        }
    }

    /// Run an already parsed program
    pub fn evaluate_program(&self, program: &Program) -> Evaluation {
        let mut executor = Executor::new(&self.config);
        debug!(
            statements = program.statements.len(),
            max_steps = self.config.max_steps,
            "executing program"
        );

        let result = program
            .statements
            .iter()
            .try_for_each(|statement| executor.execute_statement(statement));

        debug!(
            steps = executor.steps,
            lines = executor.output.len(),
            variables = executor.scope.len(),
            success = result.is_ok(),
            "execution finished"
        );

        Evaluation {
            output: executor.output.join("\n").trim_end().to_string(),
            steps: executor.steps,
            error: result.err().map(ExecutionError::from),
        }
    }
}

/// Mutable state of a single run
struct Executor<'c> {
    config: &'c InterpreterConfig,
    scope: Scope,
    output: Vec<String>,
    steps: usize,
}

impl<'c> Executor<'c> {
    fn new(config: &'c InterpreterConfig) -> Self {
        Self {
            config,
            scope: Scope::new(),
            output: Vec::new(),
            steps: 0,
        }
    }

    fn evaluator(&self, line: usize) -> ExpressionEvaluator<'_> {
        ExpressionEvaluator::new(&self.scope, line)
    }

    fn count_step(&mut self, statement: &Statement) -> Result<()> {
        self.steps += 1;
        if self.steps > self.config.max_steps {
            return Err(RuntimeError::step_limit_exceeded(
                self.config.max_steps,
                statement.line,
                statement.span,
            ));
        }
        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<()> {
        self.count_step(statement)?;
        trace!(
            line = statement.line,
            form = statement.form_name(),
            step = self.steps,
            "execute"
        );

        match &statement.kind {
            StatementKind::Assignment(assignment) => {
                let value = self.evaluator(statement.line).evaluate(&assignment.value)?;
                self.scope.define(assignment.target.name.clone(), value);
            }
            StatementKind::Print(print) => {
                let text = match &print.argument {
                    Some(argument) => self.evaluator(statement.line).evaluate(argument)?.to_string(),
                    None => String::new(),
                };
                self.output.push(text);
            }
            StatementKind::MethodCall(call) => self.execute_method_call(call, statement.line)?,
            StatementKind::If(if_statement) => self.execute_if(if_statement, statement.line)?,
            StatementKind::For(for_statement) => self.execute_for(for_statement, statement.line)?,
        }

        Ok(())
    }

    fn execute_method_call(&mut self, call: &MethodCall, line: usize) -> Result<()> {
        let receiver = self.scope.lookup(&call.receiver, line)?;
        let items = match receiver.as_list() {
            Some(items) if call.method.name == "append" => Rc::clone(items),
            _ => {
                return Err(RuntimeError::attribute_error(
                    receiver.type_name(),
                    &call.method.name,
                    line,
                    call.method.span,
                ));
            }
        };

        // Evaluated before the push, so `xs.append(xs)` stores the list itself
        let item = self.evaluator(line).evaluate(&call.argument)?;
        items.borrow_mut().push(item);
        Ok(())
    }

    fn execute_if(&mut self, if_statement: &IfStatement, line: usize) -> Result<()> {
        let taken = self.evaluator(line).evaluate_condition(&if_statement.condition)?;
        trace!(line, taken, "if");

        match (&if_statement.body, taken) {
            (Some(body), true) => self.execute_statement(body),
            _ => Ok(()),
        }
    }

    fn execute_for(&mut self, for_statement: &ForStatement, line: usize) -> Result<()> {
        let iterable = self.scope.lookup(&for_statement.iterable, line)?;

        // Appends made by the body do not extend the running loop
        let snapshot = match iterable {
            Value::List(items) => items.borrow().clone(),
            other => {
                return Err(RuntimeError::type_error(
                    format!("'{}' object is not iterable", other.type_name()),
                    line,
                    for_statement.iterable.span,
                ));
            }
        };
        trace!(line, iterations = snapshot.len(), "for");

        for item in snapshot {
            self.scope.define(for_statement.variable.name.clone(), item);
            if let Some(body) = &for_statement.body {
                self.execute_statement(body)?;
            }
        }

        Ok(())
    }
}
