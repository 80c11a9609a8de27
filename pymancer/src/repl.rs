//! REPL (Read-Eval-Print Loop) for PyMancer spells
//!
//! Entered statements accumulate into a spell buffer. After every complete
//! statement the whole buffer runs again from a fresh scope, and only the
//! output the new statement added is shown. An entry that fails is rolled
//! back, so the buffer always holds a spell that runs cleanly.
//!
//! `if` and `for` headers prompt for their single body line before running.

use miette::{Diagnostic, NamedSource, Report};
use pymancer_interpreter::{ExecutionError, Interpreter, InterpreterConfig};
use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;

/// Errors that can occur in the REPL
#[derive(Debug, Error, Diagnostic)]
pub enum ReplError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Readline error: {source}")]
    Readline {
        #[from]
        source: ReadlineError,
    },

    #[error("REPL command error: {message}")]
    Command { message: String },
}

/// REPL configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt string for input
    pub prompt: String,

    /// Prompt shown while a header waits for its body line
    pub continuation_prompt: String,

    /// Enable history persistence
    pub persist_history: bool,

    /// History file path
    pub history_file: Option<String>,

    pub placeholder: String,

    pub max_steps: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        let interpreter = InterpreterConfig::default();
        Self {
            prompt: "pymancer> ".to_string(),
            continuation_prompt: "... ".to_string(),
            persist_history: true,
            history_file: Some(".pymancer_history".to_string()),
            placeholder: interpreter.placeholder,
            max_steps: interpreter.max_steps,
        }
    }
}

impl ReplConfig {
    pub fn interpreter_config(&self) -> InterpreterConfig {
        InterpreterConfig::default()
            .with_placeholder(self.placeholder.clone())
            .with_max_steps(self.max_steps)
    }
}

/// REPL session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplStats {
    /// Statements accepted into the buffer
    pub statements_accepted: usize,

    /// Entries rolled back because the spell failed
    pub errors_encountered: usize,

    /// Total REPL commands executed
    pub commands_executed: usize,

    /// Steps the buffer took on its last successful run
    pub last_run_steps: usize,
}

/// Result of feeding one line to the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplResult {
    /// Statement accepted; holds the output it added, possibly empty
    Output(String),

    /// Header stored; the next line is its body
    AwaitingBody,

    /// Executed a REPL command
    Command { message: String },

    /// Empty line or comment
    Empty,

    /// Exit request
    Exit,
}

/// REPL state, independent of the terminal
#[derive(Debug, Clone)]
pub struct ReplSession {
    interpreter: Interpreter,

    /// Accepted entries; a header entry carries its body line
    entries: Vec<String>,

    /// Header waiting for its body line
    pending_header: Option<String>,

    /// Output of the buffer as of the last accepted entry
    shown_output: String,

    /// Source of the most recent run, for error reports
    last_source: String,

    config: ReplConfig,

    stats: ReplStats,
}

impl ReplSession {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            interpreter: Interpreter::new(config.interpreter_config()),
            entries: Vec::new(),
            pending_header: None,
            shown_output: String::new(),
            last_source: String::new(),
            config,
            stats: ReplStats::default(),
        }
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    pub fn stats(&self) -> &ReplStats {
        &self.stats
    }

    pub fn is_awaiting_body(&self) -> bool {
        self.pending_header.is_some()
    }

    /// The accepted spell, one entry per statement
    pub fn buffer(&self) -> String {
        self.entries.join("\n")
    }

    /// Source of the most recent run, accepted or not
    pub fn last_source(&self) -> &str {
        &self.last_source
    }

    /// Drop a header still waiting for its body
    pub fn cancel_pending(&mut self) {
        self.pending_header = None;
    }

    /// Feed one line of input
    pub fn evaluate_line(&mut self, line: &str) -> Result<ReplResult, ReplError> {
        if let Some(header) = self.pending_header.take() {
            return self.accept(format!("{header}\n{}", indent_body(line)));
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(ReplResult::Empty);
        }

        if trimmed.starts_with('/') {
            return self.execute_command(trimmed);
        }

        let entry = trimmed.to_string();
        let is_header = pymancer_parser::classify_line(&entry)
            .map(|statement| statement.is_block_header())
            .unwrap_or(false);

        // A header with a blank still gets rejected now, not after its body
        if is_header && !entry.contains(self.config.placeholder.as_str()) {
            self.pending_header = Some(entry);
            return Ok(ReplResult::AwaitingBody);
        }

        self.accept(entry)
    }

    /// Run the buffer with `entry` appended, keeping the entry only on success
    fn accept(&mut self, entry: String) -> Result<ReplResult, ReplError> {
        let mut source = self.buffer();
        if !source.is_empty() {
            source.push('\n');
        }
        source.push_str(&entry);

        let evaluation = self.interpreter.evaluate(&source);
        self.last_source = source;

        if let Some(error) = evaluation.error {
            self.stats.errors_encountered += 1;
            return Err(ReplError::Execution(error));
        }

        let added = new_output(&self.shown_output, &evaluation.output);
        self.entries.push(entry);
        self.shown_output = evaluation.output;
        self.stats.statements_accepted += 1;
        self.stats.last_run_steps = evaluation.steps;

        Ok(ReplResult::Output(added))
    }

    /// Re-run the current buffer after it changed outside `accept`
    fn replay(&mut self) {
        let evaluation = self.interpreter.evaluate(&self.buffer());
        self.shown_output = evaluation.output;
        self.stats.last_run_steps = evaluation.steps;
    }

    /// Execute a REPL command
    fn execute_command(&mut self, command: &str) -> Result<ReplResult, ReplError> {
        self.stats.commands_executed += 1;

        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some(&name) = parts.first() else {
            return Ok(ReplResult::Empty);
        };

        match name {
            "/help" | "/h" => Ok(ReplResult::Command {
                message: self.help_message(),
            }),

            "/show" => Ok(ReplResult::Command {
                message: self.format_buffer(),
            }),

            "/clear" => {
                self.entries.clear();
                self.pending_header = None;
                self.shown_output.clear();
                self.stats.last_run_steps = 0;
                Ok(ReplResult::Command {
                    message: "Spell buffer cleared".to_string(),
                })
            }

            "/undo" => match self.entries.pop() {
                Some(entry) => {
                    self.replay();
                    Ok(ReplResult::Command {
                        message: format!("Removed: {}", entry.replace('\n', " / ")),
                    })
                }
                None => Ok(ReplResult::Command {
                    message: "Nothing to undo".to_string(),
                }),
            },

            "/stats" => Ok(ReplResult::Command {
                message: self.format_stats(),
            }),

            "/config" => Ok(ReplResult::Command {
                message: self.format_config(),
            }),

            "/quit" | "/q" | "/exit" => Ok(ReplResult::Exit),

            unknown => Err(ReplError::Command {
                message: format!("Unknown command: {unknown}. Type /help for available commands."),
            }),
        }
    }

    /// Get help message
    fn help_message(&self) -> String {
        r#"PyMancer REPL Commands:
  /help, /h           Show this help message
  /show               Show the spell entered so far
  /clear              Forget the whole spell
  /undo               Remove the last statement
  /stats              Show session statistics
  /config             Show current configuration
  /quit, /q, /exit    Exit the REPL

Examples:
  souls = ['Merlin', 'Arthur']
  souls.append('Gwen')
  print(len(souls))
  for soul in souls:  # the body is asked for on the next line
  ...     print(soul)

Every statement re-runs the whole spell; a statement that fails is discarded.
Use Ctrl+C to cancel a pending body, Ctrl+D to exit."#
            .to_string()
    }

    fn format_buffer(&self) -> String {
        if self.entries.is_empty() {
            return "The spell is empty".to_string();
        }

        self.buffer()
            .lines()
            .enumerate()
            .map(|(index, line)| format!("{:>3} | {line}", index + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format session statistics
    fn format_stats(&self) -> String {
        format!(
            r#"Session Statistics:
  Statements accepted: {}
  Errors encountered: {}
  Commands executed: {}
  Steps on last run: {}"#,
            self.stats.statements_accepted,
            self.stats.errors_encountered,
            self.stats.commands_executed,
            self.stats.last_run_steps
        )
    }

    /// Format current configuration
    fn format_config(&self) -> String {
        format!(
            r#"REPL Configuration:
  Prompt: "{}"
  Continuation prompt: "{}"
  Persist history: {}
  History file: {}
  Placeholder: {}
  Max steps: {}"#,
            self.config.prompt,
            self.config.continuation_prompt,
            self.config.persist_history,
            self.config.history_file.as_deref().unwrap_or("<none>"),
            self.config.placeholder,
            self.config.max_steps
        )
    }
}

/// Body lines typed without indentation are indented for the user
fn indent_body(line: &str) -> String {
    if line.starts_with(' ') || line.starts_with('\t') {
        line.to_string()
    } else {
        format!("    {line}")
    }
}

/// The part of `current` that `previous` did not already show
fn new_output(previous: &str, current: &str) -> String {
    match current.strip_prefix(previous) {
        Some(rest) if !previous.is_empty() => rest.strip_prefix('\n').unwrap_or(rest).to_string(),
        _ => current.to_string(),
    }
}

/// Interactive terminal front end over a [`ReplSession`]
pub struct Repl {
    /// Interactive line editor with history
    editor: DefaultEditor,
    session: ReplSession,
}

impl Repl {
    /// Create a new REPL with custom configuration
    pub fn with_config(config: ReplConfig) -> Result<Self, ReplError> {
        let mut editor = DefaultEditor::new()?;

        // Load history if configured
        if config.persist_history {
            if let Some(ref history_file) = config.history_file {
                let _ = editor.load_history(history_file); // Ignore errors for new sessions
            }
        }

        Ok(Self {
            editor,
            session: ReplSession::new(config),
        })
    }

    /// Start the REPL main loop
    pub fn run(&mut self) -> Result<(), ReplError> {
        self.print_welcome();

        while let Some(line) = self.read_line()? {
            match self.session.evaluate_line(&line) {
                Ok(ReplResult::Exit) => break,
                Ok(result) => self.display_result(result),
                Err(error) => self.display_error(error),
            }
        }

        self.print_goodbye();
        self.save_history()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ReplError> {
        let prompt = if self.session.is_awaiting_body() {
            self.session.config().continuation_prompt.clone()
        } else {
            self.session.config().prompt.clone()
        };

        match self.editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                self.session.cancel_pending();
                Ok(Some(String::new()))
            }
            Err(ReadlineError::Eof) => Ok(None), // Exit REPL
            Err(err) => Err(ReplError::Readline { source: err }),
        }
    }

    fn display_result(&self, result: ReplResult) {
        match result {
            ReplResult::Output(output) if !output.is_empty() => println!("{output}"),
            ReplResult::Command { message } => println!("{message}"),
            ReplResult::Output(_) | ReplResult::AwaitingBody | ReplResult::Empty | ReplResult::Exit => {}
        }
    }

    /// Display an error against the spell that produced it
    fn display_error(&self, error: ReplError) {
        match error {
            ReplError::Execution(source) => {
                let named_source =
                    NamedSource::new("<repl>", self.session.last_source().to_string());
                let report = Report::new(source).with_source_code(named_source);
                eprintln!("{report:?}");
            }
            error => eprintln!("{:?}", Report::new(error)),
        }
    }

    fn print_welcome(&self) {
        println!("🔮 PyMancer REPL v{} 🪄", env!("CARGO_PKG_VERSION"));
        println!("Type /help for commands, /quit to exit");
        println!();
    }

    fn print_goodbye(&self) {
        println!("Farewell, spellcaster! 👋");
    }

    /// Save history to file
    fn save_history(&mut self) -> Result<(), ReplError> {
        if self.session.config().persist_history {
            if let Some(ref history_file) = self.session.config().history_file {
                self.editor.save_history(history_file)?;
            }
        }
        Ok(())
    }
}
