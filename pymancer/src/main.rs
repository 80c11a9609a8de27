use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, MietteHandlerOpts, NamedSource, Report, Result};
use pymancer_interpreter::{DEFAULT_MAX_STEPS, Interpreter, InterpreterConfig};
use pymancer_parser::{DEFAULT_PLACEHOLDER, parse_program_with_placeholder};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

mod chapters;
mod repl;
mod sexpr;

use chapters::{BLANK, CHAPTERS, Chapter, find_chapter};
use repl::{Repl, ReplConfig};

#[derive(Parser)]
#[command(
    name = "pymancer",
    version,
    about = "Cast PyMancer spells: a tiny, safe subset of Python",
    long_about = "PyMancer runs short spells written in a restricted Python subset and checks them against the built-in exercise chapters.",
    before_help = format!("🔮 PYMANCER Spell Interpreter v{} 🪄\n", env!("CARGO_PKG_VERSION"))
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a spell and print its output
    Run {
        /// Spell source file (use '-' to read from stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        execution: ExecutionArgs,
    },

    /// Parse spell files and display their syntax tree
    Parse {
        /// Spell source files to parse (use '-' to read from stdin)
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Show detailed span information in output
        #[arg(short, long)]
        spans: bool,

        /// Marker for unfilled blanks
        #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
        placeholder: String,
    },

    /// List the built-in chapters
    Chapters,

    /// Show a chapter, fill its blanks and check the result
    Chapter {
        /// Chapter number
        id: u32,

        /// Token for the next blank, in order; repeat once per blank
        #[arg(short, long = "token", value_name = "TOKEN")]
        tokens: Vec<String>,

        /// Show the chapter hint
        #[arg(long)]
        hint: bool,

        #[command(flatten)]
        execution: ExecutionArgs,
    },

    /// Start an interactive session
    Repl {
        /// Do not load or save line history
        #[arg(long)]
        no_history: bool,

        #[command(flatten)]
        execution: ExecutionArgs,
    },
}

/// Interpreter settings shared by every command that runs spells
#[derive(Args)]
struct ExecutionArgs {
    /// Marker for unfilled blanks; lines holding it are rejected
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    placeholder: String,

    /// Maximum statements executed before the spell is stopped
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,
}

impl ExecutionArgs {
    fn to_config(&self) -> InterpreterConfig {
        InterpreterConfig::default()
            .with_placeholder(self.placeholder.clone())
            .with_max_steps(self.max_steps)
    }
}

fn main() {
    // Set up miette error reporting with syntax highlighting
    setup_miette_handler();
    init_tracing();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Run { file, execution }) => handle_run_command(&file, &execution.to_config()),
        Some(Commands::Parse {
            files,
            spans,
            placeholder,
        }) => handle_parse_command(files, spans, &placeholder),
        Some(Commands::Chapters) => {
            handle_chapters_command();
            Ok(true)
        }
        Some(Commands::Chapter {
            id,
            tokens,
            hint,
            execution,
        }) => handle_chapter_command(id, &tokens, hint, &execution.to_config()),
        Some(Commands::Repl {
            no_history,
            execution,
        }) => handle_repl_command(no_history, &execution),
        None => {
            // No subcommand provided, show help
            Cli::parse_from(["pymancer", "--help"]);
            Ok(true)
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(report) => {
            eprintln!("{report:?}");
            process::exit(1);
        }
    }
}

/// Install a tracing subscriber when RUST_LOG is set
///
/// Logs go to stderr so spell output on stdout stays clean.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Configure miette for error reporting with syntax highlighting
fn setup_miette_handler() {
    use miette::highlighters::SyntectHighlighter;
    use syntect::highlighting::ThemeSet;

    // The default syntax set ships Python, which is all a spell needs
    let syntax_set = syntect::parsing::SyntaxSet::load_defaults_newlines();
    let theme_set = ThemeSet::load_defaults();

    // Use the "base16-ocean.dark" theme which is a nice default
    let Some(theme) = theme_set.themes.get("base16-ocean.dark").cloned() else {
        return;
    };
    let highlighter = SyntectHighlighter::new(syntax_set, theme, true);

    miette::set_hook(Box::new(move |_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .color(true)
                .tab_width(4)
                .with_cause_chain()
                .with_syntax_highlighting(highlighter.clone())
                .build(),
        )
    }))
    .ok();
}

/// Read a spell from a file, or from stdin for '-'
fn read_source(file_path: &Path) -> Result<(String, String)> {
    if file_path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).into_diagnostic()?;
        return Ok((buffer, "<stdin>".to_string()));
    }

    if !file_path.exists() {
        return Err(miette::miette!("File not found: {}", file_path.display()));
    }

    let source = fs::read_to_string(file_path).into_diagnostic()?;
    Ok((source, file_path.display().to_string()))
}

/// Spell names in reports are shown with a .py suffix so syntect picks Python
fn report_name(source_name: &str) -> String {
    if source_name.ends_with(".py") {
        source_name.to_string()
    } else {
        format!("{source_name}.py")
    }
}

fn handle_run_command(file_path: &Path, config: &InterpreterConfig) -> Result<bool> {
    let (source, source_name) = read_source(file_path)?;
    let evaluation = Interpreter::new(config.clone()).evaluate(&source);

    // Output printed before a failure is still shown
    if !evaluation.output.is_empty() {
        println!("{}", evaluation.output);
    }

    match evaluation.error {
        None => Ok(true),
        Some(error) => {
            let report = Report::new(error)
                .with_source_code(NamedSource::new(report_name(&source_name), source));
            Err(report)
        }
    }
}

fn handle_parse_command(files: Vec<PathBuf>, spans: bool, placeholder: &str) -> Result<bool> {
    let mut success = true;
    let multiple_files = files.len() > 1;

    for file_path in files {
        let display_name = if file_path.to_str() == Some("-") {
            "<stdin>".to_string()
        } else {
            file_path.display().to_string()
        };

        match parse_single_file(&file_path, spans, placeholder) {
            Ok(()) => {
                if multiple_files {
                    println!("✅ {display_name}");
                }
            }
            Err(e) => {
                eprintln!("{e:?}");
                success = false;
            }
        }
    }

    Ok(success)
}

fn parse_single_file(file_path: &Path, spans: bool, placeholder: &str) -> Result<()> {
    let (source, source_name) = read_source(file_path)?;

    match parse_program_with_placeholder(&source, placeholder) {
        Ok(program) => {
            if spans {
                // Show full AST with span information for debugging
                println!("{program:#?}");
            } else {
                println!("{}", sexpr::format_program_as_sexpr(&program));
            }
            Ok(())
        }
        Err(error) => Err(Report::new(error)
            .with_source_code(NamedSource::new(report_name(&source_name), source))),
    }
}

fn handle_chapters_command() {
    for chapter in CHAPTERS {
        println!(
            "{:>2}. {} ({}) - {} blank(s)",
            chapter.id,
            chapter.title,
            chapter.difficulty,
            chapter.blanks()
        );
    }
}

fn handle_chapter_command(
    id: u32,
    tokens: &[String],
    hint: bool,
    config: &InterpreterConfig,
) -> Result<bool> {
    let chapter = find_chapter(id).into_diagnostic()?;
    print_chapter(chapter, hint);

    if tokens.is_empty() {
        println!(
            "\nFill the blanks with --token, one per blank, e.g. `pymancer chapter {id} --token {}`",
            chapter.tokens.first().copied().unwrap_or("TOKEN")
        );
        return Ok(true);
    }

    let attempt = match chapter.attempt(tokens, config) {
        Ok(attempt) => attempt,
        Err(error) => {
            eprintln!("⚠️  {error}");
            return Ok(false);
        }
    };

    println!("\nYour spell:\n{}\n", indent(&attempt.code));
    if !attempt.evaluation.output.is_empty() {
        println!("Output:\n{}\n", indent(&attempt.evaluation.output));
    }

    if let Some(error) = attempt.evaluation.error.clone() {
        let report =
            Report::new(error).with_source_code(NamedSource::new("spell.py", attempt.code.clone()));
        eprintln!("{report:?}");
    }

    if attempt.passed {
        println!("✨ The spell takes hold. Chapter {id} complete!");
    } else {
        println!("💨 The spell fizzles. Try another token.");
    }
    Ok(attempt.passed)
}

fn print_chapter(chapter: &Chapter, hint: bool) {
    println!("Chapter {}: {} [{}]", chapter.id, chapter.title, chapter.difficulty);
    println!("\n{}\n", chapter.story);
    println!("Task: {}", chapter.task);
    if hint {
        println!("Hint: {}", chapter.hint);
    }
    println!("\n{}\n", indent(chapter.starter_code));
    println!("Tokens for {}: {}", BLANK, chapter.tokens.join("  "));
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn handle_repl_command(no_history: bool, execution: &ExecutionArgs) -> Result<bool> {
    let defaults = ReplConfig::default();
    let config = ReplConfig {
        persist_history: !no_history,
        history_file: if no_history { None } else { defaults.history_file.clone() },
        placeholder: execution.placeholder.clone(),
        max_steps: execution.max_steps,
        ..defaults
    };

    let mut repl = Repl::with_config(config)?;
    repl.run()?;
    Ok(true)
}
