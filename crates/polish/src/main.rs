//! `polish` command-line calculator
//!
//! ```text
//! polish "* + 1 2 3"        one expression, print the result
//! polish < script.txt       batch mode, one line at a time
//! polish                    interactive mode on a terminal
//! ```

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use polish::{evaluate_with, DivisionPolicy, EvalContext, Outcome, Session, SessionError};

const PROMPT: &str = "polish> ";

/// Evaluate arithmetic written in prefix (Polish) notation.
#[derive(Parser, Debug)]
#[command(name = "polish", version, about)]
struct Cli {
    /// Expression to evaluate, e.g. "* + 1 2 3". Reads stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Divide by zero IEEE-style (inf, -inf, nan) instead of failing
    #[arg(long)]
    ieee_division: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One line of JSON output.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every evaluation succeeded.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let division = if cli.ieee_division {
        DivisionPolicy::Ieee
    } else {
        DivisionPolicy::Strict
    };
    let ctx = EvalContext::with_division(division);

    if let Some(expression) = &cli.expression {
        let result = evaluate_with(expression, &ctx)
            .map(Outcome::Value)
            .map_err(SessionError::from);
        return report(cli.format, expression, &result);
    }

    let mut session = Session::with_context(ctx);
    if io::stdin().is_terminal() {
        interactive(&mut session, cli.format)
    } else {
        batch(&mut session, cli.format)
    }
}

/// Read lines from stdin until EOF; keep going after failed lines.
fn batch(session: &mut Session, format: Format) -> anyhow::Result<bool> {
    info!("reading expressions from stdin");
    let mut all_ok = true;

    for (index, line) in io::stdin().lock().split(b'\n').enumerate() {
        let mut bytes = line.context("failed to read from stdin")?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                let input = String::from_utf8_lossy(e.as_bytes()).into_owned();
                let message = format!("line {} is not valid UTF-8", index + 1);
                report_error(format, &input, &message)?;
                all_ok = false;
                continue;
            }
        };

        let result = session.execute(&line);
        all_ok &= report(format, &line, &result)?;
    }

    Ok(all_ok)
}

fn interactive(session: &mut Session, format: Format) -> anyhow::Result<bool> {
    info!("starting interactive session");
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor
                        .add_history_entry(line.as_str())
                        .context("failed to record history")?;
                }
                let result = session.execute(&line);
                report(format, &line, &result)?;
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read line"),
        }
    }

    Ok(true)
}

/// Print one result; returns whether it was a success.
fn report(
    format: Format,
    input: &str,
    result: &Result<Outcome, SessionError>,
) -> anyhow::Result<bool> {
    match result {
        Ok(Outcome::Empty) => {}
        Ok(outcome) => match format {
            Format::Text => println!("{}", outcome),
            Format::Json => print_json(&Report {
                input: input.trim(),
                outcome: Some(outcome),
                error: None,
            })?,
        },
        Err(e) => {
            debug!(input, error = %e, "line failed");
            report_error(format, input, &e.to_string())?;
        }
    }

    Ok(result.is_ok())
}

/// Errors always go to stderr; JSON mode also records them on stdout.
fn report_error(format: Format, input: &str, message: &str) -> anyhow::Result<()> {
    eprintln!("error: {}", message);
    if format == Format::Json {
        print_json(&Report {
            input: input.trim(),
            outcome: None,
            error: Some(message.to_string()),
        })?;
    }
    Ok(())
}

fn print_json(report: &Report<'_>) -> anyhow::Result<()> {
    let line = serde_json::to_string(report).context("failed to serialize result")?;
    println!("{}", line);
    Ok(())
}

/// Log to stderr. `-v` flags win over `POLISH_LOG`, which wins over `RUST_LOG`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => std::env::var("POLISH_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
