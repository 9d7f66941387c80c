//! Res CLI - Command-line REPL and interpreter
//!
//! This is a thin wrapper around res-core that builds the executable.
//! Given a file or an inline program it runs it once; with neither it
//! starts an interactive session.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use res_core::{Interpreter, RunOutcome, StdoutLogger};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod repl;

#[derive(Parser, Debug)]
#[command(name = "res")]
#[command(version, about = "Run a Res program, or start a REPL with no arguments")]
struct Cli {
    /// Path to a program file
    file: Option<PathBuf>,

    /// Run this program text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Steps to run per batch before yielding
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,

    /// Print the stack when the program ends (and under each complaint)
    #[arg(long)]
    stack: bool,
}

fn main() -> ExitCode {
    // Engine diagnostics are off unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let program = match (&cli.file, &cli.eval) {
        (Some(path), _) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("res: can't read {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(text)) => text.clone(),
        (None, None) => {
            return match repl::run_repl(cli.max_steps, cli.stack) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("res: {}", e);
                    ExitCode::FAILURE
                }
            };
        }
    };

    let logger = StdoutLogger { show_stack: cli.stack };
    let mut interp = Interpreter::with_defaults(&program, Box::new(logger));
    let outcome = run_batches(&mut interp, cli.max_steps);

    if cli.stack {
        println!();
        println!("{}", interp.display_stack());
    }

    match outcome {
        RunOutcome::Finished => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Runs until the program finishes or halts, `max_steps` at a time.
pub(crate) fn run_batches(interp: &mut Interpreter, max_steps: usize) -> RunOutcome {
    let mut batches = 0usize;
    loop {
        match interp.run(Some(max_steps.max(1))) {
            RunOutcome::Suspended => {
                batches += 1;
                tracing::trace!(batches, "batch suspended");
            }
            outcome => {
                tracing::debug!(batches, ?outcome, "run ended");
                return outcome;
            }
        }
    }
}
