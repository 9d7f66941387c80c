// REPL implementation using editline
//
// One engine lives for the whole session. Each line is run on top of what
// the previous lines left behind, so the stack and every stored name carry
// over; a complaint only stops the line it happened in.

use editline::{LineEditor, terminals::StdioTerminal};
use res_core::{Interpreter, RunOutcome, StdoutLogger};
use std::io::Write;

use crate::run_batches;

pub fn run_repl(max_steps: usize, show_stack: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!(" ____           ");
    println!("|  _ \\ ___  ___ ");
    println!("| |_) / _ \\/ __|");
    println!("|  _ <  __/\\__ \\");
    println!("|_| \\_\\___||___/ v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Type `quit` or press Ctrl-D to exit");
    println!("Type `reset` to start over with a fresh stack and namespace");
    println!();

    let logger = StdoutLogger { show_stack };
    let mut interp = Interpreter::with_defaults("", Box::new(logger));

    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                match trimmed {
                    "" => continue,
                    "quit" => break,
                    "reset" => {
                        interp.reset(Some(""), None);
                        continue;
                    }
                    _ => {}
                }

                interp.continue_with(trimmed);
                if run_batches(&mut interp, max_steps) == RunOutcome::Finished
                    && !interp.stack().is_empty()
                {
                    println!();
                    print!("Stack: {}", interp.display_stack());
                }
            }
            Err(editline::Error::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
