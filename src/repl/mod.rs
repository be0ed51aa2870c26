//! Interactive REPL for the calculator
//!
//! The loop reads one line at a time, trims it, and handles meta-commands
//! (`help`/`h`, `history`, `q`/`quit`/`exit`) before handing the line to the
//! engine. Successful results print with fixed 6-decimal precision; failures
//! print to stderr and the loop continues. Input lines are editable and
//! recallable via rustyline, with the line history saved under the home
//! directory (the engine's calculation history stays in-session only).

pub mod helper;

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::debug;

use crate::engine::Engine;
pub use helper::CalcHelper;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format a result with the fixed 6-decimal precision the REPL prints
pub fn format_result(value: f64) -> String {
    format!("{:.6}", value)
}

/// The interactive calculator shell
pub struct Repl {
    engine: Engine,
    editor: Editor<CalcHelper, DefaultHistory>,
    history_file: Option<PathBuf>,
}

impl Repl {
    /// Create a REPL with a fresh engine and a rustyline editor
    pub fn new() -> rustyline::Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(CalcHelper::new()));

        let history_file = dirs::home_dir().map(|home| home.join(".rpncalc_history"));
        if let Some(path) = &history_file {
            // First run has no history file yet
            let _ = editor.load_history(path);
        }

        Ok(Self {
            engine: Engine::new(),
            editor,
            history_file,
        })
    }

    /// Run the read-eval-print loop until quit or EOF
    pub fn run(&mut self) -> rustyline::Result<()> {
        print_banner();

        loop {
            let line = match self.editor.readline("> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(input);

            match input {
                "q" | "quit" | "exit" => {
                    println!("Goodbye!");
                    break;
                }
                "help" | "h" => {
                    print_help();
                    continue;
                }
                "history" => {
                    self.print_history();
                    continue;
                }
                _ => {}
            }

            match self
                .engine
                .evaluate_with(input, |notice| println!("{}", notice))
            {
                Ok(result) => println!("= {}", format_result(result)),
                Err(err) => eprintln!("Error: {}", err),
            }
        }

        if let Some(path) = &self.history_file {
            if let Err(err) = self.editor.save_history(path) {
                debug!(?path, %err, "failed to save input history");
            }
        }

        Ok(())
    }

    fn print_history(&self) {
        if self.engine.history_len() == 0 {
            println!("no history yet");
            return;
        }

        println!("\n=== calculation history ===");
        for (index, entry) in self.engine.show_history() {
            println!(
                "{}. {} = {}",
                index,
                entry.expression,
                format_result(entry.result)
            );
        }
    }
}

fn print_banner() {
    println!("==================================");
    println!("    RPN Calculator v{}", VERSION);
    println!("==================================");
    println!("Enter an expression (e.g. '5 5 +'), 'help' for help, 'q' to quit.");
}

fn print_help() {
    println!("\n=== RPN calculator help ===");
    println!("Basic operators: + - * / sqrt pow");
    println!("Trigonometry (radians): sin cos tan");
    println!("Special operators:");
    println!("  fib    - nth Fibonacci number (usage: n fib)");
    println!("  pascal - binomial coefficient C(n,k) (usage: n k pascal)");
    println!("Stack commands: clear display");
    println!("Other commands: history help q(quit)");
    println!("Examples: 5 5 + (result: 10)");
    println!("          3 4 pow (result: 81)");
    println!("          10 fib (result: 55)");
    println!("          5 2 pascal (result: 10)");
}
