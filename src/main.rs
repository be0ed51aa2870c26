/// RPN Calculator CLI
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use rpncalc::engine::Engine;
use rpncalc::repl::{format_result, Repl};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    eprintln!("rpncalc v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    rpncalc [OPTIONS] [INPUT]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help         Print this help message");
    eprintln!("    -V, --version      Print version information");
    eprintln!("    -e, --eval <EXPR>  Evaluate one RPN expression and exit");
    eprintln!();
    eprintln!("ARGUMENTS:");
    eprintln!("    <INPUT>            Input file with one expression per line (use '-' for stdin)");
    eprintln!();
    eprintln!("With no arguments, starts the interactive REPL.");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    rpncalc");
    eprintln!("    rpncalc -e '5 5 +'");
    eprintln!("    rpncalc session.rpn");
    eprintln!("    echo '10 fib' | rpncalc -");
}

fn print_version() {
    println!("rpncalc {}", VERSION);
}

struct Options {
    input: Option<String>,
    eval: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = std::env::args().collect();

    let mut input = None;
    let mut eval = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-V" | "--version" => {
                print_version();
                process::exit(0);
            }
            "-e" | "--eval" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing expression after -e".to_string());
                }
                eval = Some(args[i].clone());
            }
            arg if arg.starts_with('-') && arg != "-" => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                if input.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                input = Some(arg.to_string());
            }
        }
        i += 1;
    }

    Ok(Options { input, eval })
}

fn read_input(input: &str) -> Result<String, String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else {
        let path = Path::new(input);
        if !path.exists() {
            return Err(format!("Input file not found: {}", input));
        }
        fs::read_to_string(path).map_err(|e| format!("Failed to read file '{}': {}", input, e))
    }
}

/// Evaluate each non-empty line, printing results to stdout and errors to
/// stderr. Returns false if any line failed.
fn run_batch(source: &str) -> bool {
    let mut engine = Engine::new();
    let mut ok = true;

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match engine.evaluate_with(line, |notice| println!("{}", notice)) {
            Ok(result) => println!("{}", format_result(result)),
            Err(err) => {
                eprintln!("Error: {}: {}", line, err);
                ok = false;
            }
        }
    }

    ok
}

fn run_repl() {
    let mut repl = match Repl::new() {
        Ok(repl) => repl,
        Err(err) => {
            eprintln!("Error: failed to start REPL: {}", err);
            process::exit(1);
        }
    };
    if let Err(err) = repl.run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let options = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    // One-shot evaluation
    if let Some(expr) = options.eval {
        let mut engine = Engine::new();
        match engine.evaluate_with(&expr, |notice| println!("{}", notice)) {
            Ok(result) => println!("{}", format_result(result)),
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
        return;
    }

    // Batch mode
    if let Some(input) = options.input {
        let source = match read_input(&input) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        if !run_batch(&source) {
            process::exit(1);
        }
        return;
    }

    // Interactive REPL
    run_repl();
}
