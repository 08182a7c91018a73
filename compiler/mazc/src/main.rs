//! Maz interpreter CLI.

use mazc::commands::{lex_file, parse_file, run_file, run_repl, ReplOptions};

fn main() {
    mazc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        run_repl(ReplOptions::default());
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: mazc run <file>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "repl" => match ReplOptions::parse(&args[2..]) {
            Ok(options) => run_repl(options),
            Err(arg) => {
                eprintln!("error: unknown repl option '{arg}'");
                eprintln!("Usage: mazc repl [--ast]");
                std::process::exit(1);
            }
        },
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: mazc parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: mazc lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Maz {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // Anything that is not a command is taken as a file to run
            if command.starts_with('-') {
                eprintln!("Unknown option: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
            run_file(command);
        }
    }
}

fn print_usage() {
    println!("Maz interpreter");
    println!();
    println!("Usage: mazc [command] [options]");
    println!();
    println!("Commands:");
    println!("  <file>           Run a Maz program (same as `run <file>`)");
    println!("  run <file>       Evaluate a file and print the final value");
    println!("  repl [--ast]     Start the REPL (default with no arguments)");
    println!("  parse <file>     Parse a file and print the syntax tree");
    println!("  lex <file>       Tokenize a file and print the tokens");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("REPL options:");
    println!("  --ast            Print the parsed tree of each line instead of its value");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=<filter>  Enable tracing output (e.g. RUST_LOG=maz_eval=debug)");
    println!("  MAZ_LOG_TREE=1     Render spans as an indented tree");
}
