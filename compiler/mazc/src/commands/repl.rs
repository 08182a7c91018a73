//! The `repl` command: read a line, parse it, print the result.
//!
//! One root environment lives for the whole session, so bindings and
//! functions defined on one line are visible on the next.

use std::io::{self, BufRead, Write};

use maz_eval::{evaluate, Environment};
use tracing::debug;

const PROMPT: &str = ">> ";

/// REPL configuration, parsed from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplOptions {
    /// Print the parsed tree instead of evaluating it.
    pub ast_only: bool,
}

impl ReplOptions {
    /// Parse `repl` flags. Returns the offending argument on failure.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = ReplOptions::default();
        for arg in args {
            match arg.as_str() {
                "--ast" => options.ast_only = true,
                other => return Err(other.to_string()),
            }
        }
        Ok(options)
    }
}

/// State carried from one REPL line to the next.
#[derive(Debug, Default)]
pub struct ReplSession {
    options: ReplOptions,
    env: Environment<'static>,
}

impl ReplSession {
    pub fn new(options: ReplOptions) -> Self {
        ReplSession {
            options,
            env: Environment::new(),
        }
    }

    /// Handle one line of input and return what should be printed.
    pub fn eval_line(&mut self, line: &str) -> String {
        let program = maz_parse::parse(line);
        if self.options.ast_only {
            return program.to_string();
        }
        let value = evaluate(&program, &mut self.env);
        debug!(kind = value.type_name(), "repl line evaluated");
        value.to_string()
    }

    /// Drive the session until `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "Welcome to the Maz REPL!")?;
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            let rendered = self.eval_line(&line);
            writeln!(output, "{rendered}")?;
        }
    }
}

/// Run an interactive session on stdin and stdout.
pub fn run_repl(options: ReplOptions) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = ReplSession::new(options).run(stdin.lock(), stdout.lock()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
