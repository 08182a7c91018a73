//! Command handlers for the Maz CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` live here in the module root.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file, render_ast, render_tokens};
pub use repl::{run_repl, ReplOptions, ReplSession};
pub use run::{run_file, run_source};

/// Read a source file, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
