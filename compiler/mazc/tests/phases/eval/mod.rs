//! Evaluation phase tests.

mod programs;
mod repl;
