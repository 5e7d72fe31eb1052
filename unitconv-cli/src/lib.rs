//! unitconv - interactive unit converter
//!
//! Reads lines such as "5 km to miles", prints "5.0 kilometers is
//! 3.106844378165098 miles", and stops on the line "exit".

pub mod logging;
mod repl;

pub use repl::{Outcome, Repl, Summary, DEFAULT_PROMPT, EXIT_COMMAND, PARSE_ERROR_MESSAGE};
