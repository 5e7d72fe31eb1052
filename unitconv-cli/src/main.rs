//! unitconv
//!
//! Interactive unit converter. Reads "5 km to miles" style lines from
//! stdin until the line "exit".

use std::io;

use unitconv_cli::{logging, Repl};

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new();

    match repl.run(stdin.lock(), stdout.lock()) {
        Ok(summary) => {
            let summary = serde_json::to_string(&summary).unwrap_or_default();
            tracing::info!(%summary, "session finished");
        }
        Err(e) => {
            tracing::warn!(error = %e, "stopped on I/O error");
            eprintln!("I/O error: {}", e);
        }
    }
}
