//! Prompt/read/convert/print loop.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use unitconv_units::{convert, format_request, parse_request, ConversionError, ParseError};

/// Prompt printed before each line is read
pub const DEFAULT_PROMPT: &str = "Enter what you want to convert (or exit): ";

/// The exact line that ends a session
pub const EXIT_COMMAND: &str = "exit";

/// Printed for every malformed line, whatever the cause
pub const PARSE_ERROR_MESSAGE: &str = "Parse error";

/// What processing one line produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Exit,
    Converted(String),
    ParseFailed(ParseError),
    ConversionFailed(ConversionError),
}

impl Outcome {
    /// The line to show the user, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Exit => None,
            Outcome::Converted(text) => Some(text.clone()),
            Outcome::ParseFailed(_) => Some(PARSE_ERROR_MESSAGE.to_string()),
            Outcome::ConversionFailed(e) => Some(e.to_string()),
        }
    }
}

/// Counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub lines: usize,
    pub conversions: usize,
    pub parse_errors: usize,
    pub conversion_errors: usize,
}

/// REPL state.
pub struct Repl {
    prompt: String,
    summary: Summary,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            summary: Summary::default(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Process one line without touching any stream.
    pub fn execute(&mut self, line: &str) -> Outcome {
        if line == EXIT_COMMAND {
            return Outcome::Exit;
        }

        self.summary.lines += 1;

        let request = match parse_request(line) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(line, error = %e, "parse failed");
                self.summary.parse_errors += 1;
                return Outcome::ParseFailed(e);
            }
        };

        match convert(&request) {
            Ok(result) => {
                self.summary.conversions += 1;
                Outcome::Converted(format_request(&request, result))
            }
            Err(e) => {
                tracing::debug!(
                    from = request.from_symbol(),
                    to = request.to_symbol(),
                    error = %e,
                    "conversion failed"
                );
                self.summary.conversion_errors += 1;
                Outcome::ConversionFailed(e)
            }
        }
    }

    /// Run until the exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<Summary> {
        tracing::info!("session started");

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            // Raw bytes, so a line that is not UTF-8 becomes a parse error
            // instead of ending the session
            let mut bytes = Vec::new();
            if input.read_until(b'\n', &mut bytes)? == 0 {
                // Close the dangling prompt line
                writeln!(output)?;
                tracing::debug!("end of input");
                break;
            }

            let decoded = String::from_utf8_lossy(&bytes);
            let buf: &str = &decoded;
            let line = buf.strip_suffix('\n').unwrap_or(buf);
            let line = line.strip_suffix('\r').unwrap_or(line);

            let outcome = self.execute(line);
            match outcome.message() {
                Some(message) => writeln!(output, "{}", message)?,
                None => break,
            }
        }

        output.flush()?;
        Ok(self.summary)
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
