//! Input line parsing - turn "5 km to miles" into a ConversionRequest

use std::sync::LazyLock;
use regex::Regex;
use thiserror::Error;
use crate::ConversionRequest;
use crate::units::resolve;

/// Separator runs: whitespace, "degree"/"degrees" anywhere, and the
/// connector words only when they stand alone.
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:degrees|degree|\bin\b|\bto\b|\bconvertto\b|\s)+")
        .expect("separator pattern is valid")
});

/// Number of tokens a well-formed line splits into
const EXPECTED_TOKENS: usize = 3;

/// Error type for malformed input lines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected 3 tokens (value, from unit, to unit), found {0}")]
    TokenCount(usize),

    #[error("empty token in input")]
    EmptyToken,

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// Split a line on whitespace and connector words
///
/// The line is not trimmed and empty pieces are kept, so a line that
/// opens or closes with a separator (" 5 m to km", "to 5 m km") gets an
/// extra empty token and is rejected.
pub fn tokenize(line: &str) -> Vec<&str> {
    SEPARATORS.split(line).collect()
}

/// Parse a line like "5 km to miles" or "0 degrees c in f"
///
/// Unknown unit tokens are not an error here: they come back as `None`
/// in the request.
pub fn parse_request(line: &str) -> Result<ConversionRequest, ParseError> {
    let tokens = tokenize(line);

    if tokens.len() != EXPECTED_TOKENS {
        return Err(ParseError::TokenCount(tokens.len()));
    }

    if tokens.iter().any(|t| t.is_empty()) {
        return Err(ParseError::EmptyToken);
    }

    let value = parse_value(tokens[0])?;
    let request = ConversionRequest::new(
        value,
        resolve(tokens[1]).cloned(),
        resolve(tokens[2]).cloned(),
    );

    tracing::debug!(
        value,
        from = tokens[1],
        to = tokens[2],
        resolved = request.is_resolved(),
        "parsed conversion request"
    );

    Ok(request)
}

/// Any float literal, including "NaN" and "inf"/"infinity"
fn parse_value(token: &str) -> Result<f64, ParseError> {
    token.parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}
