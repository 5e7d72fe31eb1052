//! A single conversion asked for by one input line

use crate::Unit;
use crate::unit::UNKNOWN_UNIT_NAME;

/// A value together with the units to convert it between
///
/// Unit tokens that did not resolve are kept as `None`; the conversion
/// engine reports them, not the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// The amount in the source unit
    pub value: f64,
    /// The source unit, if the token resolved
    pub from: Option<Unit>,
    /// The target unit, if the token resolved
    pub to: Option<Unit>,
}

impl ConversionRequest {
    pub fn new(value: f64, from: Option<Unit>, to: Option<Unit>) -> Self {
        ConversionRequest { value, from, to }
    }

    /// Both units resolved
    pub fn is_resolved(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Symbol of the source unit, or the unknown marker
    pub fn from_symbol(&self) -> &str {
        self.from.as_ref().map_or(UNKNOWN_UNIT_NAME, |u| u.symbol.as_str())
    }

    /// Symbol of the target unit, or the unknown marker
    pub fn to_symbol(&self) -> &str {
        self.to.as_ref().map_or(UNKNOWN_UNIT_NAME, |u| u.symbol.as_str())
    }
}
