//! Unit representation with pivot conversion factors

use thiserror::Error;
use crate::Category;

/// Display name used in messages when a token did not resolve to a unit
pub const UNKNOWN_UNIT_NAME: &str = "???";

/// A unit of measurement and how to reach its category's pivot unit
///
/// The pivot relation is affine:
/// `pivot = value * pivot_scale / pivot_divisor + pivot_offset`.
/// Keeping scale and divisor apart lets temperature relations be written
/// as `C * 9 / 5 + 32` instead of going through a rounded `1.8`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// The short symbol (e.g., "km", "lb", "c")
    pub symbol: String,
    /// Name used when the value is one (e.g., "foot")
    pub singular: String,
    /// Name used for every other value (e.g., "feet")
    pub plural: String,
    /// The measurement category
    pub category: Category,
    /// Multiplier applied on the way to the pivot unit
    pub pivot_scale: f64,
    /// Divisor applied on the way to the pivot unit
    pub pivot_divisor: f64,
    /// Offset added after scaling (temperature only)
    pub pivot_offset: f64,
}

impl Unit {
    /// Create a unit with proportional conversion (no offset)
    pub fn new(symbol: &str, singular: &str, plural: &str, category: Category, pivot_scale: f64) -> Self {
        Self::affine(symbol, singular, plural, category, pivot_scale, 1.0, 0.0)
    }

    /// Create a unit with a full affine relation to the pivot
    pub fn affine(
        symbol: &str,
        singular: &str,
        plural: &str,
        category: Category,
        pivot_scale: f64,
        pivot_divisor: f64,
        pivot_offset: f64,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            singular: singular.to_string(),
            plural: plural.to_string(),
            category,
            pivot_scale,
            pivot_divisor,
            pivot_offset,
        }
    }

    /// Check if this is its category's pivot unit
    pub fn is_pivot(&self) -> bool {
        self.symbol == self.category.pivot_symbol()
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        self.pivot_offset != 0.0
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value from this unit to the pivot unit
    pub fn to_pivot(&self, value: f64) -> f64 {
        value * self.pivot_scale / self.pivot_divisor + self.pivot_offset
    }

    /// Convert a value from the pivot unit to this unit
    pub fn from_pivot(&self, pivot: f64) -> f64 {
        (pivot - self.pivot_offset) * self.pivot_divisor / self.pivot_scale
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::category_mismatch(Some(self), Some(target)));
        }

        if value < 0.0 && !self.category.allows_negative() {
            return Err(ConversionError::NegativeValue { category: self.category });
        }

        Ok(target.from_pivot(self.to_pivot(value)))
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Units belong to different categories, or one did not resolve
    #[error("Conversion from {from} to {to} is impossible")]
    CategoryMismatch { from: String, to: String },

    /// Negative amount in a category that has no negative values
    #[error("{category} shouldn't be negative")]
    NegativeValue { category: Category },
}

impl ConversionError {
    /// Build a mismatch error from the plural names of both sides
    pub fn category_mismatch(from: Option<&Unit>, to: Option<&Unit>) -> Self {
        let name = |unit: Option<&Unit>| {
            unit.map(|u| u.plural.clone())
                .unwrap_or_else(|| UNKNOWN_UNIT_NAME.to_string())
        };
        ConversionError::CategoryMismatch { from: name(from), to: name(to) }
    }
}
