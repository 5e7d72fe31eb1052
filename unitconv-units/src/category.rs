//! Measurement categories
//!
//! A unit belongs to exactly one category, and conversions are only
//! defined between units that share one.

use std::fmt;
use serde::{Serialize, Deserialize};

/// The kind of quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Distances, pivot unit is the meter
    Length,
    /// Masses, pivot unit is the gram
    Weight,
    /// Temperatures, pivot unit is the degree Fahrenheit
    Temperature,
}

impl Category {
    /// All categories in registration order
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Symbol of the pivot unit every conversion in this category goes through
    pub fn pivot_symbol(&self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Weight => "g",
            Category::Temperature => "f",
        }
    }

    /// Whether values below zero are physically meaningful
    pub fn allows_negative(&self) -> bool {
        matches!(self, Category::Temperature)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
