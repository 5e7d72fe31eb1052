//! Unit definitions for length, weight and temperature

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Resolve a user token against the global registry
pub fn resolve(token: &str) -> Option<&'static Unit> {
    UNITS.get(token)
}

/// Registry of all known units
///
/// Units are stored in registration order. Every key in `aliases` is
/// lowercase and maps to an index into `units`.
pub struct UnitRegistry {
    units: Vec<Unit>,
    aliases: HashMap<String, usize>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: Vec::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol or alias, ignoring case
    pub fn get(&self, token: &str) -> Option<&Unit> {
        let key = token.trim().to_lowercase();
        self.aliases.get(&key).map(|&idx| &self.units[idx])
    }

    /// Get all units in a category
    pub fn by_category(&self, category: Category) -> Vec<&Unit> {
        self.units.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// Get all unit symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.symbol.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Add a unit; its symbol and both display names become aliases
    fn register(&mut self, unit: Unit) {
        let idx = self.units.len();
        for name in [&unit.symbol, &unit.singular, &unit.plural] {
            self.aliases.insert(name.to_lowercase(), idx);
        }
        self.units.push(unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        if let Some(idx) = self.units.iter().position(|u| u.symbol == symbol) {
            self.aliases.insert(alias.to_lowercase(), idx);
        }
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
    }

    fn register_length_units(&mut self) {
        let len = Category::Length;
        self.register(Unit::new("m", "meter", "meters", len, 1.0));
        self.register(Unit::new("km", "kilometer", "kilometers", len, 1000.0));
        self.register(Unit::new("cm", "centimeter", "centimeters", len, 0.01));
        self.register(Unit::new("mm", "millimeter", "millimeters", len, 0.001));
        self.register(Unit::new("mi", "mile", "miles", len, 1609.35));
        self.register(Unit::new("yd", "yard", "yards", len, 0.9144));
        self.register(Unit::new("ft", "foot", "feet", len, 0.3048));
        self.register(Unit::new("in", "inch", "inches", len, 0.0254));
    }

    fn register_weight_units(&mut self) {
        let wt = Category::Weight;
        self.register(Unit::new("g", "gram", "grams", wt, 1.0));
        self.register(Unit::new("kg", "kilogram", "kilograms", wt, 1000.0));
        self.register(Unit::new("mg", "milligram", "milligrams", wt, 0.001));
        self.register(Unit::new("oz", "ounce", "ounces", wt, 28.3495));
        self.register(Unit::new("lb", "pound", "pounds", wt, 453.592));
    }

    fn register_temperature_units(&mut self) {
        let temp = Category::Temperature;
        // F = C * 9 / 5 + 32, F = K * 9 / 5 - 459.67
        self.register(Unit::affine("c", "degree Celsius", "degrees Celsius", temp, 9.0, 5.0, 32.0));
        self.register(Unit::affine("f", "degree Fahrenheit", "degrees Fahrenheit", temp, 1.0, 1.0, 0.0));
        self.register(Unit::affine("k", "kelvin", "kelvins", temp, 9.0, 5.0, -459.67));

        // Display names carry the "degree" prefix, so the bare words are
        // registered separately.
        self.alias("dc", "c");
        self.alias("celsius", "c");
        self.alias("df", "f");
        self.alias("fahrenheit", "f");
        self.alias("fahrenheits", "f");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
