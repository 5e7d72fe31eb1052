//! Conversion engine
//!
//! Every category routes through one pivot unit (meters, grams,
//! Fahrenheit): source value to pivot, pivot to target. Adding a unit
//! only needs its own pivot relation.

use crate::ConversionRequest;
use crate::unit::ConversionError;

/// Convert the request's value from its source unit to its target unit
pub fn convert(request: &ConversionRequest) -> Result<f64, ConversionError> {
    let (from, to) = match (&request.from, &request.to) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => {
            return Err(ConversionError::category_mismatch(from.as_ref(), to.as_ref()));
        }
    };

    let result = from.convert_to(request.value, to)?;

    tracing::debug!(
        value = request.value,
        from = %from.symbol,
        to = %to.symbol,
        result,
        "converted"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_request, resolve, Category, UNITS};
    use approx::assert_relative_eq;

    fn request(value: f64, from: &str, to: &str) -> ConversionRequest {
        ConversionRequest::new(value, resolve(from).cloned(), resolve(to).cloned())
    }

    #[test]
    fn test_convert_length() {
        assert_relative_eq!(convert(&request(5.0, "km", "mi")).unwrap(), 5000.0 / 1609.35);
        assert_relative_eq!(convert(&request(1.0, "m", "ft")).unwrap(), 1.0 / 0.3048);
        assert_relative_eq!(convert(&request(12.0, "in", "ft")).unwrap(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(convert(&request(1.0, "yd", "cm")).unwrap(), 91.44, max_relative = 1e-12);
    }

    #[test]
    fn test_convert_weight() {
        assert_relative_eq!(convert(&request(1.0, "kg", "g")).unwrap(), 1000.0);
        assert_relative_eq!(convert(&request(1.0, "lb", "oz")).unwrap(), 453.592 / 28.3495);
        assert_relative_eq!(convert(&request(500.0, "mg", "g")).unwrap(), 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_convert_temperature() {
        assert_eq!(convert(&request(0.0, "c", "f")).unwrap(), 32.0);
        assert_eq!(convert(&request(100.0, "c", "f")).unwrap(), 212.0);
        assert_eq!(convert(&request(212.0, "f", "c")).unwrap(), 100.0);
        assert_relative_eq!(convert(&request(0.0, "k", "c")).unwrap(), -273.15, max_relative = 1e-9);
        assert_relative_eq!(convert(&request(0.0, "c", "k")).unwrap(), 273.15, max_relative = 1e-9);
        assert_relative_eq!(convert(&request(32.0, "f", "k")).unwrap(), 273.15, max_relative = 1e-9);
    }

    #[test]
    fn test_negative_temperature_allowed() {
        assert_relative_eq!(convert(&request(-40.0, "c", "f")).unwrap(), -40.0);
        // No absolute-zero floor
        assert!(convert(&request(-10.0, "k", "c")).is_ok());
    }

    #[test]
    fn test_negative_length_and_weight_rejected() {
        assert_eq!(
            convert(&request(-5.0, "m", "km")),
            Err(ConversionError::NegativeValue { category: Category::Length })
        );
        let err = convert(&request(-5.0, "kg", "lb")).unwrap_err();
        assert_eq!(err.to_string(), "Weight shouldn't be negative");
    }

    #[test]
    fn test_cross_category_always_fails() {
        for value in [-1.0, 0.0, 5.0] {
            let err = convert(&request(value, "m", "kg")).unwrap_err();
            assert_eq!(err.to_string(), "Conversion from meters to kilograms is impossible");
        }
        let err = convert(&request(1.0, "m", "c")).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from meters to degrees Celsius is impossible");
    }

    #[test]
    fn test_unresolved_unit_fails() {
        let err = convert(&request(1.0, "parsec", "m")).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from ??? to meters is impossible");

        let err = convert(&request(1.0, "m", "parsec")).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from meters to ??? is impossible");

        let err = convert(&parse_request("1 x to y").unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from ??? to ??? is impossible");
    }

    #[test]
    fn test_identity_for_every_unit() {
        for category in Category::ALL {
            for unit in UNITS.by_category(category) {
                let req = ConversionRequest::new(42.5, Some(unit.clone()), Some(unit.clone()));
                assert_relative_eq!(convert(&req).unwrap(), 42.5, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        for category in Category::ALL {
            let units = UNITS.by_category(category);
            for a in &units {
                for b in &units {
                    let there = a.convert_to(123.456, b).unwrap();
                    let back = b.convert_to(there, a).unwrap();
                    assert_relative_eq!(back, 123.456, max_relative = 1e-6);
                }
            }
        }
    }
}
