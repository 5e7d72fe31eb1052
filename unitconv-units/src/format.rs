//! Output formatting for successful conversions

use crate::{ConversionRequest, Unit};
use crate::unit::UNKNOWN_UNIT_NAME;

/// Whether a value reads as "one" once rounded to a single decimal
pub fn is_one(value: f64) -> bool {
    (value * 10.0).round() / 10.0 == 1.0
}

/// Singular name for values that round to one, plural otherwise
pub fn display_name(unit: &Unit, value: f64) -> &str {
    if is_one(value) {
        &unit.singular
    } else {
        &unit.plural
    }
}

/// Shortest representation that round-trips, always with a decimal part
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

/// "{value} {from} is {result} {to}", with "???" for unresolved units
pub fn format_request(request: &ConversionRequest, result: f64) -> String {
    let name = |unit: Option<&Unit>, value: f64| {
        unit.map_or(UNKNOWN_UNIT_NAME.to_string(), |u| display_name(u, value).to_string())
    };
    format!(
        "{} {} is {} {}",
        format_number(request.value),
        name(request.from.as_ref(), request.value),
        format_number(result),
        name(request.to.as_ref(), result),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve;

    #[test]
    fn test_is_one() {
        assert!(is_one(1.0));
        assert!(is_one(0.96));
        assert!(is_one(1.04));
        assert!(!is_one(1.05));
        assert!(!is_one(0.94));
        assert!(!is_one(-1.0));
        assert!(!is_one(0.0));
    }

    #[test]
    fn test_display_name() {
        let foot = resolve("ft").unwrap();
        assert_eq!(display_name(foot, 1.0), "foot");
        assert_eq!(display_name(foot, 2.0), "feet");
        assert_eq!(display_name(foot, 0.5), "feet");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(32.0), "32.0");
        assert_eq!(format_number(-5.5), "-5.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    fn request(value: f64, from: &str, to: &str) -> ConversionRequest {
        ConversionRequest::new(value, resolve(from).cloned(), resolve(to).cloned())
    }

    #[test]
    fn test_format_request() {
        assert_eq!(
            format_request(&request(0.0, "c", "f"), 32.0),
            "0.0 degrees Celsius is 32.0 degrees Fahrenheit"
        );
        assert_eq!(format_request(&request(1000.0, "m", "km"), 1.0), "1000.0 meters is 1.0 kilometer");

        let req = ConversionRequest::new(2.0, resolve("yd").cloned(), resolve("ft").cloned());
        assert_eq!(format_request(&req, 6.0), "2.0 yards is 6.0 feet");

        let req = ConversionRequest::new(1.0, None, resolve("lb").cloned());
        assert_eq!(format_request(&req, 1.0), "1.0 ??? is 1.0 pound");
    }
}
