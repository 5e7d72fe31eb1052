//! unitconv units - Unit registry, input parsing and conversion
//!
//! Turns lines like "5 km to miles" into a converted value.
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in), pivot meter
//! - Weight (g, kg, mg, oz, lb), pivot gram
//! - Temperature (c, f, k), pivot Fahrenheit

mod category;
mod unit;
mod request;
mod convert;
mod parse;
mod units;
mod format;

pub use category::Category;
pub use unit::{Unit, ConversionError, UNKNOWN_UNIT_NAME};
pub use request::ConversionRequest;
pub use units::{UnitRegistry, UNITS, resolve};
pub use parse::{parse_request, tokenize, ParseError};
pub use convert::convert;
pub use format::{display_name, format_number, format_request, is_one};
