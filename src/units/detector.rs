use lazy_static::lazy_static;
use regex::Regex;

use crate::units::error::UnitError;
use crate::units::types::{Dimension, Quantity, Unit, UnitSystem};

lazy_static! {
    /// A number with an optional unit suffix.
    /// Examples: "180", "180 cm", "1.8m", "165 lbs", "1e2 cm", "-5"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r#"^(?P<value>[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(?P<unit>[a-zA-Z'"]+)?$"#
    ).unwrap();

    /// Compound feet and inches: "5 ft 11 in", "5ft11", "5' 11\""
    static ref FEET_INCHES_PATTERN: Regex = Regex::new(
        r#"^(?P<feet>\d+(?:\.\d+)?)\s*(?:ft|feet|foot|')\s*(?P<inches>\d+(?:\.\d+)?)\s*(?:in|inch|inches|")?$"#
    ).unwrap();
}

/// Read field text as a quantity of the given dimension.
///
/// A bare number takes the unit system's default unit for the dimension; an
/// explicit suffix wins over the system.
pub fn parse_quantity(
    text: &str,
    dimension: Dimension,
    system: UnitSystem,
) -> Result<Quantity, UnitError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UnitError::Empty);
    }

    if dimension == Dimension::Length {
        if let Some(caps) = FEET_INCHES_PATTERN.captures(trimmed) {
            let feet = parse_number(&caps["feet"])?;
            let inches = parse_number(&caps["inches"])?;
            return Ok(Quantity::new(feet * 12.0 + inches, Unit::Inch));
        }
    }

    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| UnitError::InvalidNumber(trimmed.to_string()))?;

    let value = parse_number(&caps["value"])?;
    let unit = match caps.name("unit") {
        Some(symbol) => {
            let unit: Unit = symbol.as_str().parse()?;
            if unit.dimension() != dimension {
                return Err(UnitError::WrongDimension {
                    unit: symbol.as_str().to_string(),
                    expected: dimension,
                });
            }
            unit
        }
        None => system.default_unit(dimension),
    };

    Ok(Quantity::new(value, unit))
}

/// Read field text straight into the metric base unit (cm or kg)
pub fn parse_field(text: &str, dimension: Dimension, system: UnitSystem) -> Result<f64, UnitError> {
    parse_quantity(text, dimension, system).map(Quantity::to_base)
}

fn parse_number(s: &str) -> Result<f64, UnitError> {
    s.parse::<f64>()
        .map_err(|_| UnitError::InvalidNumber(s.to_string()))
}
