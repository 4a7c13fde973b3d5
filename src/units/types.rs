use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::units::convert::KG_PER_POUND;
use crate::units::error::UnitError;

/// Physical quantity a form field measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Mass,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Length => write!(f, "length"),
            Dimension::Mass => write!(f, "mass"),
        }
    }
}

/// Measurement system selected on the form.
///
/// Bare numbers are read as centimetres and kilograms under `Metric`, and as
/// inches and pounds under `Imperial`. Both are converted to the metric base
/// before any calculation runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Unit a bare number in the field of the given dimension is read in
    pub fn default_unit(self, dimension: Dimension) -> Unit {
        match (self, dimension) {
            (UnitSystem::Metric, Dimension::Length) => Unit::Centimeter,
            (UnitSystem::Metric, Dimension::Mass) => Unit::Kilogram,
            (UnitSystem::Imperial, Dimension::Length) => Unit::Inch,
            (UnitSystem::Imperial, Dimension::Mass) => Unit::Pound,
        }
    }

    /// Weight label used in result messages ("kgs" / "lbs")
    pub fn weight_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kgs",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Express a weight in kilograms in this system's weight unit
    pub fn weight_from_kg(self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => kg / KG_PER_POUND,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            other => Err(UnitError::UnknownSystem(other.to_string())),
        }
    }
}

/// Units accepted as explicit suffixes in field text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
    Gram,
    Kilogram,
    Pound,
    Stone,
}

impl Unit {
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Millimeter | Unit::Centimeter | Unit::Meter | Unit::Inch | Unit::Foot => {
                Dimension::Length
            }
            Unit::Gram | Unit::Kilogram | Unit::Pound | Unit::Stone => Dimension::Mass,
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" => Ok(Unit::Millimeter),
            "cm" => Ok(Unit::Centimeter),
            "m" => Ok(Unit::Meter),
            "in" | "inch" | "inches" | "\"" => Ok(Unit::Inch),
            "ft" | "foot" | "feet" | "'" => Ok(Unit::Foot),
            "g" => Ok(Unit::Gram),
            "kg" | "kgs" => Ok(Unit::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Unit::Pound),
            "st" | "stone" => Ok(Unit::Stone),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

/// A number read from a field together with the unit it was given in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Value in the metric base unit of its dimension (cm or kg)
    pub fn to_base(self) -> f64 {
        crate::units::convert::to_base(self.value, self.unit)
    }
}
