use thiserror::Error;

use crate::units::types::Dimension;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("No value entered")]
    Empty,
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Unit '{unit}' is not a {expected} unit")]
    WrongDimension { unit: String, expected: Dimension },
    #[error("Unknown unit system: {0}")]
    UnknownSystem(String),
}
