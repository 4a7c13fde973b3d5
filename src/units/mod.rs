// Unit systems and parsing of free-form height/weight field text.
// Everything is normalised to centimetres and kilograms before it reaches the calculator.

pub mod convert;
pub mod detector;
pub mod error;
pub mod types;

pub use convert::{to_base, CM_PER_FOOT, CM_PER_INCH, KG_PER_POUND, KG_PER_STONE};
pub use detector::{parse_field, parse_quantity};
pub use error::UnitError;
pub use types::{Dimension, Quantity, Unit, UnitSystem};
