use crate::units::types::Unit;

/// Centimetres per international inch
pub const CM_PER_INCH: f64 = 2.54;

/// Centimetres per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Kilograms per avoirdupois pound
pub const KG_PER_POUND: f64 = 0.453_592_37;

/// Kilograms per stone (14 lb)
pub const KG_PER_STONE: f64 = 6.350_293_18;

/// Convert a value to the metric base unit of its dimension: centimetres for
/// lengths, kilograms for masses.
pub fn to_base(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Millimeter => value / 10.0,
        Unit::Centimeter => value,
        Unit::Meter => value * 100.0,
        Unit::Inch => value * CM_PER_INCH,
        Unit::Foot => value * CM_PER_FOOT,
        Unit::Gram => value / 1000.0,
        Unit::Kilogram => value,
        Unit::Pound => value * KG_PER_POUND,
        Unit::Stone => value * KG_PER_STONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_length_conversions() {
        assert!(close(to_base(1800.0, Unit::Millimeter), 180.0));
        assert!(close(to_base(1.8, Unit::Meter), 180.0));
        assert!(close(to_base(71.0, Unit::Inch), 180.34));
        assert!(close(to_base(6.0, Unit::Foot), 182.88));
        assert_eq!(to_base(180.0, Unit::Centimeter), 180.0);
    }

    #[test]
    fn test_mass_conversions() {
        assert!(close(to_base(75_000.0, Unit::Gram), 75.0));
        assert!(close(to_base(1.0, Unit::Pound), 0.45359237));
        assert!(close(to_base(1.0, Unit::Stone), 14.0 * KG_PER_POUND));
        assert_eq!(to_base(75.0, Unit::Kilogram), 75.0);
    }
}
