// Pure BMI and ideal-weight computation.
// All inputs are metric (centimetres, kilograms); see `units` for conversion.

pub mod category;


pub use category::Category;

use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Healthy-weight BMI band used to derive the ideal weight range
pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;

const BMI_DECIMALS: u32 = 2;
const WEIGHT_DECIMALS: u32 = 1;

/// Height and weight of one input session, in centimetres and kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    pub fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
}

/// Weight band whose BMI falls in the healthy range for a given height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    pub min: f64,
    pub max: f64,
}

/// Round the exact binary value of `value` to a fixed number of decimal
/// places, with exact midpoints going away from zero.
///
/// Scaling first (`(value * 100.0).round()`) is not equivalent: the product
/// can land on .5 when the stored value sits just below the midpoint.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if is_midpoint(value, decimals) {
        // value * 10^d is a half-integer here and the product is exact
        let factor = 10f64.powi(decimals as i32);
        return (value * factor).round() / factor;
    }
    // Fixed-precision formatting rounds the exact value
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}

/// True when `value` lies exactly halfway between two multiples of 10^-d.
/// That holds iff value * 2^(d+1) is an odd integer.
fn is_midpoint(value: f64, decimals: u32) -> bool {
    let scaled = value * 2f64.powi(decimals as i32 + 1);
    scaled.fract() == 0.0 && scaled % 2.0 != 0.0
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// BMI rounded to two decimals, or `None` unless both inputs are positive
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if !is_positive(height_cm) || !is_positive(weight_kg) {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some(round_to(bmi, BMI_DECIMALS))
}

/// Unrounded healthy weight bounds in kilograms
fn ideal_weight_bounds_kg(height_cm: f64) -> Option<(f64, f64)> {
    if !is_positive(height_cm) {
        return None;
    }
    let height_m = height_cm / 100.0;
    let square = height_m * height_m;
    Some((HEALTHY_BMI_MIN * square, HEALTHY_BMI_MAX * square))
}

/// Ideal weight range in kilograms, rounded to one decimal
pub fn compute_ideal_weight_range(height_cm: f64) -> Option<IdealWeightRange> {
    ideal_weight_range_in(height_cm, UnitSystem::Metric)
}

/// Ideal weight range expressed in the weight unit of `system`.
/// Conversion happens before rounding.
pub fn ideal_weight_range_in(height_cm: f64, system: UnitSystem) -> Option<IdealWeightRange> {
    ideal_weight_bounds_kg(height_cm).map(|(min, max)| IdealWeightRange {
        min: round_to(system.weight_from_kg(min), WEIGHT_DECIMALS),
        max: round_to(system.weight_from_kg(max), WEIGHT_DECIMALS),
    })
}

pub fn categorize(bmi: f64) -> Category {
    Category::from_bmi(bmi)
}

/// Rounded BMI and its category. The category is taken from the rounded
/// value so the displayed number and the band always agree.
pub fn assess(measurement: &Measurement) -> Option<BmiResult> {
    let bmi = compute_bmi(measurement.height_cm, measurement.weight_kg)?;
    let category = categorize(bmi);
    log::debug!(
        "bmi {} ({}) for {} cm / {} kg",
        bmi,
        category,
        measurement.height_cm,
        measurement.weight_kg
    );
    Some(BmiResult { bmi, category })
}
