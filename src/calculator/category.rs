use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI classification, ordered from lowest to highest band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Underweight,
    Healthy,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

/// Lower bound (inclusive) of every band, in ascending order
const BANDS: [(f64, Category); 6] = [
    (f64::NEG_INFINITY, Category::Underweight),
    (18.5, Category::Healthy),
    (25.0, Category::Overweight),
    (30.0, Category::ObeseClass1),
    (35.0, Category::ObeseClass2),
    (40.0, Category::ObeseClass3),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Underweight,
        Category::Healthy,
        Category::Overweight,
        Category::ObeseClass1,
        Category::ObeseClass2,
        Category::ObeseClass3,
    ];

    /// Classify a BMI value. Each boundary belongs to the higher band.
    /// NaN matches no bound and lands in `Underweight`; front ends reject it first.
    pub fn from_bmi(bmi: f64) -> Self {
        BANDS
            .iter()
            .rev()
            .find(|(lower, _)| bmi >= *lower)
            .map(|(_, category)| *category)
            .unwrap_or(Category::Underweight)
    }

    /// Half-open interval `[lower, upper)` covered by this band.
    /// `None` marks an unbounded side.
    pub fn bounds(self) -> (Option<f64>, Option<f64>) {
        let index = self as usize;
        let lower = BANDS[index].0;
        let lower = if lower.is_finite() { Some(lower) } else { None };
        let upper = BANDS.get(index + 1).map(|(bound, _)| *bound);
        (lower, upper)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Healthy => "Healthy weight",
            Category::Overweight => "Overweight",
            Category::ObeseClass1 => "Obesity Class 1",
            Category::ObeseClass2 => "Obesity Class 2",
            Category::ObeseClass3 => "Obesity Class 3 (morbid)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
