// Input session owned by the presentation layer.
// Field text is kept as typed; every read recomputes the view from scratch.

use serde::Serialize;

use crate::calculator::{self, Category, IdealWeightRange, Measurement};
use crate::message;
use crate::units::{self, Dimension, UnitError, UnitSystem};

/// Everything a result panel needs to render one BMI result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub bmi: f64,
    pub category: Category,
    pub label: &'static str,
    pub ideal_weight_range: Option<IdealWeightRange>,
    pub weight_unit: &'static str,
    pub message: String,
}

impl Report {
    /// Build the report for a metric measurement, with the ideal weight
    /// range expressed in `system`. `None` when no BMI can be computed.
    pub fn for_measurement(measurement: &Measurement, system: UnitSystem) -> Option<Self> {
        let result = calculator::assess(measurement)?;
        let range = calculator::ideal_weight_range_in(measurement.height_cm, system);
        let weight_unit = system.weight_label();
        Some(Self {
            bmi: result.bmi,
            category: result.category,
            label: result.category.label(),
            ideal_weight_range: range,
            weight_unit,
            message: message::render(result.category, range.as_ref(), weight_unit),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormView {
    /// No BMI yet; shows the placeholder panel
    Empty {
        title: &'static str,
        prompt: &'static str,
        ideal_weight_range: Option<IdealWeightRange>,
        weight_unit: &'static str,
    },
    Ready(Report),
}

impl FormView {
    pub fn report(&self) -> Option<&Report> {
        match self {
            FormView::Ready(report) => Some(report),
            FormView::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    unit_system: UnitSystem,
    height_text: String,
    weight_text: String,
}

impl BmiForm {
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            ..Self::default()
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
    }

    pub fn set_height(&mut self, text: &str) {
        self.height_text = text.to_string();
    }

    pub fn set_weight(&mut self, text: &str) {
        self.weight_text = text.to_string();
    }

    /// Height in centimetres, if the field holds a readable value
    pub fn height_cm(&self) -> Option<f64> {
        read_field(&self.height_text, Dimension::Length, self.unit_system)
    }

    /// Weight in kilograms, if the field holds a readable value
    pub fn weight_kg(&self) -> Option<f64> {
        read_field(&self.weight_text, Dimension::Mass, self.unit_system)
    }

    pub fn measurement(&self) -> Option<Measurement> {
        Some(Measurement::new(self.height_cm()?, self.weight_kg()?))
    }

    pub fn view(&self) -> FormView {
        let system = self.unit_system;
        if let Some(report) = self
            .measurement()
            .and_then(|m| Report::for_measurement(&m, system))
        {
            return FormView::Ready(report);
        }

        FormView::Empty {
            title: message::PLACEHOLDER_TITLE,
            prompt: message::PLACEHOLDER_PROMPT,
            ideal_weight_range: self
                .height_cm()
                .and_then(|h| calculator::ideal_weight_range_in(h, system)),
            weight_unit: system.weight_label(),
        }
    }
}

fn read_field(text: &str, dimension: Dimension, system: UnitSystem) -> Option<f64> {
    match units::parse_field(text, dimension, system) {
        Ok(value) => Some(value),
        Err(UnitError::Empty) => None,
        Err(e) => {
            log::debug!("ignoring {} field '{}': {}", dimension, text, e);
            None
        }
    }
}
