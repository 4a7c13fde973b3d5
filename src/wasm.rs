// WebAssembly bindings for the browser form
use crate::calculator;
use crate::form::BmiForm;
use crate::units::UnitSystem;
use wasm_bindgen::prelude::*;

fn js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

fn parse_system(name: &str) -> Result<UnitSystem, JsValue> {
    name.parse::<UnitSystem>()
        .map_err(|e| js_error(e.to_string()))
}

/// Form state held on the JavaScript side; every setter is followed by a
/// call to `view()` to refresh the result panel.
#[wasm_bindgen]
pub struct BmiWasm {
    form: BmiForm,
}

impl Default for BmiWasm {
    fn default() -> Self {
        Self {
            form: BmiForm::new(UnitSystem::Metric),
        }
    }
}

#[wasm_bindgen]
impl BmiWasm {
    /// unit_system: "metric" (default) or "imperial"
    #[wasm_bindgen(constructor)]
    pub fn new(unit_system: Option<String>) -> Result<BmiWasm, JsValue> {
        let system = match unit_system {
            Some(name) => parse_system(&name)?,
            None => UnitSystem::Metric,
        };
        Ok(Self {
            form: BmiForm::new(system),
        })
    }

    #[wasm_bindgen]
    pub fn set_unit_system(&mut self, unit_system: &str) -> Result<(), JsValue> {
        self.form.set_unit_system(parse_system(unit_system)?);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_height(&mut self, text: &str) {
        self.form.set_height(text);
    }

    #[wasm_bindgen]
    pub fn set_weight(&mut self, text: &str) {
        self.form.set_weight(text);
    }

    /// Current view as JSON: {"state": "empty", ...} or {"state": "ready", "bmi": ..., ...}
    #[wasm_bindgen]
    pub fn view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.form.view())
            .map_err(|e| js_error(format!("Failed to serialize view: {}", e)))
    }

    /// BMI from centimetres and kilograms, or undefined when not computable
    #[wasm_bindgen]
    pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
        calculator::compute_bmi(height_cm, weight_kg)
    }

    /// Ideal weight range in kilograms as JSON {"min": .., "max": ..}, or "null"
    #[wasm_bindgen]
    pub fn ideal_weight_range(height_cm: f64) -> Result<String, JsValue> {
        serde_json::to_string(&calculator::compute_ideal_weight_range(height_cm))
            .map_err(|e| js_error(format!("Failed to serialize range: {}", e)))
    }

    /// Category key, e.g. "healthy" or "obese_class2"
    #[wasm_bindgen]
    pub fn categorize(bmi: f64) -> Result<String, JsValue> {
        if !bmi.is_finite() {
            return Err(js_error(format!("BMI must be a finite number, got {}", bmi)));
        }
        let category = calculator::categorize(bmi);
        serde_json::to_value(category)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .ok_or_else(|| js_error(format!("Failed to serialize category {:?}", category)))
    }
}
