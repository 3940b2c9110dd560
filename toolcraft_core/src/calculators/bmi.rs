//! # BMI Calculator
//!
//! Body Mass Index from weight and height, with the site's four-bracket
//! classification.
//!
//! ## Classification brackets
//!
//! Half-open intervals over the rounded value:
//!
//! - `[0, 18.5)` - Underweight
//! - `[18.5, 24.9)` - Normal
//! - `[24.9, 29.9)` - Overweight
//! - `[29.9, inf)` - Obese
//!
//! The 24.9/29.9 cutoffs differ from the conventional medical 25.0/30.0.
//! They are the documented behavior of this product and are kept verbatim;
//! a value of exactly 24.9 classifies as Overweight.
//!
//! ## Example
//!
//! ```rust
//! use toolcraft_core::calculators::bmi::{calculate, BmiCategory, BmiInput};
//!
//! let input = BmiInput { weight_kg: 70.0, height_cm: 175.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.value, 22.9);
//! assert_eq!(result.category, BmiCategory::Normal);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::input;

/// Input parameters for a BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// { "weight_kg": 70.0, "height_cm": 175.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,
}

impl BmiInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        input::positive("weight_kg", self.weight_kg)?;
        input::positive("height_cm", self.height_cm)?;
        Ok(())
    }
}

/// BMI classification bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a (rounded) BMI value into its bracket.
    pub fn classify(value: f64) -> Self {
        if value < 18.5 {
            BmiCategory::Underweight
        } else if value < 24.9 {
            BmiCategory::Normal
        } else if value < 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Display label for shells
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Results from a BMI calculation.
///
/// ## JSON Example
///
/// ```json
/// { "value": 22.9, "category": "Normal" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,

    /// Bracket of the rounded value
    pub category: BmiCategory,
}

/// Calculate BMI and its classification.
///
/// BMI = weight / height_m^2, rounded to one decimal place. Classification
/// runs over the rounded value, so what the user sees is what gets bracketed.
///
/// # Returns
///
/// * `Ok(BmiResult)` - value and category
/// * `Err(NotComputable)` - weight or height missing, zero, or negative
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let height_m = input.height_cm / 100.0;
    let raw = input.weight_kg / (height_m * height_m);
    let value = (raw * 10.0).round() / 10.0;

    Ok(BmiResult {
        value,
        category: BmiCategory::classify(value),
    })
}
