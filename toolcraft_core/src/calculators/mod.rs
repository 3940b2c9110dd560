//! # Calculators
//!
//! This module contains all calculator types. Each calculator follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Computed results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, NotComputable>` - Pure function
//!
//! All functions are stateless and synchronous. Nothing here performs I/O,
//! so any shell (CLI, HTTP endpoint, GUI) can call them directly; requests
//! are independent and trivially parallelizable.
//!
//! ## Available Calculators
//!
//! - [`bmi`] - Body Mass Index with bracket classification
//! - [`emi`] - Loan amortization (equated monthly installment)
//! - [`age`] - Calendar-accurate age difference
//! - [`gst`] - Goods and Services Tax at slab rates
//! - [`password`] - Random password from selected character classes
//! - [`qr`] - QR image-service link construction

pub mod age;
pub mod bmi;
pub mod emi;
pub mod gst;
pub mod password;
pub mod qr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use age::{AgeInput, AgeResult};
pub use bmi::{BmiCategory, BmiInput, BmiResult};
pub use emi::{EmiBreakdown, EmiInput, EmiResult};
pub use gst::{GstInput, GstResult, GstSlab};
pub use password::{GeneratedPassword, PasswordSpec};
pub use qr::{QrLink, QrLinkInput};

/// Enum envelope over all calculator inputs.
///
/// Lets a shell or API layer accept one tagged JSON body and route it to
/// the right calculator:
///
/// ```json
/// { "type": "Bmi", "weight_kg": 70.0, "height_cm": 175.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculatorRequest {
    /// Body Mass Index
    Bmi(BmiInput),
    /// Loan amortization
    Emi(EmiInput),
    /// Age difference
    Age(AgeInput),
    /// Goods and Services Tax
    Gst(GstInput),
    /// Password generation
    Password(PasswordSpec),
    /// QR image-service link
    QrLink(QrLinkInput),
}

/// Enum envelope over all calculator results, tagged like the requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculatorResponse {
    Bmi(BmiResult),
    Emi(EmiResult),
    Age(AgeResult),
    Gst(GstResult),
    Password(GeneratedPassword),
    QrLink(QrLink),
}

impl CalculatorRequest {
    /// Get the calculator type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculatorRequest::Bmi(_) => "Bmi",
            CalculatorRequest::Emi(_) => "Emi",
            CalculatorRequest::Age(_) => "Age",
            CalculatorRequest::Gst(_) => "Gst",
            CalculatorRequest::Password(_) => "Password",
            CalculatorRequest::QrLink(_) => "QrLink",
        }
    }

    /// Run the calculator this request addresses.
    ///
    /// Every arm is deterministic for identical input except `Password`,
    /// which draws from the thread-local generator.
    pub fn run(&self) -> CalcResult<CalculatorResponse> {
        log::debug!("dispatching {} request", self.calc_type());
        match self {
            CalculatorRequest::Bmi(input) => bmi::calculate(input).map(CalculatorResponse::Bmi),
            CalculatorRequest::Emi(input) => emi::calculate(input).map(CalculatorResponse::Emi),
            CalculatorRequest::Age(input) => age::calculate(input).map(CalculatorResponse::Age),
            CalculatorRequest::Gst(input) => gst::calculate(input).map(CalculatorResponse::Gst),
            CalculatorRequest::Password(spec) => {
                password::generate(spec).map(CalculatorResponse::Password)
            }
            CalculatorRequest::QrLink(input) => {
                qr::build_link(input).map(CalculatorResponse::QrLink)
            }
        }
    }
}
