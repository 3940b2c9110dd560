//! # EMI (Loan Amortization) Calculator
//!
//! Equated Monthly Installment for a fixed-rate loan, plus the interest and
//! total-payment figures the shell displays next to it.
//!
//! ## Formula
//!
//! With monthly rate `r = annual_rate / 12 / 100` and installment count
//! `n = years * 12`:
//!
//! ```text
//! EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! The three reported figures are each rounded to the nearest whole currency
//! unit from the unrounded intermediates, so
//! `total_payment - total_interest == principal` holds within +/-1 of
//! rounding drift.
//!
//! ## Example
//!
//! ```rust
//! use toolcraft_core::calculators::emi::{calculate, EmiInput};
//!
//! let input = EmiInput {
//!     principal: 500_000.0,
//!     annual_rate_pct: 10.0,
//!     tenure_years: 5.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.monthly_emi, 10_624);
//! assert_eq!(result.total_payment - result.total_interest, 500_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::input;

/// Input parameters for a loan amortization.
///
/// ## JSON Example
///
/// ```json
/// { "principal": 500000.0, "annual_rate_pct": 10.0, "tenure_years": 5.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    /// Loan principal in currency units
    pub principal: f64,

    /// Annual interest rate as a percentage (e.g. 10.0 for 10%)
    pub annual_rate_pct: f64,

    /// Loan tenure in years
    pub tenure_years: f64,
}

impl EmiInput {
    /// Validate input parameters.
    ///
    /// A zero rate or tenure makes the derived monthly rate or installment
    /// count zero and the formula divides by zero, so both are rejected
    /// along with the principal guard.
    pub fn validate(&self) -> CalcResult<()> {
        input::positive("principal", self.principal)?;
        input::positive("annual_rate_pct", self.annual_rate_pct)?;
        input::positive("tenure_years", self.tenure_years)?;
        Ok(())
    }

    /// Monthly interest rate r = R / 12 / 100
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 12.0 / 100.0
    }

    /// Number of monthly installments n = Y * 12
    pub fn installments(&self) -> f64 {
        self.tenure_years * 12.0
    }
}

/// Results from a loan amortization, rounded to whole currency units.
///
/// ## JSON Example
///
/// ```json
/// { "monthly_emi": 10624, "total_interest": 137411, "total_payment": 637411 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiResult {
    /// Fixed monthly payment
    pub monthly_emi: i64,

    /// Interest paid over the full tenure
    pub total_interest: i64,

    /// Principal plus interest over the full tenure
    pub total_payment: i64,
}

impl EmiResult {
    /// Two-slice principal-vs-interest split for presentation (pie charts).
    ///
    /// No further math here: both numbers are already computed, the shell
    /// just needs them side by side.
    pub fn breakdown(&self, principal: f64) -> EmiBreakdown {
        EmiBreakdown {
            principal,
            total_interest: self.total_interest,
        }
    }
}

/// The two presentation slices of an amortized loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiBreakdown {
    /// Principal slice (as entered)
    pub principal: f64,
    /// Interest slice (rounded total)
    pub total_interest: i64,
}

/// Calculate the EMI and its derived totals.
///
/// # Returns
///
/// * `Ok(EmiResult)` - rounded EMI, total interest, total payment
/// * `Err(NotComputable)` - principal, rate, or tenure missing/zero/negative
pub fn calculate(input: &EmiInput) -> CalcResult<EmiResult> {
    input.validate()?;

    let p = input.principal;
    let r = input.monthly_rate();
    let n = input.installments();

    let growth = (1.0 + r).powf(n);
    let emi = (p * r * growth) / (growth - 1.0);
    let total_payment = emi * n;
    let total_interest = total_payment - p;

    Ok(EmiResult {
        monthly_emi: emi.round() as i64,
        total_interest: total_interest.round() as i64,
        total_payment: total_payment.round() as i64,
    })
}
