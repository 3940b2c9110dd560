//! # Input Parsing & Validation
//!
//! Shells collect raw text; the engine computes over finite positive numbers.
//! This module is the boundary between the two. Every calculator validates
//! through these helpers so the "no-op on invalid input" policy is uniform:
//! a failed parse or guard yields [`NotComputable`](crate::errors::NotComputable),
//! and the caller keeps whatever result it was already displaying.

use crate::errors::{CalcResult, NotComputable};

/// Parse a raw string field into a finite `f64`.
///
/// Empty or whitespace-only input is reported as a missing field; anything
/// that does not parse to a finite number is rejected.
pub fn parse_field(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NotComputable::missing(field, "A numeric value is required"));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(value) => Err(NotComputable::new(
            field,
            value.to_string(),
            "Value must be finite",
        )),
        Err(_) => Err(NotComputable::new(
            field,
            trimmed,
            "Value is not a number",
        )),
    }
}

/// Guard that a numeric field is finite and strictly positive.
///
/// Zero fails the guard: every quantity the calculators divide or amortize
/// over (weight, height, amount, rate, tenure) is meaningless at zero.
pub fn positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(NotComputable::new(
            field,
            value.to_string(),
            "Value must be finite",
        ));
    }
    if value <= 0.0 {
        return Err(NotComputable::new(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(value)
}

/// Parse a raw string field and require it to be positive.
pub fn parse_positive(field: &str, raw: &str) -> CalcResult<f64> {
    positive(field, parse_field(field, raw)?)
}
