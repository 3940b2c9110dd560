//! # Error Types
//!
//! The engine has exactly one failure mode: an input state that does not
//! satisfy the preconditions of a calculator. That is modeled as the
//! [`NotComputable`] value, never as a panic. Callers get an explicit
//! `Ok(result) | Err(NotComputable)` tri-state and decide what to do with
//! prior output (the reference shell leaves it untouched).
//!
//! ## Example
//!
//! ```rust
//! use toolcraft_core::errors::{CalcResult, NotComputable};
//!
//! fn validate_weight(weight_kg: f64) -> CalcResult<()> {
//!     if weight_kg <= 0.0 {
//!         return Err(NotComputable::new(
//!             "weight_kg",
//!             weight_kg.to_string(),
//!             "Weight must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for engine operations
pub type CalcResult<T> = Result<T, NotComputable>;

/// The single error kind of the calculation engine.
///
/// Raised when a required input is missing, zero, negative, non-finite, or
/// otherwise outside a calculator's domain (e.g. a password request with no
/// character class selected). Serializable so shells and API layers can
/// forward it as structured JSON.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[error("Not computable: '{field}' = {value} - {reason}")]
pub struct NotComputable {
    /// Name of the offending input field
    pub field: String,
    /// The value as supplied (stringified for display)
    pub value: String,
    /// Why the computation cannot proceed
    pub reason: String,
}

impl NotComputable {
    /// Create a NotComputable error for a field
    pub fn new(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        NotComputable {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Variant for a field that was not supplied at all
    pub fn missing(field: impl Into<String>, reason: impl Into<String>) -> Self {
        NotComputable {
            field: field.into(),
            value: "<missing>".to_string(),
            reason: reason.into(),
        }
    }

    /// Short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        "NOT_COMPUTABLE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = NotComputable::new("height_cm", "0", "Height must be positive");
        assert_eq!(
            error.to_string(),
            "Not computable: 'height_cm' = 0 - Height must be positive"
        );
    }

    #[test]
    fn test_error_serialization() {
        let error = NotComputable::new("weight_kg", "-5.0", "Weight must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: NotComputable = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_missing_field() {
        let error = NotComputable::missing("birth_date", "A birth date is required");
        assert_eq!(error.value, "<missing>");
        assert_eq!(error.error_code(), "NOT_COMPUTABLE");
    }
}
