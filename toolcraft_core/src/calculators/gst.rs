//! # GST Calculator
//!
//! Goods and Services Tax on an amount, at one of the four statutory slab
//! rates. The computed figures are exact; two-decimal display is a shell
//! concern.
//!
//! ## Example
//!
//! ```rust
//! use toolcraft_core::calculators::gst::{calculate, GstInput, GstSlab};
//!
//! let input = GstInput { amount: 1000.0, rate: GstSlab::Eighteen };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.tax_amount, 180.0);
//! assert_eq!(result.total_payable, 1180.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, NotComputable};
use crate::input;

/// The closed set of GST slab rates, in percent.
///
/// Serialized as the plain number (5, 12, 18, 28); any other number fails
/// deserialization rather than silently computing at an unlisted rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GstSlab {
    Five,
    Twelve,
    Eighteen,
    TwentyEight,
}

impl GstSlab {
    /// All slabs, in ascending order
    pub const ALL: [GstSlab; 4] = [
        GstSlab::Five,
        GstSlab::Twelve,
        GstSlab::Eighteen,
        GstSlab::TwentyEight,
    ];

    /// The slab rate as a percentage
    pub fn percent(&self) -> f64 {
        u8::from(*self) as f64
    }
}

impl Default for GstSlab {
    /// The site's pre-selected slab
    fn default() -> Self {
        GstSlab::Eighteen
    }
}

impl From<GstSlab> for u8 {
    fn from(slab: GstSlab) -> u8 {
        match slab {
            GstSlab::Five => 5,
            GstSlab::Twelve => 12,
            GstSlab::Eighteen => 18,
            GstSlab::TwentyEight => 28,
        }
    }
}

impl TryFrom<u8> for GstSlab {
    type Error = NotComputable;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(GstSlab::Five),
            12 => Ok(GstSlab::Twelve),
            18 => Ok(GstSlab::Eighteen),
            28 => Ok(GstSlab::TwentyEight),
            other => Err(NotComputable::new(
                "rate",
                other.to_string(),
                "GST rate must be one of 5, 12, 18, 28",
            )),
        }
    }
}

/// Input parameters for a GST calculation.
///
/// ## JSON Example
///
/// ```json
/// { "amount": 1000.0, "rate": 18 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstInput {
    /// Original (pre-tax) amount
    pub amount: f64,

    /// Slab rate; defaults to 18% when omitted
    #[serde(default)]
    pub rate: GstSlab,
}

impl GstInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        input::positive("amount", self.amount)?;
        Ok(())
    }
}

/// Results from a GST calculation, unrounded.
///
/// ## JSON Example
///
/// ```json
/// { "tax_amount": 180.0, "total_payable": 1180.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GstResult {
    /// Tax on the original amount
    pub tax_amount: f64,

    /// Original amount plus tax
    pub total_payable: f64,
}

/// Calculate GST and the total payable.
///
/// # Returns
///
/// * `Ok(GstResult)` - tax amount and total
/// * `Err(NotComputable)` - amount missing, zero, or negative
pub fn calculate(input: &GstInput) -> CalcResult<GstResult> {
    input.validate()?;

    let tax_amount = input.amount * input.rate.percent() / 100.0;

    Ok(GstResult {
        tax_amount,
        total_payable: input.amount + tax_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case() {
        let result = calculate(&GstInput {
            amount: 1000.0,
            rate: GstSlab::Eighteen,
        })
        .unwrap();
        assert_eq!(result.tax_amount, 180.0);
        assert_eq!(result.total_payable, 1180.0);
    }

    #[test]
    fn test_all_slabs() {
        let expected_tax = [50.0, 120.0, 180.0, 280.0];
        for (rate, tax) in GstSlab::ALL.into_iter().zip(expected_tax) {
            let result = calculate(&GstInput { amount: 1000.0, rate }).unwrap();
            assert_eq!(result.tax_amount, tax);
            assert_eq!(result.total_payable, 1000.0 + tax);
        }
    }

    #[test]
    fn test_no_rounding() {
        // 2499.99 at 28% keeps the full fractional tail
        let result = calculate(&GstInput {
            amount: 2499.99,
            rate: GstSlab::TwentyEight,
        })
        .unwrap();
        assert!((result.tax_amount - 699.9972).abs() < 1e-9);
        assert_eq!(result.total_payable, 2499.99 + result.tax_amount);
    }

    #[test]
    fn test_slab_set_is_closed() {
        assert!(GstSlab::try_from(15).is_err());
        assert!(GstSlab::try_from(0).is_err());
        assert_eq!(GstSlab::try_from(28).unwrap(), GstSlab::TwentyEight);
    }

    #[test]
    fn test_default_slab() {
        assert_eq!(GstSlab::default(), GstSlab::Eighteen);
        let input: GstInput = serde_json::from_str(r#"{"amount": 500.0}"#).unwrap();
        assert_eq!(input.rate, GstSlab::Eighteen);
    }

    #[test]
    fn test_zero_amount_not_computable() {
        assert!(calculate(&GstInput {
            amount: 0.0,
            rate: GstSlab::Five
        })
        .is_err());
    }

    #[test]
    fn test_serialization_as_number() {
        let input = GstInput {
            amount: 1000.0,
            rate: GstSlab::TwentyEight,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"rate\":28"));

        let bad: Result<GstInput, _> = serde_json::from_str(r#"{"amount":100.0,"rate":15}"#);
        assert!(bad.is_err());
    }
}
