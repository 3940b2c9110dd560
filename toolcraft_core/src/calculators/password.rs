//! # Password Generator
//!
//! Random passwords sampled uniformly (with replacement) from the union of
//! the selected character classes. Pool assembly order is uppercase,
//! lowercase, digits, symbols; selection is uniform over the pool, so the
//! order only matters for reproducing seeded test sequences.
//!
//! This deliberately uses the general-purpose `rand` generator, not a
//! cryptographically secure source, matching the behavior of the product it
//! reimplements. Not suitable where cryptographic strength is required.
//!
//! ## Example
//!
//! ```rust
//! use toolcraft_core::calculators::password::{generate, PasswordSpec};
//!
//! let spec = PasswordSpec { length: 16, ..PasswordSpec::default() };
//! let password = generate(&spec).unwrap();
//! assert_eq!(password.value.len(), 16);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, NotComputable};

/// Uppercase class alphabet
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase class alphabet
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Digit class alphabet
pub const DIGITS: &str = "0123456789";
/// Symbol class alphabet
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Shortest allowed password
pub const MIN_LENGTH: u32 = 6;
/// Longest allowed password
pub const MAX_LENGTH: u32 = 32;

/// Input parameters for password generation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 12,
///   "include_uppercase": true,
///   "include_lowercase": true,
///   "include_digits": true,
///   "include_symbols": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordSpec {
    /// Desired password length, 6 to 32 inclusive
    pub length: u32,

    /// Include A-Z
    pub include_uppercase: bool,

    /// Include a-z
    pub include_lowercase: bool,

    /// Include 0-9
    pub include_digits: bool,

    /// Include the fixed symbol set (see [`SYMBOLS`])
    pub include_symbols: bool,
}

impl Default for PasswordSpec {
    /// The site's initial control state: 12 characters, every class on.
    fn default() -> Self {
        PasswordSpec {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl PasswordSpec {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(NotComputable::new(
                "length",
                self.length.to_string(),
                "Length must be between 6 and 32",
            ));
        }
        if self.pool().is_empty() {
            return Err(NotComputable::new(
                "character_classes",
                "none selected",
                "At least one character class must be selected",
            ));
        }
        Ok(())
    }

    /// Assemble the sampling pool from the selected classes.
    ///
    /// Order is uppercase, lowercase, digits, symbols.
    pub fn pool(&self) -> String {
        let mut pool = String::new();
        if self.include_uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.include_lowercase {
            pool.push_str(LOWERCASE);
        }
        if self.include_digits {
            pool.push_str(DIGITS);
        }
        if self.include_symbols {
            pool.push_str(SYMBOLS);
        }
        pool
    }
}

/// A generated password.
///
/// ## JSON Example
///
/// ```json
/// { "value": "k2#vLp9!qRx=" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    /// Exactly `length` characters from the selected pool
    pub value: String,
}

/// Generate a password with the thread-local generator.
///
/// # Returns
///
/// * `Ok(GeneratedPassword)` - exactly `length` characters from the pool
/// * `Err(NotComputable)` - length out of range or no class selected
pub fn generate(spec: &PasswordSpec) -> CalcResult<GeneratedPassword> {
    generate_with(spec, &mut rand::rng())
}

/// Generate a password from a caller-supplied generator.
///
/// Lets tests drive a seeded `StdRng` for reproducible output; production
/// callers go through [`generate`].
pub fn generate_with<R: Rng + ?Sized>(
    spec: &PasswordSpec,
    rng: &mut R,
) -> CalcResult<GeneratedPassword> {
    spec.validate()?;

    // The pool is ASCII only, so byte indexing is character indexing.
    let pool = spec.pool();
    let bytes = pool.as_bytes();
    let mut value = String::with_capacity(spec.length as usize);
    for _ in 0..spec.length {
        let idx = rng.random_range(0..bytes.len());
        value.push(bytes[idx] as char);
    }

    Ok(GeneratedPassword { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn digits_only(length: u32) -> PasswordSpec {
        PasswordSpec {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: true,
            include_symbols: false,
        }
    }

    #[test]
    fn test_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let password = generate_with(&digits_only(12), &mut rng).unwrap();
        assert_eq!(password.value.len(), 12);
        assert!(password.value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_pool_assembly_order() {
        let spec = PasswordSpec::default();
        let pool = spec.pool();
        assert!(pool.starts_with(UPPERCASE));
        assert!(pool.ends_with(SYMBOLS));
        assert_eq!(
            pool.len(),
            UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SYMBOLS.len()
        );
    }

    #[test]
    fn test_pool_respects_toggles() {
        let spec = PasswordSpec {
            include_uppercase: false,
            include_symbols: false,
            ..PasswordSpec::default()
        };
        let pool = spec.pool();
        assert_eq!(pool, format!("{}{}", LOWERCASE, DIGITS));
    }

    #[test]
    fn test_no_class_not_computable() {
        let spec = PasswordSpec {
            length: 12,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_symbols: false,
        };
        let err = generate(&spec).unwrap_err();
        assert_eq!(err.field, "character_classes");
    }

    #[test]
    fn test_length_bounds() {
        assert!(generate(&digits_only(5)).is_err());
        assert!(generate(&digits_only(33)).is_err());
        assert_eq!(generate(&digits_only(6)).unwrap().value.len(), 6);
        assert_eq!(generate(&digits_only(32)).unwrap().value.len(), 32);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let spec = PasswordSpec::default();
        let a = generate_with(&spec, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with(&spec, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn test_draws_are_independent_across_calls() {
        // One seeded stream, consecutive generations: collisions over a
        // 95-character pool at length 20 would mean the stream repeats.
        let spec = PasswordSpec {
            length: 20,
            ..PasswordSpec::default()
        };
        let mut rng = StdRng::seed_from_u64(99);
        let first = generate_with(&spec, &mut rng).unwrap();
        let second = generate_with(&spec, &mut rng).unwrap();
        assert_ne!(first.value, second.value);
    }

    #[test]
    fn test_every_class_reachable() {
        // With all classes on and enough draws, each class should appear.
        let spec = PasswordSpec {
            length: 32,
            ..PasswordSpec::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..50 {
            let password = generate_with(&spec, &mut rng).unwrap();
            for c in password.value.chars() {
                if c.is_ascii_uppercase() {
                    seen[0] = true;
                } else if c.is_ascii_lowercase() {
                    seen[1] = true;
                } else if c.is_ascii_digit() {
                    seen[2] = true;
                } else {
                    seen[3] = true;
                }
            }
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_serialization() {
        let spec = PasswordSpec::default();
        let json = serde_json::to_string(&spec).unwrap();
        let roundtrip: PasswordSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.length, 12);
        assert!(roundtrip.include_symbols);
    }
}
