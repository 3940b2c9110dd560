//! # toolcraft_core - Calculation Engine
//!
//! `toolcraft_core` is the computational heart of Toolcraft, backing each of
//! the site's utility widgets with a pure, deterministic function. All inputs
//! and outputs are JSON-serializable, so the same engine can sit behind a
//! CLI, an HTTP endpoint, or a GUI without change.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Never panics on input**: Bad input yields `NotComputable`, not a fault
//! - **Shell-agnostic**: Presentation, formatting, and I/O live elsewhere
//!
//! ## Quick Start
//!
//! ```rust
//! use toolcraft_core::calculators::bmi::{calculate, BmiInput};
//!
//! let result = calculate(&BmiInput { weight_kg: 70.0, height_cm: 175.0 }).unwrap();
//! println!("BMI {} ({})", result.value, result.category.label());
//! ```
//!
//! ## Modules
//!
//! - [`calculators`] - All calculator types (BMI, EMI, age, GST, password, QR)
//! - [`input`] - Raw-string parsing and positivity guards
//! - [`errors`] - The engine's single error kind

pub mod calculators;
pub mod errors;
pub mod input;

// Re-export commonly used types at crate root for convenience
pub use calculators::{CalculatorRequest, CalculatorResponse};
pub use errors::{CalcResult, NotComputable};
