//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClientV1`)
//! - Error type (`CalculatorError`)
//! - Operation model (`Operation`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operation};
//!
//! let client: Arc<dyn CalculatorClientV1> = /* e.g. calculator::CalculatorLocalClient */;
//! let quotient = client.divide(5.0, 2.0)?;
//! let sum = client.evaluate(Operation::Add, 2.0, 3.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClientV1, CalculatorError};

// === MODELS ===
pub mod models;
pub use models::Operation;
