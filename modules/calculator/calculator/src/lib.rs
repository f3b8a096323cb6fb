//! Calculator Module
//!
//! A stateless arithmetic service: add, subtract, multiply, divide, plus
//! percentage and primality helpers. Division by zero is reported as an error.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic
//! - `domain/error.rs` - Domain error and its mapping to the SDK error
//! - `local_client.rs` - `CalculatorClientV1` implementation over the service
//!
//! External consumers should depend on the `CalculatorClientV1` trait from
//! `calculator-sdk` and obtain an implementation from this crate.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};

// === LOCAL CLIENT ===
mod local_client;
pub use local_client::CalculatorLocalClient;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
