//! Domain service for calculator
//!
//! Contains the core arithmetic. Every operation is a pure function of its
//! operands.

use calculator_sdk::Operation;
use tracing::debug;

use super::error::DomainError;

/// Domain service that performs arithmetic operations.
///
/// Stateless; cloning or sharing it is free. Used by `CalculatorLocalClient`.
#[derive(Debug, Clone, Default)]
pub struct Service;

#[allow(clippy::unused_self)] // stateless
impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a`.
    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiply two numbers.
    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns [`DomainError::DivisionByZero`] when `b` is `0.0` or `-0.0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(DomainError::DivisionByZero { dividend: a });
        }
        Ok(a / b)
    }

    /// `percent` percent of `number`.
    #[must_use]
    pub fn percentage(&self, number: f64, percent: f64) -> f64 {
        debug!(number, percent, "computing percentage");
        number * percent / 100.0
    }

    /// Trial division over odd divisors up to the square root of `n`.
    #[must_use]
    pub fn is_prime(&self, n: i64) -> bool {
        debug!(n, "checking primality");
        if n <= 1 {
            return false;
        }
        if n == 2 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }

        let mut divisor: i64 = 3;
        while divisor
            .checked_mul(divisor)
            .is_some_and(|square| square <= n)
        {
            if n % divisor == 0 {
                return false;
            }
            divisor += 2;
        }
        true
    }

    /// Apply a single operation chosen at runtime.
    ///
    /// # Errors
    /// Propagates [`DomainError::DivisionByZero`] from [`Service::divide`].
    pub fn apply(&self, op: Operation, a: f64, b: f64) -> Result<f64, DomainError> {
        debug!(op = op.symbol(), a, b, "applying operation");
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
            Operation::Percentage => Ok(self.percentage(a, b)),
        }
    }
}
