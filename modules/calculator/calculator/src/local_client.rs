//! Local client implementing the `CalculatorClientV1` trait.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};
use tracing::warn;

use crate::domain::{DomainError, Service};

/// Local client for the calculator.
///
/// Implements `CalculatorClientV1` by delegating to the domain service and
/// mapping domain errors to `CalculatorError`.
#[derive(Clone, Default)]
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

/// Report a rejected operation with its domain context, then narrow it to the
/// public error.
fn map_domain_error(err: DomainError) -> CalculatorError {
    warn!(error = %err, "calculator operation rejected");
    err.into()
}

impl CalculatorClientV1 for CalculatorLocalClient {
    fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.add(a, b))
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.subtract(a, b))
    }

    fn multiply(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.multiply(a, b))
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.divide(a, b).map_err(map_domain_error)
    }

    fn percentage(&self, number: f64, percent: f64) -> Result<f64, CalculatorError> {
        Ok(self.service.percentage(number, percent))
    }

    fn is_prime(&self, n: i64) -> Result<bool, CalculatorError> {
        Ok(self.service.is_prime(n))
    }

    fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.apply(op, a, b).map_err(map_domain_error)
    }
}
