//! Domain errors for the calculator.

use calculator_sdk::CalculatorError;

/// Error type for Service operations.
///
/// This is the internal error type. `CalculatorLocalClient` converts it to
/// `CalculatorError` for external consumers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Division with a zero divisor.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },
}

impl From<DomainError> for CalculatorError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DivisionByZero { .. } => CalculatorError::DivisionByZero,
        }
    }
}
