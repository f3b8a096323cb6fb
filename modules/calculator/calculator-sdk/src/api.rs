//! Calculator API trait and types
//!
//! Contract trait and error type for the calculator.

use crate::models::Operation;

/// Calculator API trait
///
/// Every method is a pure function of its arguments. Implementations hold no
/// per-call state, so a single instance can be shared across threads.
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// Implementation-defined. The local client never fails here.
    fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// Same contract as [`CalculatorClientV1::add`].
    fn subtract(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Multiply two numbers.
    ///
    /// # Errors
    /// Same contract as [`CalculatorClientV1::add`].
    fn multiply(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Divide `a` by `b`. The quotient is never truncated.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Compute `percent` percent of `number`.
    ///
    /// # Errors
    /// Same contract as [`CalculatorClientV1::add`].
    fn percentage(&self, number: f64, percent: f64) -> Result<f64, CalculatorError>;

    /// Check whether `n` is a prime number.
    ///
    /// # Errors
    /// Same contract as [`CalculatorClientV1::add`].
    fn is_prime(&self, n: i64) -> Result<bool, CalculatorError>;

    /// Run a single binary operation selected at runtime.
    ///
    /// # Errors
    /// Propagates the error of the selected operation.
    fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
            Operation::Percentage => self.percentage(a, b),
        }
    }
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor of a division was zero.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    /// Minimal implementation used to exercise the provided `evaluate` method.
    struct Fixed;

    impl CalculatorClientV1 for Fixed {
        fn add(&self, _a: f64, _b: f64) -> Result<f64, CalculatorError> {
            Ok(1.0)
        }

        fn subtract(&self, _a: f64, _b: f64) -> Result<f64, CalculatorError> {
            Ok(2.0)
        }

        fn multiply(&self, _a: f64, _b: f64) -> Result<f64, CalculatorError> {
            Ok(3.0)
        }

        fn divide(&self, _a: f64, _b: f64) -> Result<f64, CalculatorError> {
            Err(CalculatorError::DivisionByZero)
        }

        fn percentage(&self, _number: f64, _percent: f64) -> Result<f64, CalculatorError> {
            Ok(5.0)
        }

        fn is_prime(&self, _n: i64) -> Result<bool, CalculatorError> {
            Ok(false)
        }
    }

    #[test]
    fn evaluate_dispatches_to_matching_method() {
        let client = Fixed;
        assert_eq!(client.evaluate(Operation::Add, 0.0, 0.0), Ok(1.0));
        assert_eq!(client.evaluate(Operation::Subtract, 0.0, 0.0), Ok(2.0));
        assert_eq!(client.evaluate(Operation::Multiply, 0.0, 0.0), Ok(3.0));
        assert_eq!(
            client.evaluate(Operation::Divide, 0.0, 0.0),
            Err(CalculatorError::DivisionByZero)
        );
        assert_eq!(client.evaluate(Operation::Percentage, 0.0, 0.0), Ok(5.0));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "cannot divide by zero"
        );
    }

    #[test]
    fn trait_is_object_safe() {
        let client: Box<dyn CalculatorClientV1> = Box::new(Fixed);
        assert_eq!(client.is_prime(7), Ok(false));
    }
}
