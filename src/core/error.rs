//! Calculator error types.

use thiserror::Error;

/// Errors that can occur when performing calculator operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum CalculatorError {
    /// The divisor operand was exactly zero
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
