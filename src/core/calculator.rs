//! The stateful calculator and its factory function.

use super::error::CalculatorError;
use super::history::History;
use super::op::Op;
use super::record::OperationRecord;
use serde::{Deserialize, Serialize};

/// Arithmetic calculator with an audit trail of performed operations.
///
/// Every successful operation appends exactly one record to the history;
/// a failed division appends nothing and leaves the calculator exactly as
/// it was before the call. Mutation requires `&mut self`, so the borrow
/// checker rules out unsynchronized shared mutation.
///
/// # Example
///
/// ```rust
/// use tally::Calculator;
///
/// let mut calc = Calculator::new();
///
/// let sum = calc.add(10.5, 5.2);
/// assert_eq!(sum, 15.7);
///
/// let product = calc.multiply(sum, 2.0);
/// assert_eq!(product, 31.4);
///
/// let quotient = calc.divide(product, 3.0).unwrap();
/// assert_eq!(quotient, 31.4 / 3.0);
///
/// assert_eq!(
///     calc.get_history(),
///     vec![
///         "10.5 + 5.2 = 15.7",
///         "15.7 * 2 = 31.4",
///         "31.4 / 3 = 10.466666666666667",
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    /// Create a calculator with an empty history.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Add two numbers and return the result.
    ///
    /// Appends the record `"{a} + {b} = {result}"` to the history.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.history.record(OperationRecord::new(Op::Add, a, b, result));
        result
    }

    /// Subtract `b` from `a` and return the result.
    ///
    /// Appends the record `"{a} - {b} = {result}"` to the history.
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = a - b;
        self.history
            .record(OperationRecord::new(Op::Subtract, a, b, result));
        result
    }

    /// Multiply two numbers and return the result.
    ///
    /// Appends the record `"{a} * {b} = {result}"` to the history.
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        self.history
            .record(OperationRecord::new(Op::Multiply, a, b, result));
        result
    }

    /// Divide `a` by `b` and return the result.
    ///
    /// Appends the record `"{a} / {b} = {result}"` on success. Fails with
    /// [`CalculatorError::DivisionByZero`] when `b` equals zero (exact
    /// comparison, so `-0.0` is rejected too); in that case no record is
    /// appended. Divisors that merely approach zero divide normally, and
    /// a `NaN` divisor is not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::{Calculator, CalculatorError};
    ///
    /// let mut calc = Calculator::new();
    ///
    /// assert_eq!(calc.divide(9.0, 3.0), Ok(3.0));
    /// assert_eq!(calc.divide(5.0, 0.0), Err(CalculatorError::DivisionByZero));
    ///
    /// // The failed call left no trace.
    /// assert_eq!(calc.get_history(), vec!["9 / 3 = 3"]);
    /// ```
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        if b == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        let result = a / b;
        self.history
            .record(OperationRecord::new(Op::Divide, a, b, result));
        Ok(result)
    }

    /// Get an independent copy of the formatted history lines.
    ///
    /// Lines appear in call order. Mutating the returned vector does not
    /// affect the calculator.
    pub fn get_history(&self) -> Vec<String> {
        self.history.formatted()
    }

    /// Get a read-only view of the structured history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Empty the history.
    ///
    /// Clearing an already-empty history is a no-op.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Create a new calculator with an empty history.
///
/// Pure constructor wrapper around [`Calculator::new`].
///
/// # Example
///
/// ```rust
/// use tally::create_calculator;
///
/// let calc = create_calculator();
/// assert!(calc.get_history().is_empty());
/// ```
pub fn create_calculator() -> Calculator {
    Calculator::new()
}
