//! Tally: a minimal arithmetic calculator with an operation audit trail
//!
//! Tally performs the four binary arithmetic operations over
//! double-precision floats and keeps an append-only history of every
//! successful call, one formatted record per operation.
//!
//! # Core Concepts
//!
//! - **Calculator**: the stateful object performing arithmetic
//! - **History**: ordered, append-only log of operation records
//! - **DivisionByZero**: the single error kind, raised when the divisor
//!   is exactly zero; a failed division leaves no trace in the history
//!
//! # Example
//!
//! ```rust
//! use tally::create_calculator;
//!
//! let mut calc = create_calculator();
//!
//! let sum = calc.add(10.5, 5.2);
//! let product = calc.multiply(sum, 2.0);
//! let quotient = calc.divide(product, 3.0)?;
//!
//! assert_eq!(quotient, 31.4 / 3.0);
//! assert_eq!(calc.get_history().len(), 3);
//! # Ok::<(), tally::CalculatorError>(())
//! ```

pub mod core;

// Re-export commonly used types
pub use core::{create_calculator, Calculator, CalculatorError, History, Op, OperationRecord};
