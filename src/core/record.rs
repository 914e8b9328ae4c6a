//! Operation records for history tracking.

use super::op::Op;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single performed operation.
///
/// Records are immutable values capturing the operands, kind, and result
/// of one arithmetic call, stamped with the time it was performed.
///
/// The `Display` form is the canonical history line,
/// `"{lhs} {symbol} {rhs} = {result}"`, using the default float formatting
/// (so `2.0` renders as `2`). The timestamp never appears in that line.
///
/// # Example
///
/// ```rust
/// use tally::core::{Op, OperationRecord};
///
/// let record = OperationRecord::new(Op::Add, 10.5, 5.2, 15.7);
/// assert_eq!(record.to_string(), "10.5 + 5.2 = 15.7");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct OperationRecord {
    /// The kind of operation performed
    pub op: Op,
    /// Left-hand operand
    pub lhs: f64,
    /// Right-hand operand
    pub rhs: f64,
    /// The computed result
    pub result: f64,
    /// When the operation was performed
    pub timestamp: DateTime<Utc>,
}

impl OperationRecord {
    /// Create a record stamped with the current time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Op, OperationRecord};
    ///
    /// let record = OperationRecord::new(Op::Multiply, 15.7, 2.0, 31.4);
    /// assert_eq!(record.op, Op::Multiply);
    /// assert_eq!(record.result, 31.4);
    /// ```
    pub fn new(op: Op, lhs: f64, rhs: f64, result: f64) -> Self {
        Self {
            op,
            lhs,
            rhs,
            result,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.op.symbol(),
            self.rhs,
            self.result
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_canonical_line() {
        let record = OperationRecord::new(Op::Add, 10.5, 5.2, 15.7);
        assert_eq!(record.to_string(), "10.5 + 5.2 = 15.7");
    }

    #[test]
    fn whole_valued_operands_render_without_fraction() {
        let record = OperationRecord::new(Op::Multiply, 15.7, 2.0, 31.4);
        assert_eq!(record.to_string(), "15.7 * 2 = 31.4");
    }

    #[test]
    fn display_covers_every_operation_symbol() {
        assert_eq!(
            OperationRecord::new(Op::Subtract, 5.0, 3.0, 2.0).to_string(),
            "5 - 3 = 2"
        );
        assert_eq!(
            OperationRecord::new(Op::Divide, 9.0, 3.0, 3.0).to_string(),
            "9 / 3 = 3"
        );
    }

    #[test]
    fn record_serializes_correctly() {
        let record = OperationRecord::new(Op::Divide, 31.4, 3.0, 31.4 / 3.0);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: OperationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn record_is_cloneable() {
        let record = OperationRecord::new(Op::Add, 1.0, 2.0, 3.0);
        let cloned = record.clone();
        assert_eq!(record, cloned);
    }
}
