//! Operation kinds for the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a binary arithmetic operation.
///
/// Operations are immutable values identifying which of the four
/// arithmetic functions produced a history record.
///
/// # Example
///
/// ```rust
/// use tally::core::Op;
///
/// assert_eq!(Op::Add.symbol(), "+");
/// assert_eq!(Op::Divide.symbol(), "/");
/// assert_eq!(Op::Multiply.to_string(), "*");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// Get the operation's infix symbol for display.
    pub fn symbol(&self) -> &str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_matches_variant() {
        assert_eq!(Op::Add.symbol(), "+");
        assert_eq!(Op::Subtract.symbol(), "-");
        assert_eq!(Op::Multiply.symbol(), "*");
        assert_eq!(Op::Divide.symbol(), "/");
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(format!("{}", Op::Add), "+");
        assert_eq!(format!("{}", Op::Subtract), "-");
        assert_eq!(format!("{}", Op::Multiply), "*");
        assert_eq!(format!("{}", Op::Divide), "/");
    }

    #[test]
    fn op_serializes_correctly() {
        let op = Op::Divide;
        let json = serde_json::to_string(&op).unwrap();
        let deserialized: Op = serde_json::from_str(&json).unwrap();
        assert_eq!(op, deserialized);
    }

    #[test]
    fn op_is_comparable() {
        assert_eq!(Op::Add, Op::Add);
        assert_ne!(Op::Add, Op::Subtract);
    }
}
