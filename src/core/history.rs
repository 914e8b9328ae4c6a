//! Operation history tracking.
//!
//! Provides ordered, append-only tracking of performed operations.
//! Records are only ever added at the end or removed all at once by an
//! explicit clear.

use super::record::OperationRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ordered history of performed operations.
///
/// The history is append-only: `record` pushes one entry at the end, and
/// the only way to remove entries is `clear`. Insertion order is
/// preserved everywhere entries are exposed.
///
/// # Example
///
/// ```rust
/// use tally::core::{History, Op, OperationRecord};
///
/// let mut history = History::new();
/// history.record(OperationRecord::new(Op::Add, 10.5, 5.2, 15.7));
/// history.record(OperationRecord::new(Op::Multiply, 15.7, 2.0, 31.4));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(
///     history.formatted(),
///     vec!["10.5 + 5.2 = 15.7", "15.7 * 2 = 31.4"]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    records: Vec<OperationRecord>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record at the end of the history.
    pub fn record(&mut self, record: OperationRecord) {
        self.records.push(record);
    }

    /// Get all records in insertion order.
    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    /// Render every record as its canonical history line.
    ///
    /// The returned vector is an independent copy: mutating it does not
    /// affect the history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{History, Op, OperationRecord};
    ///
    /// let mut history = History::new();
    /// history.record(OperationRecord::new(Op::Subtract, 5.0, 3.0, 2.0));
    ///
    /// let mut lines = history.formatted();
    /// lines.clear();
    /// assert_eq!(history.formatted(), vec!["5 - 3 = 2"]);
    /// ```
    pub fn formatted(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    /// Number of records in the history.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the history holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove all records.
    ///
    /// Clearing an already-empty history is a no-op.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Calculate the wall-clock span from first to last record.
    ///
    /// Returns `None` if there are no records. Otherwise returns the
    /// duration between the first and last record timestamps.
    pub fn elapsed(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let elapsed = last.timestamp.signed_duration_since(first.timestamp);
            elapsed.to_std().ok()
        } else {
            None
        }
    }
}
