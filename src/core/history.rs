//! Bounded history of completed calculations.
//!
//! Every computation, function application and error leaves one line in the
//! history. The newest line is always first, and once the capacity is reached
//! the oldest line is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of lines kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One recorded calculation.
///
/// # Example
///
/// ```rust
/// use calcflow::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("5 + 3 = 8");
/// assert_eq!(entry.line, "5 + 3 = 8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Text shown to the user, e.g. `"10 + sqr(4) = 26"`
    pub line: String,
    /// When the calculation completed
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Most-recent-first list of calculations with a fixed capacity.
///
/// # Example
///
/// ```rust
/// use calcflow::core::CalculationHistory;
///
/// let mut history = CalculationHistory::with_capacity(2);
/// history.record("1 + 1 = 2");
/// history.record("2 + 2 = 4");
/// history.record("3 + 3 = 6");
///
/// assert_eq!(history.lines(), vec!["3 + 3 = 6", "2 + 2 = 4"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationHistory {
    /// Create an empty history holding [`DEFAULT_HISTORY_CAPACITY`] lines.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding at most `capacity` lines.
    ///
    /// A capacity of zero is raised to one so the latest result is always
    /// visible.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a line at the front, evicting the oldest beyond capacity.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push_front(HistoryEntry::new(line));
        self.entries.truncate(self.capacity);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The text of each entry, newest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.line.clone()).collect()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn record_puts_newest_first() {
        let mut history = CalculationHistory::new();
        history.record("1 + 1 = 2");
        history.record("2 × 3 = 6");

        assert_eq!(history.lines(), vec!["2 × 3 = 6", "1 + 1 = 2"]);
        assert_eq!(history.latest().unwrap().line, "2 × 3 = 6");
    }

    #[test]
    fn record_evicts_oldest_beyond_capacity() {
        let mut history = CalculationHistory::new();
        for i in 0..15 {
            history.record(format!("{i} + 0 = {i}"));
        }

        assert_eq!(history.len(), 10);
        assert_eq!(history.lines()[0], "14 + 0 = 14");
        assert_eq!(history.lines()[9], "5 + 0 = 5");
    }

    #[test]
    fn zero_capacity_keeps_latest_line() {
        let mut history = CalculationHistory::with_capacity(0);
        history.record("a");
        history.record("b");

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.lines(), vec!["b"]);
    }

    #[test]
    fn clear_removes_everything() {
        let mut history = CalculationHistory::new();
        history.record("√(4) = 2");
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn entries_are_timestamped_in_order() {
        let mut history = CalculationHistory::new();
        history.record("first");
        history.record("second");

        let stamps: Vec<_> = history.entries().map(|e| e.recorded_at).collect();
        assert!(stamps[0] >= stamps[1]);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = CalculationHistory::with_capacity(3);
        history.record("5 ÷ 0 = Cannot divide by zero");

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalculationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
