//! Append-only audit log of executed transitions.
//!
//! Every successful transition leaves one record behind. The log is never
//! truncated or rewritten; failed attempts never appear in it.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed transition.
///
/// The timestamp is taken when the transition is validated, before hooks
/// fire.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: StateId> {
    /// The state that was left
    pub from: S,
    /// The state that was entered
    pub to: S,
    /// When the transition executed
    pub timestamp: DateTime<Utc>,
}

impl<S: StateId> TransitionRecord<S> {
    /// Build a record stamped with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, append-only history of executed transitions.
///
/// # Example
///
/// ```rust
/// use switchyard::{TransitionLog, TransitionRecord};
///
/// let mut log: TransitionLog<u32> = TransitionLog::new();
/// log.append(TransitionRecord::now(1, 2));
/// log.append(TransitionRecord::now(2, 3));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.path(), vec![&1, &2, &3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: StateId> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: StateId> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> TransitionLog<S> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record. Records are only ever added, never removed.
    pub fn append(&mut self, record: TransitionRecord<S>) {
        self.records.push(record);
    }

    /// All records in execution order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any transition has executed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.records.last()
    }

    /// The path of states traversed: the first record's `from`, then each
    /// record's `to`. Empty if nothing has executed.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<TestState> = TransitionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.path().is_empty());
        assert!(log.last().is_none());
        assert!(log.duration().is_none());
    }

    #[test]
    fn append_preserves_order() {
        let mut log = TransitionLog::new();
        log.append(TransitionRecord::now(TestState::Initial, TestState::Processing));
        log.append(TransitionRecord::now(TestState::Processing, TestState::Complete));

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].from, TestState::Initial);
        assert_eq!(log.records()[0].to, TestState::Processing);
        assert_eq!(log.records()[1].from, TestState::Processing);
        assert_eq!(log.records()[1].to, TestState::Complete);
    }

    #[test]
    fn path_reconstructs_traversal() {
        let mut log = TransitionLog::new();
        log.append(TransitionRecord::now(TestState::Initial, TestState::Processing));
        log.append(TransitionRecord::now(TestState::Processing, TestState::Complete));

        let path = log.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
    }

    #[test]
    fn last_returns_most_recent_record() {
        let mut log = TransitionLog::new();
        log.append(TransitionRecord::now(TestState::Initial, TestState::Processing));
        log.append(TransitionRecord::now(TestState::Processing, TestState::Complete));

        let last = log.last().unwrap();
        assert_eq!(last.from, TestState::Processing);
        assert_eq!(last.to, TestState::Complete);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut log = TransitionLog::new();
        log.append(TransitionRecord::now(TestState::Initial, TestState::Processing));

        std::thread::sleep(std::time::Duration::from_millis(10));
        log.append(TransitionRecord::now(TestState::Processing, TestState::Complete));

        let duration = log.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let mut log = TransitionLog::new();
        log.append(TransitionRecord::now(TestState::Initial, TestState::Processing));

        assert_eq!(log.duration().unwrap(), std::time::Duration::from_secs(0));
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = TransitionLog::new();
        log.append(TransitionRecord::now(TestState::Initial, TestState::Processing));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(log.len(), deserialized.len());
        assert_eq!(deserialized.records()[0].from, TestState::Initial);
        assert_eq!(deserialized.records()[0].to, TestState::Processing);
    }
}
