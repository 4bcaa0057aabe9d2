//! Append-only event storage.

use super::{LoggedEvent, PoolEvent};

/// Ordered, append-only record of pool events.
///
/// Entries are never modified or removed. The sequence number of an entry
/// equals its index, so a cursor is simply "the number of events already
/// consumed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<LoggedEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `event` and returns its sequence number.
    pub fn append(&mut self, event: PoolEvent) -> u64 {
        let seq = self.next_seq();
        self.entries.push(LoggedEvent { seq, event });
        seq
    }

    /// Sequence number the next appended event will get.
    #[must_use]
    pub fn next_seq(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Every event in emission order.
    #[must_use]
    pub fn events(&self) -> &[LoggedEvent] {
        &self.entries
    }

    /// Events with `seq >= cursor`; empty if the cursor is past the end.
    #[must_use]
    pub fn events_since(&self, cursor: u64) -> &[LoggedEvent] {
        let start = usize::try_from(cursor).map_or(self.entries.len(), |c| c.min(self.entries.len()));
        &self.entries[start..]
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&LoggedEvent> {
        self.entries.last()
    }
}
