use crate::domain::model::LogEntry;
use crate::domain::ports::EventSink;

/// Append-only in-memory event log. Readers poll with a cursor.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<LogEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries appended after `cursor`; pass the returned length back next time.
    pub fn since(&self, cursor: usize) -> (&[LogEntry], usize) {
        let start = cursor.min(self.entries.len());
        (&self.entries[start..], self.entries.len())
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.event.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EventSink for Journal {
    fn emit(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }
}
