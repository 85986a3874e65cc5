//! The dispatch journal — an in-memory record of what the kernel did.
//!
//! Every dispatch is recorded, followed by any report lines the event
//! emitted while it was handled. Nothing here is persisted.

use crate::types::{DispatchSeq, SimTime};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalKind {
    Dispatched { event: String },
    Report { text: String },
    Halted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    /// Dispatch this entry belongs to (1-based).
    pub seq:  DispatchSeq,
    pub time: SimTime,
    pub kind: JournalKind,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            JournalKind::Dispatched { event } => {
                write!(f, "[t={}] #{} dispatch {}", self.time, self.seq, event)
            }
            JournalKind::Report { text } => write!(f, "[t={}] {}", self.time, text),
            JournalKind::Halted => write!(f, "[t={}] simulation halted", self.time),
        }
    }
}

/// Bounded journal. A capacity of 0 keeps everything; otherwise the
/// oldest entries are dropped once the capacity is exceeded.
#[derive(Debug, Default)]
pub struct Journal {
    entries:  VecDeque<JournalEntry>,
    capacity: usize,
}

impl Journal {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::new(), capacity }
    }

    pub fn record(&mut self, seq: DispatchSeq, time: SimTime, kind: JournalKind) {
        self.entries.push_back(JournalEntry { seq, time, kind });
        if self.capacity > 0 {
            while self.entries.len() > self.capacity {
                self.entries.pop_front();
            }
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    /// Only the text of report entries, in order.
    pub fn reports(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match &e.kind {
            JournalKind::Report { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> JournalKind {
        JournalKind::Report { text: text.into() }
    }

    #[test]
    fn unlimited_journal_keeps_everything() {
        let mut journal = Journal::new(0);
        for i in 0..100 {
            journal.record(i, i, report("x"));
        }
        assert_eq!(journal.len(), 100);
    }

    #[test]
    fn bounded_journal_drops_oldest() {
        let mut journal = Journal::new(3);
        for i in 1..=5 {
            journal.record(i, i * 10, report(&format!("line {i}")));
        }
        let kept: Vec<_> = journal.reports().collect();
        assert_eq!(kept, vec!["line 3", "line 4", "line 5"]);
    }

    #[test]
    fn entries_render_readably() {
        let dispatched = JournalEntry {
            seq:  2,
            time: 100,
            kind: JournalKind::Dispatched { event: "move_task".into() },
        };
        assert_eq!(dispatched.to_string(), "[t=100] #2 dispatch move_task");

        let halted = JournalEntry { seq: 3, time: 7, kind: JournalKind::Halted };
        assert_eq!(halted.to_string(), "[t=7] simulation halted");
    }

    #[test]
    fn entries_serialize_with_type_tag() {
        let entry = JournalEntry { seq: 1, time: 0, kind: report("hello") };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"report\""), "got {json}");
        assert!(json.contains("\"text\":\"hello\""), "got {json}");
    }
}
