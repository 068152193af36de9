//! # Journal
//!
//! Single responsibility: a [`Journal`] only manages entries. Writing it to
//! disk is the job of a [`ContentSink`](crate::sink::ContentSink), see
//! [`save_journal`](crate::sink::save_journal).
//!
//! Entry numbers come from a counter owned by the journal itself, so two
//! journals never share a sequence and a fresh journal always starts at 1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub seq: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.seq, self.text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    count: u64,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its sequence number.
    pub fn add_entry(&mut self, text: impl Into<String>) -> u64 {
        self.count += 1;
        let entry = JournalEntry {
            seq: self.count,
            text: text.into(),
            created_at: Utc::now(),
        };
        debug!(seq = entry.seq, "journal entry added");
        self.entries.push(entry);
        self.count
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries as `"<seq>: <text>"` lines joined by newlines.
    pub fn contents(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
