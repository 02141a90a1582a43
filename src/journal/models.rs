use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The daily log model: one free-text note per date key. Persisted as a
/// bare `{ "YYYY-MM-DD": "text" }` map. An absent key means no note; blank
/// notes are never stored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LogBook {
    pub entries: BTreeMap<String, String>,
}

impl LogBook {
    /// Upserts the trimmed note, or removes the entry entirely when the
    /// text trims to nothing. Returns whether an entry exists afterwards.
    pub fn save_note(&mut self, key: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            self.entries.remove(key);
            false
        } else {
            self.entries.insert(key.to_string(), text.to_string());
            true
        }
    }

    pub fn note(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn clear_note(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Newest first. Plain reverse key order is reverse chronological
    /// because the keys are zero-padded `YYYY-MM-DD`.
    pub fn entries_desc(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .rev()
            .map(|(date, text)| (date.as_str(), text.as_str()))
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveNoteRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub date: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub today: LogEntry,
    pub entries: Vec<LogEntry>,
}
