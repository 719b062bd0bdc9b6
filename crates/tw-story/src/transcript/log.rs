//! Transcript storage and export.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::entry::TranscriptEntry;
use crate::error::StoryResult;

/// A chronological log of session events, capped in length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    capacity: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::with_capacity(usize::MAX)
    }
}

impl Transcript {
    /// Create an empty, unbounded transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty transcript keeping at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append an entry, dropping the oldest one when full.
    pub fn append(&mut self, entry: TranscriptEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Iterate entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.back()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the transcript as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Story Transcript\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M:%S");
            match entry {
                TranscriptEntry::Scene { location, text, .. } => {
                    out.push_str(&format!("## {location}\n\n"));
                    out.push_str(&format!("*{time}* {text}\n\n"));
                }
                TranscriptEntry::Turn {
                    input,
                    narration,
                    applied,
                    failures,
                    ..
                } => {
                    out.push_str(&format!("**> {input}** *({time})*\n\n"));
                    if let Some(narration) = narration {
                        out.push_str(&format!("{narration}\n\n"));
                    }
                    for change in applied {
                        out.push_str(&format!("- {change}\n"));
                    }
                    for failure in failures {
                        out.push_str(&format!("- *skipped*: {failure}\n"));
                    }
                    if !applied.is_empty() || !failures.is_empty() {
                        out.push('\n');
                    }
                }
                TranscriptEntry::ModelFailure { input, error, .. } => {
                    if let Some(input) = input {
                        out.push_str(&format!("**> {input}** *({time})*\n\n"));
                    }
                    out.push_str(&format!("> model failure: {error}\n\n"));
                }
            }
        }
        out
    }

    /// Export the transcript as JSON.
    pub fn export_json(&self) -> StoryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn scene(location: &str) -> TranscriptEntry {
        TranscriptEntry::Scene {
            location: location.to_string(),
            text: format!("You stand in the {location}."),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_transcript() {
        let t = Transcript::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.last().is_none());
    }

    #[test]
    fn oldest_entries_are_dropped() {
        let mut t = Transcript::with_capacity(2);
        t.append(scene("Garden"));
        t.append(scene("Cabin"));
        t.append(scene("Mansion hall"));
        assert_eq!(t.len(), 2);
        let first = t.entries().next().unwrap();
        assert!(matches!(first, TranscriptEntry::Scene { location, .. } if location == "Cabin"));
    }

    #[test]
    fn export_markdown_turn() {
        let mut t = Transcript::new();
        t.append(scene("Cellar"));
        t.append(TranscriptEntry::Turn {
            input: "take the key".to_string(),
            outcomes: "- Moved object: <Key> now is in <Inventory>".to_string(),
            narration: Some("You pick up the golden key.".to_string()),
            applied: vec!["took <Key>".to_string()],
            failures: vec!["unknown item <Unicorn>".to_string()],
            timestamp: Utc::now(),
        });
        let md = t.export_markdown();
        assert!(md.starts_with("# Story Transcript"));
        assert!(md.contains("## Cellar"));
        assert!(md.contains("**> take the key**"));
        assert!(md.contains("You pick up the golden key."));
        assert!(md.contains("- took <Key>\n"));
        assert!(md.contains("- *skipped*: unknown item <Unicorn>\n"));
    }

    #[test]
    fn export_markdown_model_failure() {
        let mut t = Transcript::new();
        t.append(TranscriptEntry::ModelFailure {
            input: Some("dance".to_string()),
            error: "connection reset".to_string(),
            timestamp: Utc::now(),
        });
        let md = t.export_markdown();
        assert!(md.contains("**> dance**"));
        assert!(md.contains("> model failure: connection reset"));
    }

    #[test]
    fn transcript_serde_roundtrip() {
        let mut t = Transcript::with_capacity(5);
        t.append(scene("Garden"));
        let json = t.export_json().unwrap();
        let t2: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(t2.len(), 1);
        assert_eq!(t2.last(), t.last());
    }
}
