//! Journal data structures.
//!
//! This module defines the core data structures for a loaded Day One
//! export: individual entries, export metadata, and the journal that
//! holds them for the session.

// Allow dead code for export fields the charts do not read yet
#![allow(dead_code)]

use chrono::NaiveDateTime;

/// Tag name used for entries that carry no tags of their own.
pub const UNTAGGED: &str = "none";

/// A single journal entry.
///
/// Only the creation timestamp is required by the export format; the rest
/// of the fields are carried for display and are allowed to be absent.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// Creation time, converted to local wall-clock time at load
    pub timestamp: NaiveDateTime,
    /// Entry identifier from the export, if present
    pub uuid: Option<String>,
    /// Free-form entry text, if present
    pub text: Option<String>,
    /// Whether the entry was starred
    pub starred: bool,
    /// Tags in export order; may be empty
    pub tags: Vec<String>,
}

impl Entry {
    /// The tag used to color this entry: its first tag, or [`UNTAGGED`].
    pub fn primary_tag(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or(UNTAGGED)
    }
}

/// Metadata block of a Day One export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportMetadata {
    /// Export format version string (e.g. "1.0"); not validated
    pub version: Option<String>,
}

/// A loaded journal export.
///
/// Entries keep file order. The journal is immutable after load and lives
/// until the user opens another file or quits.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    /// Export metadata
    pub metadata: ExportMetadata,
    /// All entries in file order
    pub entries: Vec<Entry>,
}

impl Journal {
    /// Number of entries in the journal.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the journal has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted set of primary tags across all entries.
    ///
    /// Always includes [`UNTAGGED`], whether or not any entry is untagged,
    /// so the legend and color mapping stay stable for a given export.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.primary_tag().to_string())
            .collect();
        tags.push(UNTAGGED.to_string());
        tags.sort();
        tags.dedup();
        tags
    }

    /// The entry with the earliest timestamp, if any.
    pub fn earliest(&self) -> Option<&Entry> {
        self.entries.iter().min_by_key(|e| e.timestamp)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::entry;
    use super::*;

    #[test]
    fn test_primary_tag() {
        assert_eq!(entry(2024, 1, 1, 8, 0, &["work", "meeting"]).primary_tag(), "work");
        assert_eq!(entry(2024, 1, 1, 8, 0, &[]).primary_tag(), UNTAGGED);
    }

    #[test]
    fn test_empty_journal() {
        let journal = Journal::default();
        assert!(journal.is_empty());
        assert_eq!(journal.len(), 0);
        assert!(journal.earliest().is_none());
        // Legend still has a stable entry for untagged
        assert_eq!(journal.tags(), vec![UNTAGGED.to_string()]);
    }

    #[test]
    fn test_tags_sorted_and_deduped() {
        let journal = Journal {
            metadata: ExportMetadata::default(),
            entries: vec![
                entry(2024, 1, 1, 8, 0, &["work"]),
                entry(2024, 1, 2, 9, 0, &["dreams"]),
                entry(2024, 1, 3, 10, 0, &["work", "extra"]),
                entry(2024, 1, 4, 11, 0, &[]),
            ],
        };
        assert_eq!(journal.tags(), vec!["dreams", "none", "work"]);
    }

    #[test]
    fn test_tags_always_include_untagged() {
        let journal = Journal {
            metadata: ExportMetadata::default(),
            entries: vec![entry(2024, 1, 1, 8, 0, &["work"])],
        };
        assert!(journal.tags().contains(&UNTAGGED.to_string()));
    }

    #[test]
    fn test_earliest() {
        let journal = Journal {
            metadata: ExportMetadata::default(),
            entries: vec![
                entry(2024, 3, 1, 8, 0, &[]),
                entry(2024, 1, 15, 22, 0, &[]),
                entry(2024, 2, 1, 12, 0, &[]),
            ],
        };
        let earliest = journal.earliest().unwrap();
        assert_eq!(earliest.timestamp, entry(2024, 1, 15, 22, 0, &[]).timestamp);
    }
}
