//! JSON parser for Day One journal exports.
//!
//! This module turns the raw export JSON into the internal [`Journal`]
//! structure. The export schema is owned by the Day One application; only
//! the fields the charts need are validated, everything else is ignored.

use serde::Deserialize;
use thiserror::Error;

use super::dates;
use super::entry::{Entry, ExportMetadata, Journal};

/// Errors that can occur while parsing a journal export.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON syntax error
    #[error("Invalid JSON syntax: {0}")]
    JsonSyntax(#[from] serde_json::Error),

    /// Missing required field in the JSON structure
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// An entry's creation date is missing
    #[error("Entry {index} has no creationDate field")]
    MissingTimestamp { index: usize },

    /// An entry's creation date could not be parsed
    #[error("Entry {index} has an invalid creationDate '{value}': expected {expected}")]
    InvalidTimestamp {
        index: usize,
        value: String,
        expected: &'static str,
    },
}

// ============================================================================
// Intermediate JSON structures for deserialization
// ============================================================================

/// Top-level JSON structure of a Day One export.
#[derive(Debug, Deserialize)]
struct JsonExport {
    #[serde(default)]
    metadata: Option<JsonMetadata>,
    entries: Option<Vec<JsonEntry>>,
}

/// Metadata section in JSON format.
#[derive(Debug, Deserialize)]
struct JsonMetadata {
    #[serde(default)]
    version: Option<String>,
}

/// A journal entry in JSON format. Day One uses camelCase keys.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonEntry {
    #[serde(default)]
    creation_date: Option<String>,
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    starred: bool,
    #[serde(default)]
    tags: Vec<String>,
}

// ============================================================================
// Parser implementation
// ============================================================================

/// Parse a Day One export JSON string into a [`Journal`].
///
/// # Arguments
/// * `content` - The JSON string to parse
///
/// # Returns
/// * `Ok(Journal)` - Successfully parsed journal, entries in file order
/// * `Err(ParseError)` - Parsing failed with a descriptive error
///
/// An entry with a missing or malformed `creationDate` fails the whole
/// load; the error names the offending entry's index.
pub fn parse_json(content: &str) -> Result<Journal, ParseError> {
    let json_export: JsonExport = serde_json::from_str(content)?;

    let json_entries = json_export
        .entries
        .ok_or(ParseError::MissingField { field: "entries" })?;

    let metadata = ExportMetadata {
        version: json_export.metadata.and_then(|m| m.version),
    };

    let entries = json_entries
        .into_iter()
        .enumerate()
        .map(|(index, e)| convert_entry(index, e))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Journal { metadata, entries })
}

/// Convert a JSON entry to an [`Entry`], validating its timestamp.
fn convert_entry(index: usize, json: JsonEntry) -> Result<Entry, ParseError> {
    let raw = json
        .creation_date
        .ok_or(ParseError::MissingTimestamp { index })?;

    let utc = dates::parse_day_one(&raw).map_err(|_| ParseError::InvalidTimestamp {
        index,
        value: raw.clone(),
        expected: dates::DAY_ONE_FORMAT,
    })?;

    Ok(Entry {
        timestamp: dates::to_local_naive(utc),
        uuid: json.uuid,
        text: json.text,
        starred: json.starred,
        tags: json.tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::UNTAGGED;

    #[test]
    fn test_parse_minimal_export() {
        let json = r#"{
            "metadata": { "version": "1.0" },
            "entries": []
        }"#;

        let journal = parse_json(json).unwrap();
        assert_eq!(journal.metadata.version.as_deref(), Some("1.0"));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_parse_entries_keep_file_order() {
        let json = r#"{
            "entries": [
                { "creationDate": "2024-03-02T08:00:00Z", "tags": ["later"] },
                { "creationDate": "2024-03-01T08:00:00Z", "tags": ["earlier"] }
            ]
        }"#;

        let journal = parse_json(json).unwrap();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal.entries[0].primary_tag(), "later");
        assert_eq!(journal.entries[1].primary_tag(), "earlier");
    }

    #[test]
    fn test_parse_full_entry_fields() {
        let json = r#"{
            "entries": [
                {
                    "creationDate": "2024-03-01T08:15:00Z",
                    "uuid": "ABC123",
                    "text": "Morning pages",
                    "starred": true,
                    "tags": ["journal", "morning"],
                    "timeZone": "America/Chicago",
                    "duration": 0
                }
            ]
        }"#;

        let journal = parse_json(json).unwrap();
        let entry = &journal.entries[0];
        assert_eq!(entry.uuid.as_deref(), Some("ABC123"));
        assert_eq!(entry.text.as_deref(), Some("Morning pages"));
        assert!(entry.starred);
        assert_eq!(entry.primary_tag(), "journal");
    }

    #[test]
    fn test_parse_untagged_entry() {
        let json = r#"{
            "entries": [ { "creationDate": "2024-03-01T08:00:00Z" } ]
        }"#;

        let journal = parse_json(json).unwrap();
        assert!(journal.entries[0].tags.is_empty());
        assert_eq!(journal.entries[0].primary_tag(), UNTAGGED);
    }

    #[test]
    fn test_parse_missing_metadata_is_fine() {
        let json = r#"{ "entries": [] }"#;
        let journal = parse_json(json).unwrap();
        assert_eq!(journal.metadata.version, None);
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse_json("");
        assert!(matches!(result.unwrap_err(), ParseError::JsonSyntax(_)));
    }

    #[test]
    fn test_parse_invalid_syntax() {
        let result = parse_json("{ not json }");
        assert!(matches!(result.unwrap_err(), ParseError::JsonSyntax(_)));
    }

    #[test]
    fn test_parse_missing_entries_array() {
        let result = parse_json(r#"{ "metadata": { "version": "1.0" } }"#);
        assert!(matches!(
            result.unwrap_err(),
            ParseError::MissingField { field: "entries" }
        ));
    }

    #[test]
    fn test_parse_missing_creation_date() {
        let json = r#"{
            "entries": [
                { "creationDate": "2024-03-01T08:00:00Z" },
                { "text": "no timestamp here" }
            ]
        }"#;

        let result = parse_json(json);
        assert!(matches!(
            result.unwrap_err(),
            ParseError::MissingTimestamp { index: 1 }
        ));
    }

    #[test]
    fn test_parse_malformed_creation_date() {
        let json = r#"{
            "entries": [ { "creationDate": "yesterday-ish" } ]
        }"#;

        match parse_json(json).unwrap_err() {
            ParseError::InvalidTimestamp { index, value, .. } => {
                assert_eq!(index, 0);
                assert_eq!(value, "yesterday-ish");
            }
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sample_export() {
        // Parse the sample export shipped with the repo
        let content = include_str!("../../assets/sample.json");
        let journal = parse_json(content).expect("Failed to parse sample.json");

        assert_eq!(journal.metadata.version.as_deref(), Some("1.0"));
        assert_eq!(journal.len(), 10);

        // One entry is untagged, so "none" is a real tag here
        let tags = journal.tags();
        assert!(tags.contains(&"work".to_string()));
        assert!(tags.contains(&"dreams".to_string()));
        assert!(tags.contains(&UNTAGGED.to_string()));

        // Entries keep file order, earliest() finds the true minimum
        let earliest = journal.earliest().unwrap();
        assert!(
            journal
                .entries
                .iter()
                .all(|e| e.timestamp >= earliest.timestamp)
        );
    }
}
