//! Sample export generator.
//!
//! Produces a valid Day One export with a configurable number of entries,
//! for trying the viewer without a real journal and for round-trip tests.
//! Generation is deterministic: the same configuration always produces the
//! same file.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde_json::json;
use std::path::Path;

use super::dates;

/// Tags cycled across generated entries.
const SAMPLE_TAGS: [&str; 5] = ["work", "dreams", "travel", "family", "ideas"];

/// Hour/minute patterns cycled across entries within a day.
const SAMPLE_TIMES: [(u32, u32); 6] = [
    (7, 45),
    (9, 10),
    (12, 30),
    (16, 5),
    (20, 50),
    (23, 15),
];

/// Every Nth generated entry is left untagged.
const UNTAGGED_EVERY: usize = 7;

/// First day of the generated journal.
const START_DATE: (i32, u32, u32) = (2024, 1, 1);

/// Generate a Day One export JSON string.
///
/// Produces exactly `days * entries_per_day` entries, one block of
/// `entries_per_day` entries for each consecutive day starting at a fixed
/// date, in chronological file order.
pub fn generate(days: u32, entries_per_day: u32) -> String {
    let (y, m, d) = START_DATE;
    // Constants are valid calendar values
    let start = NaiveDate::from_ymd_opt(y, m, d).expect("valid start date");

    let mut entries = Vec::new();
    let mut serial = 0usize;

    for day in 0..days {
        let date = start + chrono::Days::new(day as u64);
        for slot in 0..entries_per_day {
            let (hour, minute) = SAMPLE_TIMES[slot as usize % SAMPLE_TIMES.len()];
            let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("valid sample time");
            let utc = Utc.from_utc_datetime(&NaiveDateTime::new(date, time));

            let mut entry = json!({
                "creationDate": dates::format_day_one(utc),
                "uuid": format!("SAMPLE-{:06}", serial),
                "text": format!("Sample entry {}", serial),
                "starred": serial % 10 == 0,
            });

            if serial % UNTAGGED_EVERY != UNTAGGED_EVERY - 1 {
                let tag = SAMPLE_TAGS[serial % SAMPLE_TAGS.len()];
                entry["tags"] = json!([tag]);
            }

            entries.push(entry);
            serial += 1;
        }
    }

    let export = json!({
        "metadata": { "version": "1.0" },
        "entries": entries,
    });

    // json! output is always serializable
    serde_json::to_string_pretty(&export).expect("serialize generated export")
}

/// Generate a sample export and write it to `path`.
pub fn write_to(path: &Path, days: u32, entries_per_day: u32) -> std::io::Result<()> {
    std::fs::write(path, generate(days, entries_per_day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser;

    #[test]
    fn test_generate_round_trip_count() {
        let json = generate(10, 3);
        let journal = parser::parse_json(&json).unwrap();
        assert_eq!(journal.len(), 30);
    }

    #[test]
    fn test_generate_zero_days() {
        let journal = parser::parse_json(&generate(0, 5)).unwrap();
        assert!(journal.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(5, 2), generate(5, 2));
    }

    #[test]
    fn test_generated_entries_are_chronological() {
        let journal = parser::parse_json(&generate(4, 3)).unwrap();
        let times: Vec<_> = journal.entries.iter().map(|e| e.timestamp).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_generated_journal_has_untagged_entries() {
        let journal = parser::parse_json(&generate(10, 2)).unwrap();
        assert!(journal.entries.iter().any(|e| e.tags.is_empty()));
        assert!(journal.entries.iter().any(|e| !e.tags.is_empty()));
    }

    #[test]
    fn test_write_to_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dummy.json");

        write_to(&path, 7, 2).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let journal = parser::parse_json(&content).unwrap();
        assert_eq!(journal.len(), 14);
    }
}
