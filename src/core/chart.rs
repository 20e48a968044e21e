//! Chart data extraction.
//!
//! The renderers in `gui` only draw; everything they draw is computed here
//! from an immutable [`Journal`]. Switching chart modes re-reads the same
//! journal and never mutates it.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use super::dates;
use super::entry::Journal;

/// Which chart the central panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartMode {
    /// One point per entry: date vs. time of day
    #[default]
    DotPlot,
    /// Stacked per-tag counts of entries per hour of day
    Histogram,
}

impl ChartMode {
    /// Label shown on the mode selector tab.
    pub fn label(&self) -> &'static str {
        match self {
            ChartMode::DotPlot => "Dot Plot",
            ChartMode::Histogram => "Histogram",
        }
    }

    /// All selectable modes, in tab order.
    pub const ALL: [ChartMode; 2] = [ChartMode::DotPlot, ChartMode::Histogram];
}

/// A single dot on the dot plot.
#[derive(Clone, Debug, PartialEq)]
pub struct DotPoint {
    /// Calendar day of the entry (days from the calendar epoch)
    pub day: i32,
    /// Time of day as a fraction in `0.0..1.0`, midnight = 0
    pub frac: f64,
    /// Primary tag of the entry, used for coloring
    pub tag: String,
}

/// Extracted dot plot data with its x-axis day range.
#[derive(Clone, Debug, Default)]
pub struct DotPlotData {
    /// One point per entry, in file order
    pub points: Vec<DotPoint>,
    /// Earliest entry day, if the journal is non-empty
    pub first_day: Option<i32>,
}

/// Build dot plot data from a journal.
///
/// An empty journal yields an empty point list; the renderer still draws
/// the chart frame.
pub fn dot_points(journal: &Journal) -> DotPlotData {
    let points = journal
        .entries
        .iter()
        .map(|e| DotPoint {
            day: dates::day_number(e.timestamp),
            frac: dates::time_of_day_fraction(e.timestamp),
            tag: e.primary_tag().to_string(),
        })
        .collect::<Vec<_>>();

    let first_day = points.iter().map(|p| p.day).min();

    DotPlotData { points, first_day }
}

/// Number of hour buckets in the histogram.
pub const HOUR_BUCKETS: usize = 24;

/// Per-tag entry counts for each local hour of the day.
///
/// Tags are kept in sorted order, which is also the bar stacking order.
#[derive(Clone, Debug, Default)]
pub struct HourHistogram {
    /// (tag, counts per hour) in stacking order
    pub series: Vec<(String, [u32; HOUR_BUCKETS])>,
}

impl HourHistogram {
    /// Total entries in the given hour across all tags.
    pub fn stacked_count(&self, hour: usize) -> u32 {
        self.series.iter().map(|(_, counts)| counts[hour]).sum()
    }

    /// The tallest stacked bar, for scaling the y axis.
    pub fn max_stacked_count(&self) -> u32 {
        (0..HOUR_BUCKETS)
            .map(|h| self.stacked_count(h))
            .max()
            .unwrap_or(0)
    }
}

/// Count entries per tag per local hour of day.
///
/// Every tag the journal knows gets a series, including tags whose counts
/// are all zero, so the legend and stacking order match the dot plot.
pub fn hour_histogram(journal: &Journal) -> HourHistogram {
    if journal.is_empty() {
        return HourHistogram::default();
    }

    let mut series: Vec<(String, [u32; HOUR_BUCKETS])> = journal
        .tags()
        .into_iter()
        .map(|tag| (tag, [0u32; HOUR_BUCKETS]))
        .collect();

    for entry in &journal.entries {
        let hour = entry.timestamp.hour() as usize;
        let tag = entry.primary_tag();
        if let Some((_, counts)) = series.iter_mut().find(|(t, _)| t == tag) {
            counts[hour] += 1;
        }
    }

    HourHistogram { series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::test_support::entry;
    use crate::core::entry::ExportMetadata;

    fn journal(entries: Vec<crate::core::entry::Entry>) -> Journal {
        Journal {
            metadata: ExportMetadata::default(),
            entries,
        }
    }

    #[test]
    fn test_dot_points_empty_journal() {
        let data = dot_points(&Journal::default());
        assert!(data.points.is_empty());
        assert!(data.first_day.is_none());
    }

    #[test]
    fn test_dot_points_one_per_entry() {
        let j = journal(vec![
            entry(2024, 3, 1, 0, 0, &["work"]),
            entry(2024, 3, 1, 12, 0, &[]),
            entry(2024, 3, 2, 18, 0, &["work"]),
        ]);

        let data = dot_points(&j);
        assert_eq!(data.points.len(), 3);
        assert_eq!(data.points[0].frac, 0.0);
        assert_eq!(data.points[1].frac, 0.5);
        assert_eq!(data.points[1].tag, "none");
        assert_eq!(data.points[2].day - data.points[0].day, 1);
        assert_eq!(data.first_day, Some(data.points[0].day));
    }

    #[test]
    fn test_first_day_is_minimum_not_first() {
        let j = journal(vec![
            entry(2024, 3, 5, 9, 0, &[]),
            entry(2024, 3, 1, 9, 0, &[]),
        ]);

        let data = dot_points(&j);
        assert_eq!(data.first_day, Some(data.points[1].day));
    }

    #[test]
    fn test_hour_histogram_empty_journal() {
        let hist = hour_histogram(&Journal::default());
        assert!(hist.series.is_empty());
        assert_eq!(hist.max_stacked_count(), 0);
    }

    #[test]
    fn test_hour_histogram_counts_by_local_hour() {
        let j = journal(vec![
            entry(2024, 3, 1, 8, 15, &["work"]),
            entry(2024, 3, 2, 8, 45, &["work"]),
            entry(2024, 3, 3, 22, 5, &["dreams"]),
            entry(2024, 3, 4, 8, 0, &[]),
        ]);

        let hist = hour_histogram(&j);
        // Series in sorted tag order: dreams, none, work
        let tags: Vec<&str> = hist.series.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tags, vec!["dreams", "none", "work"]);

        assert_eq!(hist.stacked_count(8), 3);
        assert_eq!(hist.stacked_count(22), 1);
        assert_eq!(hist.stacked_count(3), 0);
        assert_eq!(hist.max_stacked_count(), 3);
    }

    #[test]
    fn test_hour_histogram_includes_zero_count_untagged_series() {
        // All entries are tagged, but the "none" series still exists so the
        // legend matches the dot plot
        let j = journal(vec![entry(2024, 3, 1, 8, 0, &["work"])]);
        let hist = hour_histogram(&j);
        let none = hist.series.iter().find(|(t, _)| t == "none").unwrap();
        assert_eq!(none.1.iter().sum::<u32>(), 0);
    }

    #[test]
    fn test_mode_switch_leaves_journal_unchanged() {
        let j = journal(vec![
            entry(2024, 3, 1, 8, 0, &["work"]),
            entry(2024, 3, 2, 9, 0, &["dreams"]),
        ]);
        let before = j.entries.clone();

        let _ = dot_points(&j);
        let _ = hour_histogram(&j);
        let _ = dot_points(&j);

        assert_eq!(j.entries, before);
    }

    #[test]
    fn test_chart_mode_labels() {
        assert_eq!(ChartMode::DotPlot.label(), "Dot Plot");
        assert_eq!(ChartMode::Histogram.label(), "Histogram");
        assert_eq!(ChartMode::ALL.len(), 2);
    }
}
