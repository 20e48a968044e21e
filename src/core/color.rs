//! Tag color assignment.
//!
//! Each primary tag gets a stable color so the legend, dot plot, and
//! histogram agree with each other and across reloads of the same export.
//! Tags are assigned palette colors in sorted order; the untagged bucket
//! is always light gray.

use eframe::egui::Color32;
use std::collections::HashMap;

use super::entry::{Journal, UNTAGGED};

/// Color for entries without tags.
const UNTAGGED_COLOR: Color32 = Color32::from_rgb(160, 160, 160);

/// Palette for tag colors, cycled when there are more tags than colors.
const PALETTE: [Color32; 12] = [
    Color32::from_rgb(76, 175, 80),   // Green
    Color32::from_rgb(33, 150, 243),  // Blue
    Color32::from_rgb(244, 67, 54),   // Red
    Color32::from_rgb(255, 193, 7),   // Amber
    Color32::from_rgb(156, 39, 176),  // Purple
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep orange
    Color32::from_rgb(139, 195, 74),  // Light green
    Color32::from_rgb(63, 81, 181),   // Indigo
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 150, 136),   // Teal
    Color32::from_rgb(121, 85, 72),   // Brown
];

/// Deterministic mapping from tag names to colors.
#[derive(Clone, Debug, Default)]
pub struct TagColors {
    colors: HashMap<String, Color32>,
    /// Tags in the order the legend should list them (sorted)
    order: Vec<String>,
}

impl TagColors {
    /// Build the color mapping for a journal's tag set.
    ///
    /// Tags are taken in sorted order so the same export always produces
    /// the same mapping. The untagged bucket does not consume a palette
    /// slot.
    pub fn from_journal(journal: &Journal) -> Self {
        Self::from_tags(journal.tags())
    }

    /// Build the color mapping from an already-sorted tag list.
    pub fn from_tags(order: Vec<String>) -> Self {
        let mut colors = HashMap::new();
        let mut next = 0usize;

        for tag in &order {
            if tag == UNTAGGED {
                colors.insert(tag.clone(), UNTAGGED_COLOR);
            } else {
                colors.insert(tag.clone(), PALETTE[next % PALETTE.len()]);
                next += 1;
            }
        }

        Self { colors, order }
    }

    /// Color for a tag; unknown tags fall back to the untagged color.
    pub fn get(&self, tag: &str) -> Color32 {
        self.colors.get(tag).copied().unwrap_or(UNTAGGED_COLOR)
    }

    /// Tags in legend order with their colors.
    pub fn legend(&self) -> impl Iterator<Item = (&str, Color32)> {
        self.order.iter().map(|t| (t.as_str(), self.get(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::test_support::entry;
    use crate::core::entry::ExportMetadata;

    fn journal_with_tags(tag_sets: &[&[&str]]) -> Journal {
        Journal {
            metadata: ExportMetadata::default(),
            entries: tag_sets
                .iter()
                .enumerate()
                .map(|(i, tags)| entry(2024, 1, 1 + i as u32, 9, 0, tags))
                .collect(),
        }
    }

    #[test]
    fn test_untagged_is_gray() {
        let colors = TagColors::from_journal(&journal_with_tags(&[&[]]));
        assert_eq!(colors.get(UNTAGGED), UNTAGGED_COLOR);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let journal = journal_with_tags(&[&["work"], &["dreams"], &["travel"]]);
        let a = TagColors::from_journal(&journal);
        let b = TagColors::from_journal(&journal);

        for tag in journal.tags() {
            assert_eq!(a.get(&tag), b.get(&tag));
        }
    }

    #[test]
    fn test_mapping_ignores_entry_order() {
        let forward = journal_with_tags(&[&["work"], &["dreams"]]);
        let reversed = journal_with_tags(&[&["dreams"], &["work"]]);

        let a = TagColors::from_journal(&forward);
        let b = TagColors::from_journal(&reversed);
        assert_eq!(a.get("work"), b.get("work"));
        assert_eq!(a.get("dreams"), b.get("dreams"));
    }

    #[test]
    fn test_distinct_tags_get_distinct_colors() {
        let journal = journal_with_tags(&[&["a"], &["b"], &["c"], &["d"]]);
        let colors = TagColors::from_journal(&journal);
        assert_ne!(colors.get("a"), colors.get("b"));
        assert_ne!(colors.get("b"), colors.get("c"));
        assert_ne!(colors.get("c"), colors.get("d"));
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        let colors = TagColors::from_journal(&journal_with_tags(&[&["work"]]));
        assert_eq!(colors.get("never-seen"), UNTAGGED_COLOR);
    }

    #[test]
    fn test_legend_order_is_sorted() {
        let journal = journal_with_tags(&[&["zebra"], &["apple"], &[]]);
        let colors = TagColors::from_journal(&journal);
        let names: Vec<&str> = colors.legend().map(|(t, _)| t).collect();
        assert_eq!(names, vec!["apple", "none", "zebra"]);
    }

    #[test]
    fn test_palette_cycles_past_capacity() {
        let tags: Vec<String> = (0..20).map(|i| format!("tag{:02}", i)).collect();
        let colors = TagColors::from_tags(tags.clone());
        assert_eq!(colors.legend().count(), 20);
        // Cycle wraps: tag 12 reuses the first palette slot
        assert_eq!(colors.get(&tags[12]), colors.get(&tags[0]));
    }
}
