use crate::models::{AggregateCount, ChartSlice, RankingRow};

pub const UNKNOWN_LABEL: &str = "Unknown";

const PALETTE: [&str; 20] = [
    "#2563EB", "#EA580C", "#059669", "#DB2777", "#7C3AED", "#FACC15", "#0891B2", "#DC2626",
    "#84CC16", "#6366F1", "#FB923C", "#10B981", "#EC4899", "#8B5CF6", "#3B82F6", "#EAB308",
    "#06B6D4", "#EF4444", "#A3E635", "#4F46E5",
];

pub fn display_label(label: &str) -> &str {
    if label.is_empty() { UNKNOWN_LABEL } else { label }
}

/// Ranking rows with bar widths relative to the top entry.
pub fn ranking_rows(counts: &[AggregateCount]) -> Vec<RankingRow> {
    let max = counts.iter().map(|entry| entry.count).max().unwrap_or(0);
    counts
        .iter()
        .enumerate()
        .map(|(index, entry)| RankingRow {
            rank: index + 1,
            label: display_label(&entry.label).to_string(),
            count: entry.count,
            bar_percent: percent(entry.count, max),
        })
        .collect()
}

pub fn chart_slices(counts: &[AggregateCount]) -> Vec<ChartSlice> {
    let total = total(counts);
    counts
        .iter()
        .enumerate()
        .map(|(index, entry)| ChartSlice {
            label: display_label(&entry.label).to_string(),
            value: entry.count,
            percentage: percent(entry.count, total),
            color: PALETTE[index % PALETTE.len()].to_string(),
        })
        .collect()
}

pub fn total(counts: &[AggregateCount]) -> u64 {
    counts.iter().map(|entry| entry.count).sum()
}

fn percent(value: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        value as f64 / whole as f64 * 100.0
    }
}

impl ChartSlice {
    /// Tooltip text such as `Mint: 3 sessions (42.9%)`.
    pub fn tooltip(&self, unit: &str) -> String {
        format!(
            "{}: {}{} ({:.1}%)",
            self.label, self.value, unit, self.percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, u64)]) -> Vec<AggregateCount> {
        entries
            .iter()
            .map(|(label, count)| AggregateCount {
                label: label.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn ranking_rows_scale_against_the_leader() {
        let rows = ranking_rows(&counts(&[("Mint", 4), ("", 2), ("Grape", 1)]));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].bar_percent, 100.0);
        assert_eq!(rows[1].label, UNKNOWN_LABEL);
        assert_eq!(rows[1].bar_percent, 50.0);
        assert_eq!(rows[2].rank, 3);
        assert_eq!(rows[2].bar_percent, 25.0);
    }

    #[test]
    fn chart_slices_share_the_total() {
        let slices = chart_slices(&counts(&[("Mint", 3), ("Grape", 1)]));
        assert_eq!(slices[0].percentage, 75.0);
        assert_eq!(slices[1].percentage, 25.0);
        assert_eq!(slices[0].color, "#2563EB");
        assert_eq!(slices[0].tooltip(" sessions"), "Mint: 3 sessions (75.0%)");
    }

    #[test]
    fn palette_cycles_past_twenty_entries() {
        let many: Vec<(String, u64)> = (0..21).map(|i| (format!("f{i}"), 1)).collect();
        let entries: Vec<(&str, u64)> = many.iter().map(|(l, c)| (l.as_str(), *c)).collect();
        let slices = chart_slices(&counts(&entries));
        assert_eq!(slices[20].color, slices[0].color);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(ranking_rows(&[]).is_empty());
        assert!(chart_slices(&[]).is_empty());
        assert_eq!(total(&[]), 0);
    }
}
