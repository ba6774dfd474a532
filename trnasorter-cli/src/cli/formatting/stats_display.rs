use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use trnasorter_core::SorterStats;

pub struct StatsTable {
    table: Table,
    has_sections: bool,
}

impl StatsTable {
    pub fn new(title: &str) -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new(title)
                .add_attribute(Attribute::Bold)
                .fg(Color::Green),
            Cell::new(""),
        ]);

        Self {
            table,
            has_sections: false,
        }
    }

    pub fn add_section(&mut self, name: &str) {
        // Blank separator row between sections
        if self.has_sections {
            self.table.add_row(vec!["", ""]);
        }

        self.table.add_row(vec![
            Cell::new(name.to_uppercase())
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new(""),
        ]);

        self.has_sections = true;
    }

    /// Count row; `indent` nests detail rows under their parent counter
    pub fn add_count(&mut self, name: &str, value: u64, percentage: Option<f64>, indent: usize) {
        let value_str = match percentage {
            Some(pct) => format!("{} ({:.1}%)", format_number(value), pct),
            None => format_number(value),
        };

        self.table.add_row(vec![
            Cell::new(format!("{}{}", "  ".repeat(indent + 1), name)),
            Cell::new(value_str).add_attribute(Attribute::Bold),
        ]);
    }

    pub fn render(&self) -> String {
        self.table.to_string()
    }
}

/// Format a number with comma separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

fn percent_of(value: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(value as f64 / total as f64 * 100.0)
    }
}

/// Table of one run's counters, percentages relative to all reads
pub fn create_sorter_stats(stats: &SorterStats) -> String {
    let total = stats.total_seqs;
    let pct = |value: u64| percent_of(value, total);
    let mut table = StatsTable::new("Sorter Statistics");

    table.add_section("Reads");
    table.add_count("Total seqs", total, None, 0);
    table.add_count("Total full-length", stats.total_full_length, pct(stats.total_full_length), 0);
    table.add_count("With trailer", stats.num_trailer, pct(stats.num_trailer), 0);

    table.add_section("Passed");
    table.add_count("Total passed", stats.total_passed, pct(stats.total_passed), 0);
    table.add_count("No divergence", stats.no_divergence, pct(stats.no_divergence), 1);
    table.add_count("T-loop divergence", stats.t_loop_divergence, pct(stats.t_loop_divergence), 1);
    for (label, value) in [
        ("Divergence at pos 0", stats.div_at_0),
        ("Divergence at pos 1", stats.div_at_1),
        ("Divergence at pos 2", stats.div_at_2),
        ("Divergence at pos 3", stats.div_at_3),
        ("Divergence at pos 8", stats.div_at_8),
    ] {
        table.add_count(label, value, pct(value), 2);
    }
    table.add_count(
        "Acceptor divergence",
        stats.acceptor_divergence,
        pct(stats.acceptor_divergence),
        1,
    );
    for (label, value) in [
        ("Divergence at pos -3", stats.div_at_neg_3),
        ("Divergence at pos -2", stats.div_at_neg_2),
        ("Divergence at pos -1", stats.div_at_neg_1),
    ] {
        table.add_count(label, value, pct(value), 2);
    }

    table.add_section("Rejected");
    table.add_count("Total failed", stats.total_rejected, pct(stats.total_rejected), 0);
    table.add_count(
        "T-loop seq rejected",
        stats.t_loop_seq_rejected,
        pct(stats.t_loop_seq_rejected),
        1,
    );
    table.add_count(
        "Acceptor seq rejected",
        stats.acceptor_seq_rejected,
        pct(stats.acceptor_seq_rejected),
        1,
    );
    table.add_count("Both rejected", stats.both_rejected, pct(stats.both_rejected), 1);
    table.add_count("Short rejected", stats.short_rejected, pct(stats.short_rejected), 1);

    table.render()
}
