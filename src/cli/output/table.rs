//! Summary table for finished runs, using comfy-table.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::services::RunSummary;

/// Per-strategy success/failure table with a totals row.
pub fn format_summary_table(summary: &RunSummary) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Strategy").add_attribute(Attribute::Bold),
            Cell::new("Succeeded").add_attribute(Attribute::Bold),
            Cell::new("Failed").add_attribute(Attribute::Bold),
        ]);

    for tally in &summary.per_strategy {
        let failed = Cell::new(tally.failed).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(&tally.strategy),
            Cell::new(tally.succeeded).set_alignment(CellAlignment::Right),
            if tally.failed > 0 { failed.fg(Color::Red) } else { failed },
        ]);
    }

    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(summary.succeeded).set_alignment(CellAlignment::Right),
        Cell::new(summary.failed).set_alignment(CellAlignment::Right),
    ]);

    table.to_string()
}
