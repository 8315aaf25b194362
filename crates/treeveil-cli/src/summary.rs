//! Run summary printed after a successful pass.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::types::{NonceOrigin, RunSummary};

pub fn print_summary(summary: &RunSummary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![header_cell("Records"), Cell::new(summary.records)]);
    table.add_row(vec![
        header_cell("Input"),
        Cell::new(summary.input_file.display()),
    ]);
    table.add_row(vec![
        header_cell("Output"),
        Cell::new(if summary.dry_run {
            "(dry run, nothing written)".to_string()
        } else {
            summary.output_file.display().to_string()
        }),
    ]);
    table.add_row(vec![
        header_cell("Format"),
        Cell::new(summary.format.as_str()),
    ]);
    table.add_row(vec![header_cell("Nonce"), Cell::new(&summary.nonce)]);
    println!("{table}");

    if summary.nonce_origin == NonceOrigin::Generated {
        println!(
            "nonce {} was generated for this run; record it, or a future run \
             of the same tree will produce unrelated digests",
            summary.nonce
        );
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
