//! Terminal summary tables for event and run statistics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use coal_analyze::EventStats;

use crate::commands::{EventReport, StatsReport};

pub fn print_event_summary(report: &EventReport) {
    println!("Event: {} (index {})", report.event_id, report.event_index);
    let mut table = counts_table(&report.stats);
    apply_table_style(&mut table);
    println!("{table}");
    println!("Figures:");
    for path in &report.figures {
        println!("- {}", path.display());
    }
}

pub fn print_stats_summary(report: &StatsReport) {
    println!("Input: {}", report.input.display());
    let totals = report.totals;
    let mut table = counts_table(&totals.as_event_stats());
    apply_table_style(&mut table);
    println!("{table}");

    let mut events = Table::new();
    events.set_header(vec![header_cell("Events"), header_cell("Count")]);
    apply_table_style(&mut events);
    events.add_row(vec![Cell::new("Processed"), Cell::new(totals.events_processed)]);
    events.add_row(vec![Cell::new("Skipped"), failure_cell(totals.events_failed)]);
    println!("{events}");
    if totals.events_failed > 0 {
        eprintln!("{} event(s) could not be decoded and were skipped", totals.events_failed);
    }
}

fn counts_table(stats: &EventStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Quantity"), header_cell("Value")]);
    table.add_row(vec![Cell::new("Quarks"), Cell::new(stats.quarks)]);
    table.add_row(vec![Cell::new("Antiquarks"), Cell::new(stats.antiquarks)]);
    table.add_row(vec![
        Cell::new("Net baryon number (partons)"),
        Cell::new(format!("{:.3}", stats.net_baryon_before())),
    ]);
    table.add_row(vec![Cell::new("Mesons"), Cell::new(stats.mesons)]);
    table.add_row(vec![Cell::new("Baryons"), Cell::new(stats.baryons)]);
    table.add_row(vec![Cell::new("Antibaryons"), Cell::new(stats.antibaryons)]);
    table.add_row(vec![
        Cell::new("Net baryon number (hadrons)"),
        Cell::new(stats.net_baryon_after()),
    ]);
    table.add_row(vec![
        Cell::new("(B+AntiB)/M"),
        Cell::new(format!("{:.4}", stats.baryon_to_meson())),
    ]);
    table.add_row(vec![
        Cell::new("B/AntiB"),
        Cell::new(format!("{:.4}", stats.baryon_to_antibaryon())),
    ]);
    table.add_row(vec![
        Cell::new("Constituent references"),
        Cell::new(stats.constituent_refs),
    ]);
    table.add_row(vec![
        Cell::new("Unresolved references"),
        failure_cell(stats.missing_constituent_refs),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn failure_cell(count: u64) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
