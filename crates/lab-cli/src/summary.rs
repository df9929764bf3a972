use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lab_model::{CompositeMetric, Flag, MetricKind};
use serde::Serialize;

use crate::types::{EvaluationReport, MeasurementRow, ResolveOutcome};

/// Pretty-printed JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_evaluation(report: &EvaluationReport) {
    println!("Input: {}", report.input.display());
    println!("Measurements: {}", report.measurement_count);
    match &report.demographics {
        Some(demographics) => println!(
            "Demographics: sex={}, age={}",
            demographics.sex,
            demographics
                .known_age()
                .map_or_else(|| "-".to_string(), |age| age.to_string())
        ),
        None => println!("Demographics: -"),
    }
    if report.metrics.is_empty() {
        println!("No composite metrics could be computed.");
        return;
    }
    println!("{}", metrics_table(&report.metrics));
}

/// Table of metric cards, one row per metric.
pub fn metrics_table(metrics: &[CompositeMetric]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Metric"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Grade"),
        header_cell("Gauge"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for metric in metrics {
        let value_cell = if metric.is_placeholder() {
            dim_cell(&metric.display_value)
        } else {
            Cell::new(&metric.display_value).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            Cell::new(metric.category).fg(Color::Blue),
            Cell::new(&metric.label),
            value_cell,
            text_or_dash(&metric.unit),
            Cell::new(&metric.grade),
            gauge_cell(metric.percent),
        ]);
    }
    table
}

pub fn print_measurements(rows: &[MeasurementRow]) {
    if rows.is_empty() {
        println!("No measurements in input.");
        return;
    }
    let mut table = Table::new();
    table.set_header(measurement_header());
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(measurement_cells(row));
    }
    println!("{table}");
}

pub fn print_resolution(outcome: &ResolveOutcome) {
    println!(
        "Aliases: {} (prefer {})",
        outcome.aliases.join(", "),
        outcome.preference
    );
    if let Some(row) = &outcome.found {
        let mut table = Table::new();
        table.set_header(measurement_header());
        apply_table_style(&mut table);
        table.add_row(measurement_cells(row));
        println!("{table}");
        return;
    }

    eprintln!("Unresolved.");
    if outcome.suggestions.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Nearest key"), header_cell("Similarity")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for suggestion in &outcome.suggestions {
        table.add_row(vec![
            Cell::new(&suggestion.key),
            Cell::new(format!("{:.2}", suggestion.similarity)),
        ]);
    }
    println!("{table}");
}

pub fn print_metric_catalog(kinds: &[MetricKind]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Category"),
        header_cell("Requires"),
    ]);
    apply_table_style(&mut table);
    for kind in kinds {
        table.add_row(vec![
            Cell::new(kind.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(kind.category()),
            Cell::new(kind.requirements()),
        ]);
    }
    println!("{table}");
}

fn measurement_header() -> Vec<Cell> {
    [
        "#", "Name", "Key", "Value", "Unit", "Unit tag", "Reference", "WBC", "Flag",
    ]
    .into_iter()
    .map(header_cell)
    .collect()
}

fn measurement_cells(row: &MeasurementRow) -> Vec<Cell> {
    vec![
        Cell::new(row.position),
        Cell::new(&row.name),
        Cell::new(&row.key),
        match row.value {
            Some(value) => Cell::new(value),
            None => dim_cell(&row.raw_value),
        },
        text_or_dash(row.unit.as_deref().unwrap_or_default()),
        dim_cell(row.unit_tag),
        text_or_dash(row.reference.as_deref().unwrap_or_default()),
        row.variant.map_or_else(|| dim_cell("-"), Cell::new),
        flag_cell(row.flag, row.flag_derived),
    ]
}

fn flag_cell(flag: Flag, derived: bool) -> Cell {
    let label = if derived {
        format!("{flag}*")
    } else {
        flag.to_string()
    };
    if flag.is_abnormal() {
        Cell::new(label).fg(Color::Red).add_attribute(Attribute::Bold)
    } else if flag == Flag::Normal {
        Cell::new(label).fg(Color::Green)
    } else {
        dim_cell(label)
    }
}

fn gauge_cell(percent: u8) -> Cell {
    let color = match percent {
        0..=33 => Color::Green,
        34..=66 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(format!("{percent}%")).fg(color)
}

fn text_or_dash(text: &str) -> Cell {
    if text.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(text)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
