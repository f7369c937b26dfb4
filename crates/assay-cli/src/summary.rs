use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use assay_cli::pipeline::{NormalizeReport, NormalizedColumn, ParityReport};
use assay_normalize::{NormalizeSummary, Normalized};
use assay_parity::BandScale;

pub fn print_normalize_summary(report: &NormalizeReport) {
    println!("File: {}", report.path.display());
    println!("Column: {}", report.column.name);
    println!(
        "Censored values: {}",
        if report.options.remove_lower_than {
            "removed"
        } else {
            "parsed"
        }
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Raw"),
        header_cell("Status"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    let column = &report.column;
    for (row, (raw, outcome)) in column.raw.iter().zip(&column.outcomes).enumerate() {
        table.add_row(vec![
            Cell::new(row + 1),
            raw_cell(&raw.to_string()),
            status_cell(*outcome),
            value_cell(outcome.value()),
        ]);
    }
    println!("{table}");
    print_status_table(&[column]);
}

pub fn print_parity_summary(report: &ParityReport) {
    let plot = &report.plot;
    println!("File: {}", report.path.display());
    println!(
        "Axes: {} (x) vs {} (y)",
        plot.axis_labels.0, plot.axis_labels.1
    );
    println!(
        "Points: {} plotted, {} dropped",
        plot.points.len(),
        plot.dropped
    );
    println!(
        "Limits: [{}, {}]",
        format_number(plot.limits.lower),
        format_number(plot.limits.upper)
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Fold"),
        header_cell("Scale"),
        header_cell("Lower edge"),
        header_cell("Upper edge"),
        header_cell("Within"),
        header_cell("Coverage"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for band in &plot.bands {
        table.add_row(vec![
            Cell::new(format!("{}x", format_number(band.fold)))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(scale_label(plot.scale)),
            Cell::new(format_edge(band.lower_edge)),
            Cell::new(format_edge(band.upper_edge)),
            Cell::new(band.within),
            coverage_cell(band.coverage),
        ]);
    }
    println!("{table}");
    print_status_table(&[&report.predicted, &report.measured]);
}

fn print_status_table(columns: &[&NormalizedColumn]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Rows"),
        header_cell("Numeric"),
        header_cell("Extracted"),
        header_cell("Censored"),
        header_cell("Unparseable"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in columns {
        let NormalizeSummary {
            total,
            numeric,
            extracted,
            censored,
            unparseable,
            missing,
        } = column.summary;
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(total),
            count_cell(numeric, Color::Green),
            count_cell(extracted, Color::Green),
            count_cell(censored, Color::Yellow),
            count_cell(unparseable, Color::Red),
            count_cell(missing, Color::DarkGrey),
        ]);
    }
    println!();
    println!("Status:");
    println!("{table}");
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
        .set_width(120);
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

fn raw_cell(raw: &str) -> Cell {
    if raw.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(raw)
    }
}

fn status_cell(outcome: Normalized) -> Cell {
    let cell = Cell::new(outcome.label());
    match outcome {
        Normalized::Numeric(_) => cell,
        Normalized::Extracted(_) => cell.fg(Color::Green),
        Normalized::Censored => cell.fg(Color::Yellow),
        Normalized::Unparseable => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Normalized::Missing => cell.fg(Color::DarkGrey),
    }
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_number(value)),
        None => dim_cell("NA"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn coverage_cell(coverage: f64) -> Cell {
    let color = if coverage >= 0.8 {
        Color::Green
    } else if coverage >= 0.5 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{:.1}%", coverage * 100.0)).fg(color)
}

fn scale_label(scale: BandScale) -> &'static str {
    match scale {
        BandScale::Log => "log",
        BandScale::Linear => "linear",
    }
}

fn format_edge((at_lower, at_upper): (f64, f64)) -> String {
    format!("{} .. {}", format_number(at_lower), format_number(at_upper))
}

/// Formats a number with up to four decimals and no trailing zeros.
fn format_number(value: f64) -> String {
    let s = format!("{value:.4}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
