use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use noshow_cli::pipeline::PipelineOutput;
use noshow_report::DashboardReport;

pub fn print_summary(output: &PipelineOutput) {
    println!("Source: {}", output.source.path.display());
    println!("SHA-256: {}", output.source.sha256);
    print_stage_table(output);
    print_headline_table(&output.report);
    print_neighbourhood_table(&output.report);
}

fn print_stage_table(output: &PipelineOutput) {
    let counts = &output.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Loaded"), Cell::new(counts.loaded)]);
    table.add_row(vec![Cell::new("Normalized"), Cell::new(counts.normalized)]);
    table.add_row(vec![
        dim_cell("  waiting_days <= 0"),
        count_cell(counts.failed_waiting_days, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("  age out of range"),
        count_cell(counts.failed_age, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Kept")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.kept).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_headline_table(report: &DashboardReport) {
    let summary = &report.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Appointments"),
        Cell::new(summary.total_appointments),
    ]);
    table.add_row(vec![Cell::new("No-shows"), Cell::new(summary.no_show_count)]);
    table.add_row(vec![
        Cell::new("No-show rate"),
        Cell::new(format!("{:.2}%", summary.no_show_rate * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Mean waiting days"),
        match summary.mean_waiting_days {
            Some(mean) => Cell::new(format!("{mean:.2}")),
            None => dim_cell("-"),
        },
    ]);
    for feature in &report.feature_prevalence.features {
        table.add_row(vec![
            dim_cell(format!("  {}", feature.feature)),
            dim_cell(format!("{:.2}%", feature.proportion * 100.0)),
        ]);
    }
    println!("{table}");
}

fn print_neighbourhood_table(report: &DashboardReport) {
    let ranking = &report.top_no_show_neighbourhoods;
    if ranking.categories.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Neighbourhood (no-shows)"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, category) in ranking.categories.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&category.label),
            Cell::new(category.count),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
