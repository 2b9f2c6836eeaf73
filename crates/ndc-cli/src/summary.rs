use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ndc_model::BatchContext;

pub fn print_summary(context: &BatchContext, dry_run: bool) {
    println!("Source: {}", context.source.display());
    if dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", context.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Succeeded"),
        header_cell("Failed"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(context.total()).add_attribute(Attribute::Bold),
        count_cell(context.succeeded(), Color::Green),
        count_cell(context.failed(), Color::Red),
        count_cell(context.warnings(), Color::Yellow),
    ]);
    println!("{table}");
    print_failure_table(context);
}

fn print_failure_table(context: &BatchContext) {
    if !context.has_failures() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Error")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for failure in context.failures() {
        table.add_row(vec![
            Cell::new(failure.row),
            Cell::new(&failure.message).fg(Color::Red),
        ]);
    }
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::Dynamic);
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
