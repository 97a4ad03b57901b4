//! Terminal table rendering for chart specs and KPI cards.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lumen_model::{ChartSize, Industry, KpiCard, ResolvedChartSpec};

pub fn print_recommendation(
    industry: Industry,
    template_id: &str,
    specs: &[ResolvedChartSpec],
    cards: &[KpiCard],
) {
    println!("Industry: {} ({})", industry.display_name(), industry.as_key());
    println!("Template: {template_id}");
    if specs.iter().any(|spec| !spec.resolved) {
        println!("Dataset is empty: roles are unresolved placeholders.");
    }
    println!();
    print_chart_table(specs);
    println!();
    print_kpi_table(cards);
}

fn print_chart_table(specs: &[ResolvedChartSpec]) {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("Type"),
        header_cell("Title"),
        header_cell("X"),
        header_cell("Y"),
    ]);
    for (index, spec) in specs.iter().enumerate() {
        let slot = if spec.size == ChartSize::Large {
            Cell::new(format!("{} (hero)", index + 1))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(index + 1)
        };
        table.add_row(vec![
            slot,
            Cell::new(spec.kind.label()),
            Cell::new(&spec.title),
            Cell::new(&spec.x_column),
            Cell::new(spec.y_columns.join(", ")),
        ]);
    }
    println!("{table}");
}

fn print_kpi_table(cards: &[KpiCard]) {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell("KPI"),
        header_cell("Value"),
        header_cell("Glyph"),
        header_cell("Style"),
    ]);
    for card in cards {
        table.add_row(vec![
            Cell::new(&card.title),
            Cell::new(&card.formatted_value)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new(&card.glyph),
            Cell::new(&card.style),
        ]);
    }
    println!("{table}");
}

pub fn print_template_list(industry: Industry, heroes: &[(String, String)]) {
    println!(
        "{} templates ({} variations):",
        industry.display_name(),
        heroes.len()
    );
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![header_cell("Id"), header_cell("Hero chart")]);
    for (id, hero) in heroes {
        table.add_row(vec![Cell::new(id), Cell::new(hero)]);
    }
    println!("{table}");
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}
