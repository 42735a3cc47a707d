//! Plain-text projection of the output area, for terminals.

use std::fmt::Write;

use crate::models::{DisplayStructure, DisplayTable, ItemGroup};

use super::output::{OutputArea, OutputState, LOADING_NOTICE, NO_DATA_NOTICE};

pub fn to_text(output: &OutputArea) -> String {
    match output.state() {
        OutputState::Empty => String::new(),
        OutputState::Loading => LOADING_NOTICE.to_string(),
        OutputState::NoData => NO_DATA_NOTICE.to_string(),
        OutputState::Messages(messages) => messages
            .iter()
            .map(|m| format!("error: {}", m))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputState::Rendered(DisplayStructure::NoData) => NO_DATA_NOTICE.to_string(),
        OutputState::Rendered(DisplayStructure::Table(table)) => table_text(table),
        OutputState::Rendered(DisplayStructure::Cards(groups)) => cards_text(groups),
    }
}

fn table_text(table: &DisplayTable) -> String {
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|c| c.header.chars().count())
        .collect();
    for row in &table.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(table.columns.iter().map(|c| c.header.as_str()).collect()));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&line(row.cells.iter().map(|c| c.as_str()).collect()));
        out.push('\n');
    }
    out
}

fn cards_text(groups: &[ItemGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}", group.name);
        for quality in &group.qualities {
            let _ = writeln!(out, "  {}", quality.quality);
            for card in &quality.cards {
                let _ = writeln!(
                    out,
                    "    {}: sell {} - {} | buy {} - {}",
                    card.city,
                    card.sell_price_min,
                    card.sell_price_max,
                    card.buy_price_min,
                    card.buy_price_max
                );
            }
        }
    }
    out
}
