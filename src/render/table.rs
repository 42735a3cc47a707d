use crate::models::{Column, DisplayRow, DisplayTable, PriceRecord};

use super::columns::{column_order, header};
use super::format::{format_cell, FormatContext};

/// One row per record, columns per [`column_order`]. Missing fields render empty.
pub fn render_table(records: &[PriceRecord], ctx: &FormatContext<'_>) -> DisplayTable {
    let keys = column_order(records);

    let rows = records
        .iter()
        .map(|record| DisplayRow {
            cells: keys
                .iter()
                .map(|key| format_cell(key, record.get(key), ctx))
                .collect(),
        })
        .collect();

    let columns = keys
        .into_iter()
        .map(|key| Column {
            header: header(&key),
            key,
        })
        .collect();

    DisplayTable { columns, rows }
}
