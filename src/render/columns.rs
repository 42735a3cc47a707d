use std::collections::BTreeSet;

use crate::models::price::*;

/// Canonical leading columns. Columns not listed here follow in lexicographic order.
pub const PREFERRED_COLUMNS: &[&str] = &[
    ITEM_ID,
    CITY,
    QUALITY,
    SELL_PRICE_MIN,
    SELL_PRICE_MIN_DATE,
    BUY_PRICE_MAX,
    BUY_PRICE_MAX_DATE,
    SELL_PRICE_MAX,
    BUY_PRICE_MIN,
    TIMESTAMP,
];

/// Column order for `records`: the preferred columns that occur in the data,
/// then every other key, sorted.
pub fn column_order(records: &[PriceRecord]) -> Vec<String> {
    let present: BTreeSet<&str> = records.iter().flat_map(|r| r.keys()).collect();

    let mut columns: Vec<String> = PREFERRED_COLUMNS
        .iter()
        .filter(|c| present.contains(*c))
        .map(|c| c.to_string())
        .collect();
    columns.extend(
        present
            .iter()
            .filter(|k| !PREFERRED_COLUMNS.contains(*k))
            .map(|k| k.to_string()),
    );
    columns
}

/// `sell_price_min` -> `SELL PRICE MIN`.
pub fn header(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}
