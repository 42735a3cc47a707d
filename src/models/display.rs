use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field name in the price payload.
    pub key: String,
    /// Human-readable header (`sell_price_min` -> `SELL PRICE MIN`).
    pub header: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// One formatted cell per table column, in column order.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTable {
    pub columns: Vec<Column>,
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    /// Cell of `row` under column `key`, if both exist.
    pub fn cell(&self, row: usize, key: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c.key == key)?;
        self.rows.get(row)?.cells.get(col).map(|s| s.as_str())
    }

    pub fn column_keys(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.key.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Card rendering — item -> quality -> city
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCard {
    pub city: String,
    pub sell_price_min: String,
    pub sell_price_max: String,
    pub buy_price_min: String,
    pub buy_price_max: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityGroup {
    pub quality: String,
    pub cards: Vec<PriceCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub name: String,
    pub qualities: Vec<QualityGroup>,
}

// ---------------------------------------------------------------------------
// DisplayStructure — Result of a render call
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DisplayStructure {
    /// No record survived filtering.
    NoData,
    Table(DisplayTable),
    Cards(Vec<ItemGroup>),
}

impl DisplayStructure {
    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayStructure::NoData)
    }
}
