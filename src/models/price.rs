use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ---------------------------------------------------------------------------
// Field names of the price API payload
// ---------------------------------------------------------------------------

pub const ITEM_ID: &str = "item_id";
pub const CITY: &str = "city";
pub const QUALITY: &str = "quality";
pub const SELL_PRICE_MIN: &str = "sell_price_min";
pub const SELL_PRICE_MIN_DATE: &str = "sell_price_min_date";
pub const SELL_PRICE_MAX: &str = "sell_price_max";
pub const BUY_PRICE_MIN: &str = "buy_price_min";
pub const BUY_PRICE_MAX: &str = "buy_price_max";
pub const BUY_PRICE_MAX_DATE: &str = "buy_price_max_date";
pub const TIMESTAMP: &str = "timestamp";

// ---------------------------------------------------------------------------
// Quality — Item condition tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Quality {
    Normal = 1,
    Good = 2,
    Exceptional = 3,
    Excellent = 4,
    Masterpiece = 5,
}

impl Quality {
    /// Every quality, in tier order.
    pub const ALL: [Quality; 5] = [
        Quality::Normal,
        Quality::Good,
        Quality::Exceptional,
        Quality::Excellent,
        Quality::Masterpiece,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Quality::Normal),
            2 => Some(Quality::Good),
            3 => Some(Quality::Exceptional),
            4 => Some(Quality::Excellent),
            5 => Some(Quality::Masterpiece),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// English label; rendered tables use [`DisplayLocale::quality_label`](crate::DisplayLocale::quality_label).
    pub fn label(self) -> &'static str {
        match self {
            Quality::Normal => "Normal",
            Quality::Good => "Good",
            Quality::Exceptional => "Exceptional",
            Quality::Excellent => "Excellent",
            Quality::Masterpiece => "Masterpiece",
        }
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> u8 {
        q.code()
    }
}

impl TryFrom<u8> for Quality {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Quality::from_code(code as i64).ok_or_else(|| format!("quality {} is not in 1..=5", code))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PriceRecord — One item/city/quality entry returned by the price API
// ---------------------------------------------------------------------------

/// Open-shaped price record; no field is guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceRecord {
    pub fields: Map<String, Value>,
}

impl PriceRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn item_id(&self) -> Option<&str> {
        self.get(ITEM_ID).and_then(|v| v.as_str())
    }

    pub fn city(&self) -> Option<&str> {
        self.get(CITY).and_then(|v| v.as_str())
    }

    /// Raw quality code, accepting numbers and numeric strings.
    pub fn quality_code(&self) -> Option<i64> {
        match self.get(QUALITY)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Numeric value of a price field; absent or non-numeric reads as `None`.
    pub fn price(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// `false` when both `sell_price_min` and `buy_price_min` are zero or absent.
    pub fn has_listing(&self) -> bool {
        let live = |key: &str| self.price(key).map(|p| p != 0.0).unwrap_or(false);
        live(SELL_PRICE_MIN) || live(BUY_PRICE_MIN)
    }
}

impl From<Map<String, Value>> for PriceRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
