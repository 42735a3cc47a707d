use chrono::FixedOffset;
use std::path::PathBuf;

use crate::models::Quality;

/// Path of the current-prices endpoint, relative to a server base URL.
pub const PRICES_PATH: &str = "/api/v2/stats/prices/";

/// Prefix carried by the `LocalizationNameVariable` field of item records.
pub const LOCALIZATION_PREFIX: &str = "@ITEMS_";

/// Marker separating a base item id from its enchantment/quality suffix (`T4_BAG@1`).
pub const QUALITY_SEPARATOR: char = '@';

pub const DEFAULT_LOCALE: &str = "ES-ES";
pub const FALLBACK_LOCALE: &str = "EN-US";

/// Shown when neither a localized name nor an id can be resolved.
pub const NAME_PLACEHOLDER: &str = "Sin nombre";

pub const ITEMS_FILE: &str = "items.json";
pub const WORLD_FILE: &str = "world.json";

/// Principal market hubs offered by the location selector, in display order.
/// The Black Market is not a selectable hub.
pub const MARKET_HUBS: &[&str] = &[
    "Martlock",
    "Fort Sterling",
    "Thetford",
    "Lymhurst",
    "Bridgewatch",
    "Caerleon",
];

/// Public servers of the Albion Online Data Project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Server {
    #[default]
    West,
    East,
    Europe,
}

impl Server {
    pub fn base_url(self) -> &'static str {
        match self {
            Server::West => "https://west.albion-online-data.com",
            Server::East => "https://east.albion-online-data.com",
            Server::Europe => "https://europe.albion-online-data.com",
        }
    }

    /// Parse a server name (`west`, `east`, `europe`), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "west" | "americas" => Some(Server::West),
            "east" | "asia" => Some(Server::East),
            "europe" | "eu" => Some(Server::Europe),
            _ => None,
        }
    }
}

/// Directory searched for `items.json` / `world.json` when no explicit source is given.
pub fn default_reference_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("albion-market")
    } else {
        PathBuf::from(".albion-market")
    }
}

pub const ENGLISH_QUALITY_LABELS: [&str; 5] =
    ["Normal", "Good", "Exceptional", "Excellent", "Masterpiece"];
pub const SPANISH_QUALITY_LABELS: [&str; 5] =
    ["Normal", "Bueno", "Excepcional", "Excelente", "Obra maestra"];

/// Locale-dependent presentation settings.
///
/// Names are looked up under `name_locale`, then `fallback_locale`. Dates from
/// the API are UTC; they are shifted to `utc_offset`, or to the machine's local
/// zone when `None`. `quality_labels` holds the labels for codes 1 to 5.
///
/// The default keeps Spanish item names with English quality labels and
/// number/date punctuation; [`DisplayLocale::spanish`] switches all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLocale {
    pub name_locale: String,
    pub fallback_locale: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub date_format: String,
    pub utc_offset: Option<FixedOffset>,
    pub quality_labels: [String; 5],
}

impl DisplayLocale {
    /// Spanish labels and `1.234,5` number punctuation.
    pub fn spanish() -> Self {
        Self {
            thousands_separator: '.',
            decimal_separator: ',',
            quality_labels: SPANISH_QUALITY_LABELS.map(String::from),
            ..Self::default()
        }
    }

    pub fn quality_label(&self, quality: Quality) -> &str {
        &self.quality_labels[usize::from(quality.code()) - 1]
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self {
            name_locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: FALLBACK_LOCALE.to_string(),
            thousands_separator: ',',
            decimal_separator: '.',
            date_format: "%d/%m/%Y %H:%M:%S".to_string(),
            utc_offset: None,
            quality_labels: ENGLISH_QUALITY_LABELS.map(String::from),
        }
    }
}
