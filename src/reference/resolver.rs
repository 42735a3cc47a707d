//! Ordered fallback strategies for resolving ids and display names from raw
//! reference records.
//!
//! Each chain is a plain slice evaluated front to back; the first strategy that
//! produces a non-empty value wins.

use serde_json::Value;

use crate::config::{DisplayLocale, LOCALIZATION_PREFIX, NAME_PLACEHOLDER};

pub const LOCALIZATION_FIELD: &str = "LocalizationNameVariable";
pub const UNIQUE_NAME_FIELD: &str = "UniqueName";
pub const LOCALIZED_NAMES_FIELD: &str = "LocalizedNames";

// ---------------------------------------------------------------------------
// Id resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdStrategy {
    /// `LocalizationNameVariable` with the given prefix stripped.
    LocalizationKey(&'static str),
    /// `UniqueName` as-is.
    UniqueName,
}

impl IdStrategy {
    pub fn resolve(&self, record: &Value) -> Option<String> {
        match self {
            IdStrategy::LocalizationKey(prefix) => record
                .get(LOCALIZATION_FIELD)
                .and_then(|v| v.as_str())
                .and_then(|key| key.strip_prefix(*prefix))
                .and_then(non_empty),
            IdStrategy::UniqueName => record
                .get(UNIQUE_NAME_FIELD)
                .and_then(|v| v.as_str())
                .and_then(non_empty),
        }
    }
}

/// Id chain for item records.
pub const ITEM_ID_STRATEGIES: &[IdStrategy] = &[
    IdStrategy::LocalizationKey(LOCALIZATION_PREFIX),
    IdStrategy::UniqueName,
];

/// Id chain for world/location records.
pub const LOCATION_ID_STRATEGIES: &[IdStrategy] = &[IdStrategy::UniqueName];

pub fn resolve_id(record: &Value, strategies: &[IdStrategy]) -> Option<String> {
    strategies.iter().find_map(|s| s.resolve(record))
}

// ---------------------------------------------------------------------------
// Display-name resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameStrategy {
    /// `LocalizedNames[<locale>]`.
    Locale(String),
    /// The resolved id.
    Id,
    /// A fixed literal; always succeeds unless empty.
    Placeholder(String),
}

impl NameStrategy {
    pub fn resolve(&self, record: &Value, id: &str) -> Option<String> {
        match self {
            NameStrategy::Locale(locale) => record
                .get(LOCALIZED_NAMES_FIELD)
                .and_then(|names| names.get(locale.as_str()))
                .and_then(|v| v.as_str())
                .and_then(non_empty),
            NameStrategy::Id => non_empty(id),
            NameStrategy::Placeholder(text) => non_empty(text),
        }
    }
}

/// Name chain for `locale`: configured locale, fallback locale, id, placeholder.
pub fn name_strategies(locale: &DisplayLocale) -> Vec<NameStrategy> {
    vec![
        NameStrategy::Locale(locale.name_locale.clone()),
        NameStrategy::Locale(locale.fallback_locale.clone()),
        NameStrategy::Id,
        NameStrategy::Placeholder(NAME_PLACEHOLDER.to_string()),
    ]
}

pub fn resolve_name(record: &Value, id: &str, strategies: &[NameStrategy]) -> String {
    strategies
        .iter()
        .find_map(|s| s.resolve(record, id))
        .unwrap_or_default()
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
