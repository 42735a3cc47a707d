//! Reference Loader: builds id to display-name lookups from the static items
//! and world documents.

pub mod items;
pub mod locations;
pub mod resolver;

pub use items::ItemCatalog;
pub use locations::LocationCatalog;
pub use resolver::{IdStrategy, NameStrategy};

use crate::config::{DisplayLocale, MARKET_HUBS};
use crate::error::Result;
use crate::render::OutputArea;
use crate::source::{DocumentFetcher, DocumentSource};

// ---------------------------------------------------------------------------
// References
// ---------------------------------------------------------------------------

/// Both lookups, populated once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct References {
    pub items: ItemCatalog,
    pub locations: LocationCatalog,
}

impl References {
    pub fn new(items: ItemCatalog, locations: LocationCatalog) -> Self {
        Self { items, locations }
    }
}

// ---------------------------------------------------------------------------
// ReferenceLoader
// ---------------------------------------------------------------------------

/// Loads reference documents through a [`DocumentFetcher`].
pub struct ReferenceLoader<'a> {
    fetcher: &'a DocumentFetcher,
    locale: &'a DisplayLocale,
}

impl<'a> ReferenceLoader<'a> {
    pub fn new(fetcher: &'a DocumentFetcher, locale: &'a DisplayLocale) -> Self {
        Self { fetcher, locale }
    }

    /// Load the items document, propagating any failure.
    pub fn try_load_items(&self, source: &DocumentSource) -> Result<ItemCatalog> {
        let records = self.fetcher.load_array(source)?;
        let names = resolver::name_strategies(self.locale);
        let catalog = ItemCatalog::from_records(&records, resolver::ITEM_ID_STRATEGIES, &names);
        log::info!(
            "Loaded {} items ({} selectable) from {}",
            catalog.len(),
            catalog.selectable().len(),
            source
        );
        Ok(catalog)
    }

    /// Load the world document, propagating any failure.
    pub fn try_load_locations(&self, source: &DocumentSource) -> Result<LocationCatalog> {
        let records = self.fetcher.load_array(source)?;
        let catalog = LocationCatalog::from_records(&records, MARKET_HUBS);
        log::info!("Loaded {} market hubs from {}", catalog.len(), source);
        Ok(catalog)
    }

    /// Load the items document; on failure report to `output` and return an
    /// empty catalog.
    pub fn load_items(&self, source: &DocumentSource, output: &mut OutputArea) -> ItemCatalog {
        self.try_load_items(source).unwrap_or_else(|e| {
            report_failure("items", source, &e.to_string(), output);
            ItemCatalog::default()
        })
    }

    /// Load the world document; on failure report to `output` and return an
    /// empty catalog.
    pub fn load_locations(
        &self,
        source: &DocumentSource,
        output: &mut OutputArea,
    ) -> LocationCatalog {
        self.try_load_locations(source).unwrap_or_else(|e| {
            report_failure("locations", source, &e.to_string(), output);
            LocationCatalog::default()
        })
    }

    /// Load both documents. Failures of one do not affect the other.
    pub fn load(
        &self,
        items: &DocumentSource,
        locations: &DocumentSource,
        output: &mut OutputArea,
    ) -> References {
        References {
            items: self.load_items(items, output),
            locations: self.load_locations(locations, output),
        }
    }
}

/// Log a load failure and append it to the output area, keeping earlier messages.
pub(crate) fn report_failure(
    what: &str,
    source: &DocumentSource,
    error: &str,
    output: &mut OutputArea,
) {
    log::warn!("Failed to load {} from {}: {}", what, source, error);
    output.append_error(format!("Could not load {} from {}: {}", what, source, error));
}
