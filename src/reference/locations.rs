use serde_json::Value;

use crate::models::{NameMapping, ReferenceLocation};

use super::resolver::{resolve_id, LOCATION_ID_STRATEGIES};

/// Market hubs found in the world document, restricted to an allow-list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCatalog {
    hubs: Vec<ReferenceLocation>,
}

impl LocationCatalog {
    /// Keep the records whose unique name matches an `allow_list` entry.
    ///
    /// Matching ignores case and surrounding whitespace. Ids and names take the
    /// allow-list spelling, and hubs come out in allow-list order.
    pub fn from_records(records: &[Value], allow_list: &[&str]) -> Self {
        let found: Vec<String> = records
            .iter()
            .filter_map(|r| resolve_id(r, LOCATION_ID_STRATEGIES))
            .map(|name| name.to_lowercase())
            .collect();

        let hubs = allow_list
            .iter()
            .filter(|hub| found.iter().any(|f| *f == hub.to_lowercase()))
            .map(|hub| ReferenceLocation {
                id: hub.to_string(),
                display_name: hub.to_string(),
            })
            .collect();

        Self { hubs }
    }

    pub fn name(&self, id: &str) -> Option<&str> {
        self.hubs
            .iter()
            .find(|h| h.id == id)
            .map(|h| h.display_name.as_str())
    }

    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.name(id).unwrap_or(id)
    }

    pub fn mapping(&self) -> NameMapping {
        self.hubs
            .iter()
            .map(|h| (h.id.clone(), h.display_name.clone()))
            .collect()
    }

    pub fn options(&self) -> &[ReferenceLocation] {
        &self.hubs
    }

    pub fn is_available(&self) -> bool {
        !self.hubs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }
}
