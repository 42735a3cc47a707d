use serde_json::Value;

use crate::config::QUALITY_SEPARATOR;
use crate::models::{NameMapping, ReferenceItem};

use super::resolver::{resolve_id, resolve_name, IdStrategy, NameStrategy};

/// Items resolved from the items document.
///
/// `all` covers every id, including quality-suffixed variants (`T4_BAG@1`), and
/// is used for display-name resolution. `selectable` omits those variants and
/// backs the item selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    all: NameMapping,
    selectable: NameMapping,
}

impl ItemCatalog {
    /// Build a catalog from raw item records.
    ///
    /// Records without a resolvable id are skipped; when two records resolve to
    /// the same id the first one is kept.
    pub fn from_records(
        records: &[Value],
        id_strategies: &[IdStrategy],
        name_strategies: &[NameStrategy],
    ) -> Self {
        let mut catalog = Self::default();
        let mut skipped = 0usize;

        for record in records {
            let Some(id) = resolve_id(record, id_strategies) else {
                skipped += 1;
                continue;
            };
            if catalog.all.contains_key(&id) {
                continue;
            }
            let name = resolve_name(record, &id, name_strategies);
            if !id.contains(QUALITY_SEPARATOR) {
                catalog.selectable.insert(id.clone(), name.clone());
            }
            catalog.all.insert(id, name);
        }

        if skipped > 0 {
            log::debug!("Skipped {} item records without an id", skipped);
        }
        catalog
    }

    /// Display name for `id`, if known.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.all.get(id).map(|s| s.as_str())
    }

    /// Display name for `id`, or the id itself when unknown.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.name(id).unwrap_or(id)
    }

    pub fn all(&self) -> &NameMapping {
        &self.all
    }

    pub fn selectable(&self) -> &NameMapping {
        &self.selectable
    }

    /// `false` when loading failed or produced nothing; the selector should be disabled.
    pub fn is_available(&self) -> bool {
        !self.selectable.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Selectable items ordered by display name, then id.
    pub fn options(&self) -> Vec<ReferenceItem> {
        let mut options: Vec<ReferenceItem> = self
            .selectable
            .iter()
            .map(|(id, name)| ReferenceItem {
                id: id.clone(),
                display_name: name.clone(),
            })
            .collect();
        options.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        options
    }
}
