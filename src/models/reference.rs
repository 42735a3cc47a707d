use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id to display-name lookup, ordered by id.
pub type NameMapping = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// ReferenceItem — An item resolved from the items document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceItem {
    pub id: String,
    pub display_name: String,
}

// ---------------------------------------------------------------------------
// ReferenceLocation — A market hub resolved from the world document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLocation {
    pub id: String,
    pub display_name: String,
}
