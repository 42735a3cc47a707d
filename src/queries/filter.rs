use crate::models::NameMapping;

/// Entries of `mapping` whose display name contains `term`, ignoring case.
///
/// Ids are never searched. The term is matched as typed, surrounding spaces
/// included; an empty or all-whitespace term returns the whole mapping.
pub fn filter(mapping: &NameMapping, term: &str) -> NameMapping {
    if term.trim().is_empty() {
        return mapping.clone();
    }
    let needle = term.to_lowercase();
    mapping
        .iter()
        .filter(|(_, name)| name.to_lowercase().contains(&needle))
        .map(|(id, name)| (id.clone(), name.clone()))
        .collect()
}
