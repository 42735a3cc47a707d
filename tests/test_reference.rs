//! Reference loading: id/name resolution, quality variants, hub allow-list and
//! failure reporting.

mod common;

use albion_market::render::OutputState;
use albion_market::source::DocumentSource;
use albion_market::{MarketSdk, OutputArea};
use serde_json::json;
use std::path::PathBuf;

fn sdk() -> MarketSdk {
    MarketSdk::builder().locale(common::utc_locale()).build()
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[test]
fn items_resolve_ids_and_names() {
    let tmp = tempfile::tempdir().unwrap();
    let src = common::write_doc(tmp.path(), "items.json", &common::sample_items());
    let mut output = OutputArea::new();

    let items = sdk().references().load_items(&src, &mut output);

    assert_eq!(output.state(), &OutputState::Empty);
    assert_eq!(items.name("T4_BAG"), Some("Bolsa T4"));
    assert_eq!(items.name("T4_MAIN_SWORD"), Some("Adept's Broadsword"));
    assert_eq!(items.name("T5_BAG"), Some("T5_BAG"));
}

#[test]
fn records_without_id_are_dropped() {
    let refs = common::sample_references();
    assert_eq!(refs.items.len(), 4);
    assert!(!refs.items.all().values().any(|name| name == "Nameless"));
    assert!(!refs.items.all().contains_key(""));
}

#[test]
fn quality_variants_are_lookup_only() {
    let refs = common::sample_references();
    assert_eq!(refs.items.name("T4_BAG@1"), Some("Bolsa T4 .1"));
    assert!(!refs.items.selectable().contains_key("T4_BAG@1"));
    assert_eq!(
        refs.items.selectable().keys().collect::<Vec<_>>(),
        vec!["T4_BAG", "T4_MAIN_SWORD", "T5_BAG"]
    );
}

#[test]
fn duplicate_ids_keep_first_record() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = json!([
        { "UniqueName": "T4_BAG", "LocalizedNames": { "ES-ES": "Primera" } },
        { "LocalizationNameVariable": "@ITEMS_T4_BAG", "LocalizedNames": { "ES-ES": "Segunda" } }
    ]);
    let src = common::write_doc(tmp.path(), "items.json", &doc);
    let items = sdk().references().try_load_items(&src).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items.name("T4_BAG"), Some("Primera"));
}

#[test]
fn options_sorted_by_display_name() {
    let refs = common::sample_references();
    let names: Vec<String> = refs
        .items
        .options()
        .into_iter()
        .map(|o| o.display_name)
        .collect();
    assert_eq!(names, vec!["Adept's Broadsword", "Bolsa T4", "T5_BAG"]);
}

#[test]
fn display_name_falls_back_to_id() {
    let refs = common::sample_references();
    assert_eq!(refs.items.display_name("T8_UNKNOWN"), "T8_UNKNOWN");
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

#[test]
fn locations_restricted_to_hubs_in_allow_list_order() {
    let refs = common::sample_references();
    let ids: Vec<&str> = refs.locations.options().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["Martlock", "Fort Sterling", "Thetford"]);
    assert_eq!(refs.locations.name("Fort Sterling"), Some("Fort Sterling"));
    assert_eq!(refs.locations.name("Black Market"), None);
}

#[test]
fn location_mapping_filters_like_items() {
    let refs = common::sample_references();
    let mapping = refs.locations.mapping();
    assert_eq!(
        mapping.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Fort Sterling", "Martlock", "Thetford"]
    );
    let hits = albion_market::queries::filter(&mapping, "MART");
    assert_eq!(hits.keys().collect::<Vec<_>>(), vec!["Martlock"]);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn missing_document_degrades_to_empty_catalog() {
    let mut output = OutputArea::new();
    let src = DocumentSource::Path(PathBuf::from("/nonexistent/items.json"));

    let items = sdk().references().load_items(&src, &mut output);

    assert!(items.is_empty());
    assert!(!items.is_available());
    assert_eq!(output.messages().len(), 1);
    assert!(output.messages()[0].contains("items"));
}

#[test]
fn non_array_document_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let src = common::write_doc(tmp.path(), "world.json", &json!({ "cities": [] }));
    let mut output = OutputArea::new();

    let locations = sdk().references().load_locations(&src, &mut output);

    assert!(locations.is_empty());
    assert!(output.messages()[0].contains("not a JSON array"));
}

#[test]
fn independent_failures_accumulate() {
    let tmp = tempfile::tempdir().unwrap();
    let bad_items = tmp.path().join("items.json");
    std::fs::write(&bad_items, "{ not json").unwrap();
    let mut output = OutputArea::new();

    let refs = sdk().load_references(
        &DocumentSource::Path(bad_items),
        &DocumentSource::Path(tmp.path().join("missing.json")),
        &mut output,
    );

    assert!(refs.items.is_empty());
    assert!(refs.locations.is_empty());
    assert_eq!(output.messages().len(), 2);
}

#[test]
fn gzipped_documents_load() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("world.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(serde_json::to_string(&common::sample_world()).unwrap().as_bytes())
        .unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let locations = sdk()
        .references()
        .try_load_locations(&DocumentSource::Path(path))
        .unwrap();
    assert_eq!(locations.len(), 3);
}
