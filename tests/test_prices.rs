//! Price queries end to end against a local stand-in for the price API.

mod common;

use albion_market::models::DisplayStructure;
use albion_market::queries::build_query;
use albion_market::queries::prices::parse_records;
use albion_market::render::OutputState;
use albion_market::{MarketError, MarketSdk, OutputArea, RenderMode};
use serde_json::json;

fn load(sdk: &MarketSdk, tmp: &tempfile::TempDir) -> albion_market::References {
    let items = common::write_doc(
        tmp.path(),
        "items.json",
        &json!([{ "UniqueName": "T4_BAG", "LocalizedNames": { "ES-ES": "Bolsa T4" } }]),
    );
    let world = common::write_doc(tmp.path(), "world.json", &common::sample_world());
    let mut output = OutputArea::new();
    let refs = sdk.load_references(&items, &world, &mut output);
    assert_eq!(output.state(), &OutputState::Empty);
    refs
}

#[test]
fn bag_in_martlock_end_to_end() {
    let body = json!([{
        "item_id": "T4_BAG", "city": "Martlock", "quality": 1,
        "sell_price_min": 1500, "buy_price_min": 1000,
        "sell_price_max": 1600, "buy_price_max": 1100
    }])
    .to_string();
    let (base, server) = common::serve_once("200 OK", &body);
    let sdk = MarketSdk::builder()
        .base_url(base)
        .locale(common::utc_locale())
        .build();
    let tmp = tempfile::tempdir().unwrap();
    let refs = load(&sdk, &tmp);

    let request = build_query(&["T4_BAG"], &["Martlock"], Some(&[1u8][..])).unwrap();
    let display = sdk.prices(&refs).render(&request, RenderMode::Table).unwrap();

    let request_line = server.join().unwrap();
    assert!(request_line.starts_with(
        "GET /api/v2/stats/prices/T4_BAG.json?locations=Martlock&qualities=1 "
    ));

    let DisplayStructure::Table(table) = display else {
        panic!("expected a table");
    };
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.cell(0, "item_id"), Some("Bolsa T4"));
    assert_eq!(table.cell(0, "city"), Some("Martlock"));
    assert_eq!(table.cell(0, "quality"), Some("Normal"));
    assert_eq!(table.cell(0, "sell_price_min"), Some("1,500"));
    assert_eq!(table.cell(0, "sell_price_max"), Some("1,600"));
    assert_eq!(table.cell(0, "buy_price_min"), Some("1,000"));
    assert_eq!(table.cell(0, "buy_price_max"), Some("1,100"));
}

#[test]
fn all_zero_response_shows_no_data() {
    let body = json!([{
        "item_id": "T4_BAG", "city": "Martlock", "quality": 1,
        "sell_price_min": 0, "buy_price_min": 0
    }])
    .to_string();
    let (base, server) = common::serve_once("200 OK", &body);
    let sdk = MarketSdk::builder().base_url(base).build();
    let tmp = tempfile::tempdir().unwrap();
    let refs = load(&sdk, &tmp);

    let request = build_query(&["T4_BAG"], &["Martlock"], None).unwrap();
    let mut output = OutputArea::new();
    sdk.prices(&refs).show(&request, RenderMode::Cards, &mut output);
    server.join().unwrap();

    assert_eq!(output.state(), &OutputState::NoData);
}

#[test]
fn error_status_is_surfaced_with_status_text() {
    let (base, server) = common::serve_once("503 Service Unavailable", "{}");
    let sdk = MarketSdk::builder().base_url(base).build();
    let refs = albion_market::References::default();

    let request = build_query(&["T4_BAG"], &["Martlock"], None).unwrap();
    let err = sdk.prices(&refs).fetch(&request).unwrap_err();
    server.join().unwrap();

    match err {
        MarketError::HttpStatus { status, reason, .. } => {
            assert_eq!(status, 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_query_replaces_loading_notice() {
    let (base, server) = common::serve_once("404 Not Found", "{}");
    let sdk = MarketSdk::builder().base_url(base).build();
    let refs = albion_market::References::default();

    let request = build_query(&["T4_BAG"], &["Martlock"], None).unwrap();
    let mut output = OutputArea::new();
    sdk.prices(&refs).show(&request, RenderMode::Table, &mut output);
    server.join().unwrap();

    assert_eq!(output.messages().len(), 1);
    assert!(output.messages()[0].contains("404"));
}

#[test]
fn non_array_body_is_malformed() {
    let err = parse_records(json!({ "error": "bad" })).unwrap_err();
    assert!(matches!(err, MarketError::MalformedDocument(_)));
}

#[test]
fn non_object_entries_are_skipped() {
    let records = parse_records(json!([1, { "item_id": "T4_BAG" }, null])).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].item_id(), Some("T4_BAG"));
}
