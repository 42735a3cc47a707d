//! Live smoke test against the public West server.
//!
//! Run with:
//! ```sh
//! cargo test --test smoke_test -- --ignored --nocapture
//! ```

mod common;

use albion_market::models::DisplayStructure;
use albion_market::queries::build_query;
use albion_market::{MarketSdk, RenderMode, Server};

#[test]
#[ignore]
fn live_bag_prices() {
    let sdk = MarketSdk::builder().server(Server::West).build();
    let refs = common::sample_references();
    let request = build_query(&["T4_BAG", "T5_BAG"], &["Martlock", "Lymhurst"], None).unwrap();

    let records = sdk.prices(&refs).fetch(&request).unwrap();
    eprintln!("fetched {} records", records.len());
    assert!(records.iter().all(|r| r.item_id().is_some()));

    match albion_market::render::render(&records, &refs, sdk.locale(), RenderMode::Table) {
        DisplayStructure::Table(table) => assert_eq!(table.columns[0].key, "item_id"),
        DisplayStructure::NoData => eprintln!("no live listings right now"),
        DisplayStructure::Cards(_) => unreachable!(),
    }
}
