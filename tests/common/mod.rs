//! Shared test fixtures for the albion-market integration tests.
//!
//! Provides sample reference documents (written to a temp dir so they go through
//! the real loader), ready-made [`References`], and a one-shot local HTTP server
//! standing in for the price API.

#![allow(dead_code)]

use albion_market::config::MARKET_HUBS;
use albion_market::models::PriceRecord;
use albion_market::reference::resolver::{name_strategies, ITEM_ID_STRATEGIES};
use albion_market::reference::{ItemCatalog, LocationCatalog, References};
use albion_market::source::DocumentSource;
use albion_market::DisplayLocale;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

/// Locale pinned to UTC so date assertions do not depend on the host zone.
pub fn utc_locale() -> DisplayLocale {
    DisplayLocale {
        utc_offset: chrono::FixedOffset::east_opt(0),
        ..DisplayLocale::default()
    }
}

pub fn sample_items() -> Value {
    json!([
        {
            "LocalizationNameVariable": "@ITEMS_T4_BAG",
            "UniqueName": "T4_BAG",
            "LocalizedNames": { "EN-US": "Adept's Bag", "ES-ES": "Bolsa T4" }
        },
        {
            "UniqueName": "T4_BAG@1",
            "LocalizedNames": { "EN-US": "Adept's Bag (Uncommon)", "ES-ES": "Bolsa T4 .1" }
        },
        {
            "LocalizationNameVariable": "@ITEMS_T4_MAIN_SWORD",
            "LocalizedNames": { "EN-US": "Adept's Broadsword" }
        },
        {
            "UniqueName": "T5_BAG",
            "LocalizedNames": null
        },
        {
            "Index": "42",
            "LocalizedNames": { "EN-US": "Nameless" }
        },
        {
            "LocalizationNameVariable": "",
            "UniqueName": ""
        }
    ])
}

pub fn sample_world() -> Value {
    json!([
        { "Index": "0000", "UniqueName": "Thetford" },
        { "Index": "0001", "UniqueName": "Martlock" },
        { "Index": "0002", "UniqueName": "fort sterling" },
        { "Index": "0003", "UniqueName": "Black Market" },
        { "Index": "0004", "UniqueName": "Swamp Dry" },
        { "Index": "0005" }
    ])
}

/// Write `doc` as `name` under `dir` and return it as a path source.
pub fn write_doc(dir: &Path, name: &str, doc: &Value) -> DocumentSource {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(doc).unwrap()).unwrap();
    DocumentSource::Path(path)
}

/// References built straight from the sample documents.
pub fn sample_references() -> References {
    let items = match sample_items() {
        Value::Array(records) => records,
        _ => unreachable!(),
    };
    let world = match sample_world() {
        Value::Array(records) => records,
        _ => unreachable!(),
    };
    References::new(
        ItemCatalog::from_records(&items, ITEM_ID_STRATEGIES, &name_strategies(&utc_locale())),
        LocationCatalog::from_records(&world, MARKET_HUBS),
    )
}

pub fn record(value: Value) -> PriceRecord {
    serde_json::from_value(value).unwrap()
}

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the base URL (`http://127.0.0.1:<port>`) and a handle yielding the
/// request line that was received.
pub fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let status = status.to_string();
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line.trim_end().to_string()
    });

    (base, handle)
}
