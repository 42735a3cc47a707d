//! Price lookups against the `/api/v2/stats/prices` endpoint.

use serde_json::Value;

use crate::error::{MarketError, Result};
use crate::models::{DisplayStructure, PriceRecord};
use crate::reference::References;
use crate::render::{self, OutputArea, RenderMode};
use crate::MarketSdk;

use super::request::PriceRequest;

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for live market prices, bound to loaded references.
pub struct PriceQuery<'a> {
    sdk: &'a MarketSdk,
    refs: &'a References,
}

impl<'a> PriceQuery<'a> {
    pub fn new(sdk: &'a MarketSdk, refs: &'a References) -> Self {
        Self { sdk, refs }
    }

    /// Fetch the raw price records for `request`.
    pub fn fetch(&self, request: &PriceRequest) -> Result<Vec<PriceRecord>> {
        let url = request.url(self.sdk.base_url())?;
        log::info!(
            "Requesting prices for {} item(s) in {} location(s)",
            request.item_ids.len(),
            request.locations.len()
        );
        let body = self.sdk.fetcher().fetch_json(url.as_str())?;
        let records = parse_records(body)?;
        log::debug!("Price API returned {} record(s)", records.len());
        Ok(records)
    }

    /// Fetch and render prices for `request`.
    pub fn render(&self, request: &PriceRequest, mode: RenderMode) -> Result<DisplayStructure> {
        let records = self.fetch(request)?;
        Ok(render::render(&records, self.refs, self.sdk.locale(), mode))
    }

    /// Fetch, render and publish to `output`: a loading notice first, then
    /// either the rendered result or the error.
    pub fn show(&self, request: &PriceRequest, mode: RenderMode, output: &mut OutputArea) {
        output.show_loading();
        match self.render(request, mode) {
            Ok(display) => output.show(display),
            Err(e) => {
                log::warn!("Price query failed: {}", e);
                output.show_error(format!("Error loading prices: {}", e));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Interpret a price API body. It must be an array; non-object entries are dropped.
pub fn parse_records(body: Value) -> Result<Vec<PriceRecord>> {
    match body {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(fields) => Some(PriceRecord::from(fields)),
                _ => None,
            })
            .collect()),
        _ => Err(MarketError::MalformedDocument(
            "price response is not a JSON array".to_string(),
        )),
    }
}
