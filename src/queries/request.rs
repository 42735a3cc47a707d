use reqwest::Url;

use crate::config::PRICES_PATH;
use crate::error::{MarketError, Result};
use crate::models::Quality;

/// A validated price lookup: which items, where, and at which qualities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    pub item_ids: Vec<String>,
    pub locations: Vec<String>,
    pub qualities: Vec<Quality>,
}

/// Validate a selection and turn it into a [`PriceRequest`].
///
/// Ids and locations are trimmed and de-duplicated, keeping first-seen order.
/// `qualities` defaults to all five; given codes must be within `1..=5` and come
/// out sorted. Fails with [`MarketError::InvalidArgument`] if no item or no
/// location remains.
pub fn build_query<I, L>(items: &[I], locations: &[L], qualities: Option<&[u8]>) -> Result<PriceRequest>
where
    I: AsRef<str>,
    L: AsRef<str>,
{
    let item_ids = dedup(items);
    if item_ids.is_empty() {
        return Err(MarketError::InvalidArgument(
            "select at least one item".to_string(),
        ));
    }
    let locations = dedup(locations);
    if locations.is_empty() {
        return Err(MarketError::InvalidArgument(
            "select at least one location".to_string(),
        ));
    }

    let qualities = match qualities {
        None => Quality::ALL.to_vec(),
        Some(codes) => {
            let mut parsed = codes
                .iter()
                .map(|&c| {
                    Quality::from_code(c as i64).ok_or_else(|| {
                        MarketError::InvalidArgument(format!("quality {} is not in 1..=5", c))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            parsed.sort();
            parsed.dedup();
            if parsed.is_empty() {
                Quality::ALL.to_vec()
            } else {
                parsed
            }
        }
    };

    Ok(PriceRequest {
        item_ids,
        locations,
        qualities,
    })
}

impl PriceRequest {
    /// Endpoint URL on the server at `base_url`:
    /// `{base}/api/v2/stats/prices/{ids}.json?locations=..&qualities=..`.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let raw = format!(
            "{}{}{}.json",
            base_url.trim_end_matches('/'),
            PRICES_PATH,
            self.item_ids.join(",")
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| MarketError::InvalidArgument(format!("invalid URL {}: {}", raw, e)))?;
        let qualities: Vec<String> = self.qualities.iter().map(|q| q.code().to_string()).collect();
        url.query_pairs_mut()
            .append_pair("locations", &self.locations.join(","))
            .append_pair("qualities", &qualities.join(","));
        Ok(url)
    }
}

fn dedup<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        let v = v.as_ref().trim();
        if !v.is_empty() && !out.iter().any(|o| o == v) {
            out.push(v.to_string());
        }
    }
    out
}
