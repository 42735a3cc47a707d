use crate::models::price::*;
use crate::models::{ItemGroup, PriceCard, QualityGroup};

use super::format::{format_cell, format_quality, FormatContext};

/// Group records by item name, then quality, one card per city.
///
/// Items appear in first-seen order, qualities in tier order (unknown codes
/// last), cards in record order.
pub fn render_cards(records: &[PriceRecord], ctx: &FormatContext<'_>) -> Vec<ItemGroup> {
    let mut groups: Vec<(String, Vec<(QualityKey, Vec<PriceCard>)>)> = Vec::new();

    for record in records {
        let name = format_cell(ITEM_ID, record.get(ITEM_ID), ctx);
        let quality = QualityKey::of(record, ctx);

        let idx = match groups.iter().position(|(n, _)| *n == name) {
            Some(i) => i,
            None => {
                groups.push((name, Vec::new()));
                groups.len() - 1
            }
        };
        let qualities = &mut groups[idx].1;
        let qidx = match qualities.iter().position(|(q, _)| *q == quality) {
            Some(i) => i,
            None => {
                qualities.push((quality, Vec::new()));
                qualities.len() - 1
            }
        };
        qualities[qidx].1.push(card(record, ctx));
    }

    groups
        .into_iter()
        .map(|(name, mut qualities)| {
            qualities.sort_by(|a, b| a.0.cmp(&b.0));
            ItemGroup {
                name,
                qualities: qualities
                    .into_iter()
                    .map(|(q, cards)| QualityGroup {
                        quality: q.label,
                        cards,
                    })
                    .collect(),
            }
        })
        .collect()
}

fn card(record: &PriceRecord, ctx: &FormatContext<'_>) -> PriceCard {
    let cell = |key: &str| format_cell(key, record.get(key), ctx);
    PriceCard {
        city: cell(CITY),
        sell_price_min: cell(SELL_PRICE_MIN),
        sell_price_max: cell(SELL_PRICE_MAX),
        buy_price_min: cell(BUY_PRICE_MIN),
        buy_price_max: cell(BUY_PRICE_MAX),
    }
}

/// Sort key for a quality group: tier rank, then label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct QualityKey {
    rank: u8,
    label: String,
}

impl QualityKey {
    fn of(record: &PriceRecord, ctx: &FormatContext<'_>) -> Self {
        let rank = record
            .quality_code()
            .and_then(Quality::from_code)
            .map(|q| q.code())
            .unwrap_or(u8::MAX);
        let label = record
            .get(QUALITY)
            .map(|v| format_quality(v, ctx.locale))
            .unwrap_or_default();
        Self { rank, label }
    }
}
