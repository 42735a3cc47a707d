//! Result Normalizer/Renderer.
//!
//! [`render`] turns raw price records into a [`DisplayStructure`]: records with
//! no live listing are dropped, ids are resolved to names and every cell is
//! formatted. [`OutputArea`] models the single output region and the `html` and
//! `text` modules project it onto a concrete surface.

pub mod cards;
pub mod columns;
pub mod format;
pub mod html;
pub mod output;
pub mod table;
pub mod text;

pub use cards::render_cards;
pub use columns::{column_order, PREFERRED_COLUMNS};
pub use format::{format_cell, FormatContext};
pub use output::{OutputArea, OutputState, LOADING_NOTICE, NO_DATA_NOTICE};
pub use table::render_table;

use crate::config::DisplayLocale;
use crate::models::{DisplayStructure, PriceRecord};
use crate::reference::References;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Table,
    /// Item -> quality -> city cards.
    Cards,
}

/// Render `records` for display. Yields [`DisplayStructure::NoData`] when no
/// record has a non-zero `sell_price_min` or `buy_price_min`.
pub fn render(
    records: &[PriceRecord],
    refs: &References,
    locale: &DisplayLocale,
    mode: RenderMode,
) -> DisplayStructure {
    let live: Vec<PriceRecord> = records.iter().filter(|r| r.has_listing()).cloned().collect();
    if live.is_empty() {
        log::debug!("No live listings among {} record(s)", records.len());
        return DisplayStructure::NoData;
    }
    let ctx = FormatContext { refs, locale };
    match mode {
        RenderMode::Table => DisplayStructure::Table(render_table(&live, &ctx)),
        RenderMode::Cards => DisplayStructure::Cards(render_cards(&live, &ctx)),
    }
}
