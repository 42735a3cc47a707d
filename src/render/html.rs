//! HTML projection of the output area, for embedding in a page.

use std::fmt::Write;

use crate::models::{DisplayStructure, DisplayTable, ItemGroup};

use super::output::{OutputArea, OutputState, LOADING_NOTICE, NO_DATA_NOTICE};

pub fn to_html(output: &OutputArea) -> String {
    match output.state() {
        OutputState::Empty => String::new(),
        OutputState::Loading => notice("loading", LOADING_NOTICE),
        OutputState::NoData => notice("no-data", NO_DATA_NOTICE),
        OutputState::Messages(messages) => messages
            .iter()
            .map(|m| notice("error", m))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputState::Rendered(display) => display_html(display),
    }
}

pub fn display_html(display: &DisplayStructure) -> String {
    match display {
        DisplayStructure::NoData => notice("no-data", NO_DATA_NOTICE),
        DisplayStructure::Table(table) => table_html(table),
        DisplayStructure::Cards(groups) => cards_html(groups),
    }
}

fn notice(class: &str, text: &str) -> String {
    format!("<p class=\"{}\">{}</p>", class, escape(text))
}

fn table_html(table: &DisplayTable) -> String {
    let mut html = String::from("<table><thead><tr>");
    for column in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape(&column.header));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in &row.cells {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn cards_html(groups: &[ItemGroup]) -> String {
    let mut html = String::new();
    for group in groups {
        let _ = write!(html, "<section class=\"item\"><h2>{}</h2>", escape(&group.name));
        for quality in &group.qualities {
            let _ = write!(
                html,
                "<div class=\"quality\"><h3>{}</h3><div class=\"cards\">",
                escape(&quality.quality)
            );
            for card in &quality.cards {
                let _ = write!(
                    html,
                    "<div class=\"card\"><h4>{}</h4><dl>\
                     <dt>Sell min</dt><dd>{}</dd>\
                     <dt>Sell max</dt><dd>{}</dd>\
                     <dt>Buy min</dt><dd>{}</dd>\
                     <dt>Buy max</dt><dd>{}</dd>\
                     </dl></div>",
                    escape(&card.city),
                    escape(&card.sell_price_min),
                    escape(&card.sell_price_max),
                    escape(&card.buy_price_min),
                    escape(&card.buy_price_max),
                );
            }
            html.push_str("</div></div>");
        }
        html.push_str("</section>");
    }
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn messages_render_as_separate_notices() {
        let mut out = OutputArea::new();
        out.append_error("first");
        out.append_error("second");
        let html = to_html(&out);
        assert_eq!(html.matches("<p class=\"error\">").count(), 2);
    }
}
