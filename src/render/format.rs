//! Per-cell value formatting.
//!
//! The rule for a cell is picked from its column name: id and city columns are
//! resolved to display names, `quality` goes through the quality table, numeric
//! price/amount columns get thousands separators and date/timestamp columns are
//! re-rendered in the display locale. Nothing here fails; values that do not fit
//! a rule are shown raw.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Number, Value};
use std::fmt::{self, Write};

use crate::config::DisplayLocale;
use crate::models::price::{CITY, ITEM_ID, QUALITY};
use crate::models::Quality;
use crate::reference::References;

const AMOUNT_MARKERS: &[&str] = &["price", "amount", "silver"];
const DATE_MARKERS: &[&str] = &["date", "timestamp"];

/// What a formatter needs besides the value.
#[derive(Clone, Copy)]
pub struct FormatContext<'a> {
    pub refs: &'a References,
    pub locale: &'a DisplayLocale,
}

pub fn format_cell(column: &str, value: Option<&Value>, ctx: &FormatContext<'_>) -> String {
    let value = match value {
        None | Some(Value::Null) => return String::new(),
        Some(v) => v,
    };

    match column {
        ITEM_ID => {
            let raw = raw_string(value);
            ctx.refs.items.display_name(&raw).to_string()
        }
        CITY => {
            let raw = raw_string(value);
            ctx.refs.locations.display_name(&raw).to_string()
        }
        QUALITY => format_quality(value, ctx.locale),
        _ => {
            let lower = column.to_lowercase();
            if let Value::Number(n) = value {
                if AMOUNT_MARKERS.iter().any(|m| lower.contains(m)) {
                    return format_number(n, ctx.locale);
                }
            }
            if DATE_MARKERS.iter().any(|m| lower.contains(m)) {
                if let Value::String(s) = value {
                    return format_date(s, ctx.locale).unwrap_or_else(|| s.clone());
                }
            }
            raw_string(value)
        }
    }
}

/// Locale label for a quality code, or the raw value when it is not 1..=5.
pub fn format_quality(value: &Value, locale: &DisplayLocale) -> String {
    let code = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    code.and_then(Quality::from_code)
        .map(|q| locale.quality_label(q).to_string())
        .unwrap_or_else(|| raw_string(value))
}

/// Group the integer part in thousands; fractions keep up to two digits.
pub fn format_number(n: &Number, locale: &DisplayLocale) -> String {
    if let Some(i) = n.as_i64() {
        let sign = if i < 0 { "-" } else { "" };
        return format!("{}{}", sign, group_digits(&i.unsigned_abs().to_string(), locale.thousands_separator));
    }
    if let Some(u) = n.as_u64() {
        return group_digits(&u.to_string(), locale.thousands_separator);
    }
    let f = match n.as_f64() {
        Some(f) if f.is_finite() => f,
        _ => return n.to_string(),
    };
    let fixed = format!("{:.2}", f.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if f < 0.0 && fixed != "0.00" { "-" } else { "" };
    let grouped = group_digits(int_part, locale.thousands_separator);
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, locale.decimal_separator, frac)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Parse an API timestamp (RFC 3339, or naive ISO 8601 taken as UTC) and
/// render it in the locale. `None` if it does not parse or the locale's
/// `date_format` is not a valid strftime pattern.
pub fn format_date(raw: &str, locale: &DisplayLocale) -> Option<String> {
    let utc = parse_timestamp(raw.trim())?;
    match locale.utc_offset {
        Some(offset) => render_in(utc.with_timezone(&offset), &locale.date_format),
        None => render_in(utc.with_timezone(&Local), &locale.date_format),
    }
}

fn render_in<Tz>(dt: DateTime<Tz>, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", dt.format(pattern)).ok()?;
    Some(out)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn raw_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale() -> DisplayLocale {
        DisplayLocale {
            utc_offset: chrono::FixedOffset::east_opt(0),
            ..DisplayLocale::default()
        }
    }

    #[test]
    fn groups_thousands() {
        let l = locale();
        assert_eq!(format_number(&Number::from(0), &l), "0");
        assert_eq!(format_number(&Number::from(999), &l), "999");
        assert_eq!(format_number(&Number::from(1500), &l), "1,500");
        assert_eq!(format_number(&Number::from(1234567), &l), "1,234,567");
        assert_eq!(format_number(&Number::from(-25000), &l), "-25,000");
    }

    #[test]
    fn fractional_amounts_keep_two_digits() {
        let l = locale();
        let n = Number::from_f64(12345.5).unwrap();
        assert_eq!(format_number(&n, &l), "12,345.5");
        let n = Number::from_f64(1000.0).unwrap();
        assert_eq!(format_number(&n, &l), "1,000");
    }

    #[test]
    fn dates_in_configured_offset() {
        let mut l = locale();
        assert_eq!(
            format_date("2024-05-01T12:30:00", &l).as_deref(),
            Some("01/05/2024 12:30:00")
        );
        l.utc_offset = chrono::FixedOffset::east_opt(2 * 3600);
        assert_eq!(
            format_date("2024-05-01T12:30:00Z", &l).as_deref(),
            Some("01/05/2024 14:30:00")
        );
    }

    #[test]
    fn unparseable_date_is_none() {
        assert_eq!(format_date("yesterday", &locale()), None);
    }

    #[test]
    fn invalid_date_format_is_none() {
        let mut l = locale();
        l.date_format = "%Q".to_string();
        assert_eq!(format_date("2024-05-01T12:30:00", &l), None);
        l.utc_offset = None;
        assert_eq!(format_date("2024-05-01T12:30:00Z", &l), None);
    }

    #[test]
    fn quality_labels_follow_locale() {
        let l = DisplayLocale::spanish();
        assert_eq!(format_quality(&Value::from(2), &l), "Bueno");
        assert_eq!(format_quality(&Value::from("5"), &l), "Obra maestra");
        assert_eq!(format_quality(&Value::from(2), &locale()), "Good");
        assert_eq!(format_quality(&Value::from(9), &l), "9");
    }
}
