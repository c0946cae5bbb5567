//! Display formatting shared by every dashboard fragment.
//!
//! These reproduce the browser's en-US formatting exactly, including the
//! falsy-value shortcuts (`0`, `NaN` and missing values all render the same).

use std::fmt;

use chrono::TimeZone;

use crate::models::Timestamp;

const QUESTION_PREVIEW_UNITS: usize = 40;

/// `$` followed by the value rounded to a whole number with thousands
/// separators. Zero, `NaN` and missing values render as `$0`.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => format!("${}", group_thousands(v)),
        _ => "$0".to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    if value.is_infinite() {
        return if value < 0.0 { "-∞".into() } else { "∞".into() };
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `Mar 5, 02:07 PM` in the given zone; `-` when absent,
/// `Invalid Date` when the stored value is unreadable.
pub fn format_date<Tz>(timestamp: Option<&Timestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(ts) = timestamp.filter(|ts| !ts.is_empty()) else {
        return "-".to_string();
    };

    match ts.in_zone(tz) {
        Some(local) => local.format("%b %-d, %I:%M %p").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// First 8 characters, `...`, then the last 4.
///
/// Short inputs are not special-cased: the tail start clamps to 0, so
/// `"abc"` becomes `"abc...abc"`.
pub fn format_address(address: Option<&str>) -> String {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return "-".to_string();
    };

    let units: Vec<u16> = address.encode_utf16().collect();
    let head = utf16_slice(&units, 0, 8);
    let tail = utf16_slice(&units, units.len().saturating_sub(4), units.len());
    format!("{head}...{tail}")
}

/// First 40 characters of the market question followed by `...`, plus a
/// second `...` when the question is longer than 40 characters.
pub fn format_question(question: Option<&str>) -> String {
    let Some(question) = question.filter(|q| !q.is_empty()) else {
        return "Unknown...".to_string();
    };

    let units: Vec<u16> = question.encode_utf16().collect();
    let head = utf16_slice(&units, 0, QUESTION_PREVIEW_UNITS);
    let overflow = if units.len() > QUESTION_PREVIEW_UNITS { "..." } else { "" };
    format!("{head}...{overflow}")
}

// Lengths and offsets count UTF-16 code units, as the browser does. A
// surrogate pair cut in half becomes U+FFFD.
fn utf16_slice(units: &[u16], start: usize, end: usize) -> String {
    let end = end.min(units.len());
    String::from_utf16_lossy(&units[start.min(end)..end])
}

/// Probability as a percentage with one decimal, `-` when zero or absent.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p != 0.0 && !p.is_nan() => {
            // toFixed picks the larger candidate on ties
            let tenths = (p * 1000.0).round() / 10.0;
            format!("{tenths:.1}%")
        }
        _ => "-".to_string(),
    }
}

pub fn format_outcome(outcome: Option<&str>) -> String {
    match outcome {
        Some(o) if !o.is_empty() => o.to_string(),
        _ => "-".to_string(),
    }
}

pub fn format_count(count: Option<i64>) -> String {
    count.unwrap_or(0).to_string()
}

/// `NEW_ACCOUNT_LARGE_TRADE` → `NEW ACCOUNT LARGE TRADE`.
pub fn format_alert_type(kind: &str) -> String {
    kind.replace('_', " ")
}
