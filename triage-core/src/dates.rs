//! Lenient due-date normalization.
//!
//! Batches arrive with dates in whatever shape the submitter had on hand:
//! ISO strings, US-style `3/5/26`, `"Mar 5, 2026"`. Parsing is best-effort
//! and absent/unparseable input falls back to `today` — a silent default,
//! not an error.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// `D/M/Y`-ish numeric dates with `/`, `-` or `.` separators.
fn numeric_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,4})[/\-.](\d{1,2})[/\-.](\d{1,4})$").expect("static regex")
    })
}

/// Textual-month formats tried in order.
const TEXTUAL_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Normalize a raw due-date value to a calendar date.
///
/// Absent, empty, or unparseable input returns `today`.
pub fn normalize_due_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(raw) = raw else { return today };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return today;
    }
    parse_date(trimmed).unwrap_or(today)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    // ISO date, with or without a trailing time component.
    let date_part = s.split(['T', ' ']).next().unwrap_or(s);
    if let Ok(d) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(d);
    }

    if let Some(caps) = numeric_date_re().captures(date_part) {
        let a: i32 = caps[1].parse().ok()?;
        let b: u32 = caps[2].parse().ok()?;
        let c: i32 = caps[3].parse().ok()?;
        return numeric_ymd(a, b, c);
    }

    for fmt in TEXTUAL_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}

/// Infer field order for a numeric triple.
///
/// A leading 4-digit (or >31) field is a year (`Y-M-D`); otherwise the
/// triple reads month/day/year. Two-digit years land in the 2000s.
fn numeric_ymd(a: i32, b: u32, c: i32) -> Option<NaiveDate> {
    if a > 31 {
        return NaiveDate::from_ymd_opt(a, b, c as u32);
    }
    let year = if c < 100 { 2000 + c } else { c };
    NaiveDate::from_ymd_opt(year, a as u32, b)
}
