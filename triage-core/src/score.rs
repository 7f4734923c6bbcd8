//! Component scorers: urgency, importance, effort, dependencies.
//!
//! All four are pure and total — missing or out-of-range input degrades to
//! the documented default instead of erroring.

use chrono::{Datelike, Days, NaiveDate, Weekday};

const DEFAULT_IMPORTANCE: i64 = 5;
const DEFAULT_HOURS: f64 = 2.0;

/// Count Mon-Fri days strictly after `today`, up to and including `due`.
///
/// Walked day by day; due dates at or before `today` count zero.
pub fn business_days_until(today: NaiveDate, due: NaiveDate) -> i64 {
    let mut count = 0;
    let mut day = today;
    while day < due {
        let Some(next) = day.checked_add_days(Days::new(1)) else {
            break;
        };
        day = next;
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
    }
    count
}

/// Urgency 0-100 from business days until due.
///
/// Overdue or due today is maximal; beyond that the buckets are
/// <=3 -> 50, <=7 -> 25, <=14 -> 10, else 0.
pub fn urgency_score(due: NaiveDate, today: NaiveDate) -> i64 {
    if due <= today {
        return 100;
    }
    match business_days_until(today, due) {
        0..=3 => 50,
        4..=7 => 25,
        8..=14 => 10,
        _ => 0,
    }
}

/// Scale a 1-10 importance rating to 10-100. Missing rates as 5; out of
/// range clamps.
pub fn importance_score(rating: Option<i64>) -> i64 {
    rating.unwrap_or(DEFAULT_IMPORTANCE).clamp(1, 10) * 10
}

/// Effort bonus/penalty from estimated hours.
///
/// Quick tasks (<1.5h) get +15, medium (1.5-3h inclusive) +5, long -5.
/// Missing or non-finite or non-positive estimates rate as 2 hours.
pub fn effort_score(estimated_hours: Option<f64>) -> i64 {
    let hours = match estimated_hours {
        Some(h) if h.is_finite() && h > 0.0 => h,
        _ => DEFAULT_HOURS,
    };

    if hours < 1.5 {
        15
    } else if hours <= 3.0 {
        5
    } else {
        -5
    }
}

/// Dependency bonus: 20 points per task blocked, saturating at 100.
pub fn dependency_score(blocked_count: usize) -> i64 {
    ((blocked_count as i64) * 20).min(100)
}
