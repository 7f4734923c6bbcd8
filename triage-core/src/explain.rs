//! Human-readable score breakdowns.
//!
//! Each sub-score maps back to a fixed phrase; the phrases must track the
//! bucket boundaries in `score` or explanations drift from the numbers.

/// Render the four sub-scores as a `" | "`-joined breakdown.
pub fn explanation(urgency: i64, importance: i64, effort: i64, dependencies: i64) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4);

    parts.push(match urgency {
        100 => "OVERDUE: Maximum urgency",
        50 => "Due within 3 business days: High urgency",
        25 => "Due within 7 business days: Medium urgency",
        10 => "Due within 14 business days: Low urgency",
        _ => "Due 15+ business days out: No urgency",
    });

    parts.push(if importance >= 80 {
        "Very important (8-10/10)"
    } else if importance >= 50 {
        "Moderately important (5-7/10)"
    } else {
        "Less important (1-4/10)"
    });

    parts.push(match effort {
        15 => "Quick task (under 1.5 hrs)",
        5 => "Medium length (1.5-3 hrs)",
        _ => "Long task (3+ hrs)",
    });

    let blocks;
    if dependencies > 0 {
        blocks = format!("Blocks other tasks (+{dependencies})");
        parts.push(&blocks);
    }

    parts.join(" | ")
}
