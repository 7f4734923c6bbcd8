//! Boundary decoding: heterogeneous task JSON into typed records.
//!
//! The request layer hands us whatever the submitter sent. Field-level
//! garbage degrades to the documented defaults; entries that are not
//! objects at all are reported as skipped, not silently dropped and not
//! fatal to the batch.

use anyhow::{Result, bail};
use serde_json::Value;

use crate::task::TaskRecord;

/// One input entry that could not become a `TaskRecord`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SkippedEntry {
    /// Position in the submitted array.
    pub index: usize,
    pub reason: String,
}

/// Result of decoding a submitted batch.
#[derive(Debug, Default)]
pub struct DecodedBatch {
    pub tasks: Vec<TaskRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// Decode a submitted JSON value into task records.
///
/// The value must be an array (input-shape error otherwise, per the
/// analyze contract); elements that are not objects are skipped with a
/// reason.
pub fn decode_batch(value: &Value) -> Result<DecodedBatch> {
    let Some(items) = value.as_array() else {
        bail!("tasks must be an array");
    };

    let mut batch = DecodedBatch::default();
    for (index, item) in items.iter().enumerate() {
        match item.as_object() {
            Some(_) => batch.tasks.push(decode_record(item)),
            None => batch.skipped.push(SkippedEntry {
                index,
                reason: format!("expected an object, got {}", json_kind(item)),
            }),
        }
    }

    Ok(batch)
}

fn decode_record(item: &Value) -> TaskRecord {
    TaskRecord {
        id: coerce_string(item.get("id")),
        title: coerce_string(item.get("title")),
        due_date: coerce_string(item.get("due_date")),
        importance: coerce_int(item.get("importance")),
        estimated_hours: coerce_float(item.get("estimated_hours")),
        dependencies: coerce_string_list(item.get("dependencies")),
    }
}

/// Strings pass through; numbers render as identifiers ("3" == 3).
fn coerce_string(v: Option<&Value>) -> Option<String> {
    match v {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_int(v: Option<&Value>) -> Option<i64> {
    match v {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_float(v: Option<&Value>) -> Option<f64> {
    match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Dependency lists accept string or numeric identifiers; anything that
/// is not a list normalizes to empty.
fn coerce_string_list(v: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = v else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| coerce_string(Some(item)))
        .collect()
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
