//! Task record and result types for the triage scoring pipeline.
//!
//! Input records carry explicit optional fields; defaults are applied at
//! scoring time, never by mutating the caller's batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item as submitted for analysis.
///
/// Every field except `dependencies` is optional; the documented defaults
/// (title "Untitled", importance 5, 2.0 hours, due today) apply downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Raw due date as submitted, in any common human format.
    pub due_date: Option<String>,
    /// 1-10 rating, clamped at scoring time.
    pub importance: Option<i64>,
    pub estimated_hours: Option<f64>,
    /// Identifiers (ids or titles) of tasks this one depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due_date = Some(due.into());
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_deps(mut self, deps: &[&str]) -> Self {
        self.dependencies = deps.iter().map(|d| d.to_string()).collect();
        self
    }

    /// Identity used for dependency lookups: explicit id, else title.
    /// Records with neither get a positional key during normalization.
    pub fn declared_key(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.title.as_deref())
            .filter(|k| !k.is_empty())
    }
}

/// Per-call normalized view of a record: stable key, parsed date, the
/// original fields it was derived from. Built fresh for every analysis so
/// the caller's batch is never mutated.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedTask {
    /// Dependency-graph identity.
    pub key: String,
    /// Display id: the explicit one, else the positional index.
    pub id: String,
    pub title: String,
    pub due: NaiveDate,
    pub importance: Option<i64>,
    pub estimated_hours: Option<f64>,
    pub dependencies: Vec<String>,
}

/// One fully scored task, as returned by analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    pub id: String,
    pub title: String,
    /// Normalized due date (ISO), after lenient parsing and defaulting.
    pub due_date: NaiveDate,
    pub importance: i64,
    pub estimated_hours: f64,
    pub priority_score: i64,
    pub urgency: i64,
    pub importance_score: i64,
    pub effort: i64,
    pub dependencies_score: i64,
    pub explanation: String,
    pub priority_level: PriorityLevel,
}

/// Condensed shape for the top-N suggestions view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub reason: String,
    pub priority: PriorityLevel,
    pub due_date: NaiveDate,
    pub priority_score: i64,
}

/// Priority tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// Score >= 150 is High, >= 50 Medium, the rest Low.
    pub fn from_score(score: i64) -> Self {
        if score >= 150 {
            PriorityLevel::High
        } else if score >= 50 {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::High => "HIGH",
            PriorityLevel::Medium => "MEDIUM",
            PriorityLevel::Low => "LOW",
        }
    }
}
