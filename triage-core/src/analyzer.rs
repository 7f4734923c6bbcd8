//! Analysis orchestrator: normalize a batch, check the dependency graph,
//! score, sort, and package results.
//!
//! Everything here is a pure function of the batch, the strategy name and
//! the reference `today`; two identical calls return identical reports.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::dates::normalize_due_date;
use crate::explain::explanation;
use crate::graph::DependencyGraph;
use crate::input::{SkippedEntry, decode_batch};
use crate::score::{dependency_score, effort_score, importance_score, urgency_score};
use crate::strategy::{Strategy, apply_weights};
use crate::task::{NormalizedTask, PriorityLevel, ScoredTask, Suggestion, TaskRecord};

/// Outcome of a full batch analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub message: String,
    /// Strategy actually applied (after unknown-name fallback).
    pub strategy: &'static str,
    pub results: Vec<ScoredTask>,
    /// Input entries that never became records (JSON boundary only).
    pub skipped: Vec<SkippedEntry>,
    pub error: Option<String>,
}

/// Outcome of the condensed top-N view.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionReport {
    pub success: bool,
    pub message: String,
    pub suggestions: Vec<Suggestion>,
    /// Input entries that never became records (JSON boundary only).
    pub skipped: Vec<SkippedEntry>,
}

/// Score and rank a batch of task records.
///
/// An empty batch succeeds with no results. A dependency cycle fails the
/// whole batch with the cycle chain in `error`; there are no partial
/// results. Otherwise every record is scored (scoring is total over typed
/// records) and results come back sorted by score descending, ties keeping
/// batch order.
pub fn analyze(tasks: &[TaskRecord], strategy: &str, today: NaiveDate) -> AnalysisReport {
    let strategy = Strategy::from_name(strategy);

    if tasks.is_empty() {
        return AnalysisReport {
            success: true,
            message: "No tasks provided".to_string(),
            strategy: strategy.name(),
            results: Vec::new(),
            skipped: Vec::new(),
            error: None,
        };
    }

    let normalized = normalize_batch(tasks, today);
    let graph = DependencyGraph::build(
        normalized
            .iter()
            .map(|t| (t.key.as_str(), t.dependencies.as_slice())),
    );

    if let Some(chain) = graph.detect_cycle() {
        return AnalysisReport {
            success: false,
            message: "Circular dependency detected".to_string(),
            strategy: strategy.name(),
            results: Vec::new(),
            skipped: Vec::new(),
            error: Some(format!("Circular dependency detected: {chain}")),
        };
    }

    let mut results: Vec<ScoredTask> = normalized
        .iter()
        .map(|task| score_task(task, &graph, strategy, today))
        .collect();

    // Stable sort: equal scores keep their submission order.
    results.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

    AnalysisReport {
        success: true,
        message: format!("Successfully analyzed {} tasks", results.len()),
        strategy: strategy.name(),
        results,
        skipped: Vec::new(),
        error: None,
    }
}

/// Top-N view over the full analysis.
///
/// Failure (a cycle) propagates with empty suggestions; success projects
/// the first `count` ranked results to the condensed shape.
pub fn top_suggestions(
    tasks: &[TaskRecord],
    strategy: &str,
    count: usize,
    today: NaiveDate,
) -> SuggestionReport {
    let analysis = analyze(tasks, strategy, today);

    if !analysis.success {
        return SuggestionReport {
            success: false,
            message: analysis.error.unwrap_or(analysis.message),
            suggestions: Vec::new(),
            skipped: Vec::new(),
        };
    }

    let suggestions: Vec<Suggestion> = analysis
        .results
        .into_iter()
        .take(count)
        .map(|t| Suggestion {
            title: t.title,
            reason: t.explanation,
            priority: t.priority_level,
            due_date: t.due_date,
            priority_score: t.priority_score,
        })
        .collect();

    SuggestionReport {
        success: true,
        message: format!("Top {} tasks for today", suggestions.len()),
        suggestions,
        skipped: Vec::new(),
    }
}

/// Analyze a raw JSON batch as submitted by a request layer.
///
/// Shape errors come back as a failed report, never a panic; entries that
/// were not objects are listed in `skipped`.
pub fn analyze_json(value: &Value, strategy: &str, today: NaiveDate) -> AnalysisReport {
    match decode_batch(value) {
        Ok(batch) => {
            let mut report = analyze(&batch.tasks, strategy, today);
            report.skipped = batch.skipped;
            report
        }
        Err(err) => AnalysisReport {
            success: false,
            message: "Invalid input".to_string(),
            strategy: Strategy::from_name(strategy).name(),
            results: Vec::new(),
            skipped: Vec::new(),
            error: Some(err.to_string()),
        },
    }
}

/// JSON-boundary counterpart of [`top_suggestions`].
///
/// Entries that were not objects are listed in `skipped`, same as on the
/// analyze path.
pub fn suggest_json(
    value: &Value,
    strategy: &str,
    count: usize,
    today: NaiveDate,
) -> SuggestionReport {
    match decode_batch(value) {
        Ok(batch) => {
            let mut report = top_suggestions(&batch.tasks, strategy, count, today);
            report.skipped = batch.skipped;
            report
        }
        Err(err) => SuggestionReport {
            success: false,
            message: err.to_string(),
            suggestions: Vec::new(),
            skipped: Vec::new(),
        },
    }
}

/// Build the per-call normalized view. Identity rule: explicit id, else
/// non-empty title, else the positional index. The caller's records are
/// never touched.
fn normalize_batch(tasks: &[TaskRecord], today: NaiveDate) -> Vec<NormalizedTask> {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let key = task
                .declared_key()
                .map(str::to_string)
                .unwrap_or_else(|| index.to_string());
            let id = task.id.clone().unwrap_or_else(|| index.to_string());
            NormalizedTask {
                key,
                id,
                title: task
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| "Untitled".to_string()),
                due: normalize_due_date(task.due_date.as_deref(), today),
                importance: task.importance,
                estimated_hours: task.estimated_hours,
                dependencies: task.dependencies.clone(),
            }
        })
        .collect()
}

fn score_task(
    task: &NormalizedTask,
    graph: &DependencyGraph,
    strategy: Strategy,
    today: NaiveDate,
) -> ScoredTask {
    let urgency = urgency_score(task.due, today);
    let importance = importance_score(task.importance);
    let effort = effort_score(task.estimated_hours);
    let dependencies = dependency_score(graph.blocked_count(&task.key));

    let score = apply_weights(urgency, importance, effort, dependencies, strategy.name());

    ScoredTask {
        id: task.id.clone(),
        title: task.title.clone(),
        due_date: task.due,
        importance: task.importance.unwrap_or(5).clamp(1, 10),
        estimated_hours: match task.estimated_hours {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => 2.0,
        },
        priority_score: score,
        urgency,
        importance_score: importance,
        effort,
        dependencies_score: dependencies,
        explanation: explanation(urgency, importance, effort, dependencies),
        priority_level: PriorityLevel::from_score(score),
    }
}
