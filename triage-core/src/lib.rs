//! triage-core: scoring and validation pipeline for to-do task triage.
//!
//! A batch of task records goes through one pass: dependency-graph
//! analysis (cycle check, blocked counts), per-task component scoring
//! (urgency, importance, effort, dependencies), strategy-weighted
//! aggregation, then sorting and packaging. Stateless and synchronous;
//! callers own persistence and transport.

pub mod analyzer;
pub mod dates;
pub mod explain;
pub mod graph;
pub mod input;
pub mod score;
pub mod strategy;
pub mod task;

pub use analyzer::{
    AnalysisReport, SuggestionReport, analyze, analyze_json, suggest_json, top_suggestions,
};
pub use dates::normalize_due_date;
pub use explain::explanation;
pub use graph::DependencyGraph;
pub use input::{DecodedBatch, SkippedEntry, decode_batch};
pub use score::{
    business_days_until, dependency_score, effort_score, importance_score, urgency_score,
};
pub use strategy::{Strategy, Weights, apply_weights, valid_strategies};
pub use task::{PriorityLevel, ScoredTask, Suggestion, TaskRecord};
