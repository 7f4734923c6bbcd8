//! End-to-end pipeline regression: batches in, ranked reports out, against
//! a fixed reference date so results are reproducible.

use chrono::NaiveDate;
use triage_core::{Strategy, TaskRecord, analyze, top_suggestions, valid_strategies};

// 2026-03-02 is a Monday.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn sample_batch() -> Vec<TaskRecord> {
    vec![
        TaskRecord::new("Fix login bug")
            .with_id("login")
            .with_due("2026-03-03")
            .with_importance(8)
            .with_hours(3.0),
        TaskRecord::new("Write quarterly report")
            .with_id("report")
            .with_due("2026-03-12")
            .with_importance(9)
            .with_hours(6.0),
        TaskRecord::new("Update dependencies")
            .with_id("deps")
            .with_due("2026-04-10")
            .with_importance(3)
            .with_hours(1.0),
        TaskRecord::new("Deploy release")
            .with_id("deploy")
            .with_due("2026-03-06")
            .with_importance(7)
            .with_hours(2.0)
            .with_deps(&["login"]),
        TaskRecord::new("Announce release")
            .with_id("announce")
            .with_due("2026-03-09")
            .with_importance(5)
            .with_hours(0.5)
            .with_deps(&["deploy"]),
    ]
}

#[test]
fn test_full_batch_ranked_and_explained() {
    let report = analyze(&sample_batch(), "smart_balance", today());
    assert!(report.success);
    assert_eq!(report.message, "Successfully analyzed 5 tasks");
    assert_eq!(report.results.len(), 5);

    // Scores must be non-increasing.
    let scores: Vec<i64> = report.results.iter().map(|t| t.priority_score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));

    // Every result carries a non-empty explanation and a tier.
    for t in &report.results {
        assert!(!t.explanation.is_empty());
        assert!(["HIGH", "MEDIUM", "LOW"].contains(&t.priority_level.as_str()));
    }

    // "Fix login bug" blocks the deploy, which blocks the announcement.
    let login = report.results.iter().find(|t| t.id == "login").unwrap();
    assert_eq!(login.dependencies_score, 20);
}

#[test]
fn test_overdue_outranks_distant_under_every_strategy() {
    let overdue = TaskRecord::new("Overdue")
        .with_due("2026-02-20")
        .with_importance(5)
        .with_hours(2.0);
    let distant = TaskRecord::new("Distant")
        .with_due("2026-03-22")
        .with_importance(5)
        .with_hours(2.0);

    for strategy in Strategy::ALL {
        let report = analyze(
            &[distant.clone(), overdue.clone()],
            strategy.name(),
            today(),
        );
        assert!(report.success);
        assert_eq!(
            report.results[0].title, "Overdue",
            "strategy {} must rank the overdue task first",
            strategy.name()
        );
    }
}

#[test]
fn test_cycle_fails_under_every_strategy() {
    let a = TaskRecord::new("A").with_id("a").with_deps(&["b"]);
    let b = TaskRecord::new("B").with_id("b").with_deps(&["c"]);
    let c = TaskRecord::new("C").with_id("c").with_deps(&["a"]);
    let batch = vec![a, b, c];

    for strategy in Strategy::ALL {
        let report = analyze(&batch, strategy.name(), today());
        assert!(!report.success);
        assert!(report.results.is_empty());
        assert_eq!(
            report.error.as_deref(),
            Some("Circular dependency detected: a -> b -> c -> a")
        );
    }
}

#[test]
fn test_suggestions_are_head_of_full_ranking() {
    let batch = sample_batch();
    let full = analyze(&batch, "smart_balance", today());
    let top = top_suggestions(&batch, "smart_balance", 3, today());

    assert!(top.success);
    assert_eq!(top.message, "Top 3 tasks for today");
    assert_eq!(top.suggestions.len(), 3);

    for (suggestion, scored) in top.suggestions.iter().zip(&full.results) {
        assert_eq!(suggestion.title, scored.title);
        assert_eq!(suggestion.priority_score, scored.priority_score);
        assert_eq!(suggestion.reason, scored.explanation);
        assert_eq!(suggestion.due_date, scored.due_date);
    }
}

#[test]
fn test_suggestion_count_larger_than_batch() {
    let batch = vec![TaskRecord::new("only one").with_due("2026-03-04")];
    let top = top_suggestions(&batch, "smart_balance", 3, today());
    assert!(top.success);
    assert_eq!(top.suggestions.len(), 1);
    assert_eq!(top.message, "Top 1 tasks for today");
}

#[test]
fn test_strategies_reorder_the_same_batch() {
    let quick = TaskRecord::new("Quick chore")
        .with_due("2026-03-20")
        .with_importance(5)
        .with_hours(1.0);
    let important = TaskRecord::new("Board prep")
        .with_due("2026-03-20")
        .with_importance(10)
        .with_hours(5.0);
    let batch = vec![quick, important];

    let fastest = analyze(&batch, "fastest_wins", today());
    assert_eq!(fastest.results[0].title, "Quick chore");

    let impact = analyze(&batch, "high_impact", today());
    assert_eq!(impact.results[0].title, "Board prep");
}

#[test]
fn test_strategy_catalog_is_stable() {
    assert_eq!(
        valid_strategies(),
        vec!["smart_balance", "fastest_wins", "high_impact", "deadline_driven"]
    );
    for strategy in Strategy::ALL {
        assert!(!strategy.description().is_empty());
        assert_eq!(Strategy::from_name(strategy.name()), strategy);
    }
}
