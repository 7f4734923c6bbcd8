//! Strategy weighting: named profiles that fold the four sub-scores into
//! one priority score.

/// Weight multipliers applied to the four sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

/// Fixed catalog of weighting strategies.
///
/// Reports carry the wire name from [`Strategy::name`]; the enum itself
/// never crosses the serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Resolve a wire name. Unknown names fall back to the balanced
    /// profile rather than erroring.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fastest_wins" => Strategy::FastestWins,
            "high_impact" => Strategy::HighImpact,
            "deadline_driven" => Strategy::DeadlineDriven,
            _ => Strategy::SmartBalance,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "All factors weighted equally",
            Strategy::FastestWins => "Prioritize quick tasks",
            Strategy::HighImpact => "Prioritize important tasks",
            Strategy::DeadlineDriven => "Prioritize urgent tasks",
        }
    }

    pub fn weights(&self) -> Weights {
        match self {
            Strategy::SmartBalance => Weights {
                urgency: 1.0,
                importance: 1.0,
                effort: 1.0,
                dependencies: 1.0,
            },
            Strategy::FastestWins => Weights {
                urgency: 0.5,
                importance: 1.0,
                effort: 3.0,
                dependencies: 1.0,
            },
            Strategy::HighImpact => Weights {
                urgency: 1.0,
                importance: 3.0,
                effort: 0.5,
                dependencies: 1.0,
            },
            Strategy::DeadlineDriven => Weights {
                urgency: 3.0,
                importance: 1.0,
                effort: 0.5,
                dependencies: 1.0,
            },
        }
    }
}

/// Wire names of all valid strategies, catalog order.
pub fn valid_strategies() -> Vec<&'static str> {
    Strategy::ALL.iter().map(Strategy::name).collect()
}

/// Weighted sum of the four sub-scores, rounded to the nearest integer.
///
/// Rounding is half-away-from-zero (`f64::round`); half-integer sums only
/// arise from the 0.5 weights.
pub fn apply_weights(
    urgency: i64,
    importance: i64,
    effort: i64,
    dependencies: i64,
    strategy: &str,
) -> i64 {
    let w = Strategy::from_name(strategy).weights();
    let score = (urgency as f64) * w.urgency
        + (importance as f64) * w.importance
        + (effort as f64) * w.effort
        + (dependencies as f64) * w.dependencies;
    score.round() as i64
}
