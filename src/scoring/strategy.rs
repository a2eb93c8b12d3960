//! Scoring strategies and weight aggregation.

use serde::{Deserialize, Serialize};

use crate::errors::RankError;

/// Relative weight of each scoring signal.
///
/// Each predefined strategy's weights sum to 1.0, so a raw aggregate
/// over [0, 1] signals stays in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

/// Named weighting strategy. Adding a strategy means adding a variant
/// and its weight vector; there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Self; 4] = [
        Self::SmartBalance,
        Self::FastestWins,
        Self::HighImpact,
        Self::DeadlineDriven,
    ];

    pub fn weights(self) -> Weights {
        match self {
            Self::SmartBalance => Weights {
                urgency: 0.35,
                importance: 0.35,
                effort: 0.15,
                dependencies: 0.15,
            },
            Self::FastestWins => Weights {
                urgency: 0.20,
                importance: 0.20,
                effort: 0.50,
                dependencies: 0.10,
            },
            Self::HighImpact => Weights {
                urgency: 0.20,
                importance: 0.60,
                effort: 0.10,
                dependencies: 0.10,
            },
            Self::DeadlineDriven => Weights {
                urgency: 0.60,
                importance: 0.20,
                effort: 0.10,
                dependencies: 0.10,
            },
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SmartBalance => write!(f, "smart_balance"),
            Self::FastestWins => write!(f, "fastest_wins"),
            Self::HighImpact => write!(f, "high_impact"),
            Self::DeadlineDriven => write!(f, "deadline_driven"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smart_balance" => Ok(Self::SmartBalance),
            "fastest_wins" => Ok(Self::FastestWins),
            "high_impact" => Ok(Self::HighImpact),
            "deadline_driven" => Ok(Self::DeadlineDriven),
            _ => Err(RankError::UnknownStrategy {
                strategy: s.to_string(),
            }),
        }
    }
}

/// Combine the four normalized signals into the published score.
///
/// The raw weighted sum lies in [0, 1]; the published score is
/// `raw * 100` rounded to two decimals, half away from zero
/// (`f64::round` semantics).
pub(crate) fn aggregate(weights: Weights, urgency: f64, importance: f64, effort: f64, dependencies: f64) -> f64 {
    let raw = weights.urgency * urgency
        + weights.importance * importance
        + weights.effort * effort
        + weights.dependencies * dependencies;
    round_two_decimals(raw * 100.0)
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
