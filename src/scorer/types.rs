use super::bounds::Bounds;
use super::curve::EfficiencyCurve;
use super::interpret::{self, Interpretation, StepBreakdown};
use crate::config::BoundsMethod;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs about one finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub curve: EfficiencyCurve,
    pub raw_area: f64,
    pub normalized_score: f64,
    pub bounds: Bounds,
    pub game_won: bool,
    pub breakdown: Vec<StepBreakdown>,
    pub interpretation: Interpretation,
}

impl ScoringResult {
    /// Degenerate result shown in place of a failed scoring run.
    pub fn fallback(message: &str) -> Self {
        Self {
            curve: EfficiencyCurve::zeroed(),
            raw_area: 0.0,
            normalized_score: 0.0,
            bounds: Bounds {
                best: 0.0,
                worst: 0.0,
                method: BoundsMethod::ClosedForm,
                distribution: None,
            },
            game_won: false,
            breakdown: Vec::new(),
            interpretation: interpret::unavailable(message),
        }
    }
}
