use super::setup::ScoringConfiguration;
use crate::actions::Action;
use crate::puzzle::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointLabel {
    Start,
    Flip(Difficulty),
    WrongGuess,
    CorrectGuess,
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointLabel::Start => write!(f, "start"),
            PointLabel::Flip(d) => write!(f, "{}_flip", d),
            PointLabel::WrongGuess => write!(f, "wrong_guess"),
            PointLabel::CorrectGuess => write!(f, "correct_guess"),
        }
    }
}

/// Cumulative cost (x) and information (y) after one prefix of the log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
    pub label: PointLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_index: Option<usize>,
}

impl CurvePoint {
    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            label: PointLabel::Start,
            tile_index: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EfficiencyCurve {
    points: Vec<CurvePoint>,
}

impl EfficiencyCurve {
    /// A curve holding only the origin.
    pub fn zeroed() -> Self {
        Self {
            points: vec![CurvePoint::origin()],
        }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> CurvePoint {
        self.points.last().copied().unwrap_or_else(CurvePoint::origin)
    }

    pub fn total_cost(&self) -> f64 {
        self.last().x
    }

    pub fn total_info(&self) -> f64 {
        self.last().y
    }

    /// True when the curve ends on a correct guess.
    pub fn is_terminated(&self) -> bool {
        self.last().label == PointLabel::CorrectGuess
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&CurvePoint, &CurvePoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Compares the slope of the first half of the curve to the second.
    pub fn is_front_loaded(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let first = self.points[0];
        let mid = self.points[n / 2];
        let end = self.points[n - 1];

        let slope = |a: CurvePoint, b: CurvePoint| {
            let dx = b.x - a.x;
            (b.y - a.y) / if dx == 0.0 { 1.0 } else { dx }
        };
        slope(first, mid) > slope(mid, end)
    }
}

/// Maps an action log onto the cost/information plane.
///
/// Starts at the origin. Flips add their tier's cost and info, wrong
/// guesses add only cost, and a correct guess repeats the last point as a
/// terminal marker. The log is assumed to be well formed.
pub fn build_curve(actions: &[Action], config: &ScoringConfiguration) -> EfficiencyCurve {
    debug_assert!(
        crate::actions::ActionLog::from(actions.to_vec())
            .check_well_formed(None)
            .is_ok(),
        "malformed action log reached the curve builder"
    );

    let mut points = Vec::with_capacity(actions.len() + 1);
    points.push(CurvePoint::origin());

    let mut cost = 0.0;
    let mut info = 0.0;

    for action in actions {
        let point = match *action {
            Action::TileFlip {
                tile_index,
                difficulty,
            } => {
                cost += config.cost(difficulty);
                info += config.info(difficulty);
                CurvePoint {
                    x: cost,
                    y: info,
                    label: PointLabel::Flip(difficulty),
                    tile_index: Some(tile_index),
                }
            }
            Action::WrongGuess => {
                cost += config.wrong_cost;
                CurvePoint {
                    x: cost,
                    y: info,
                    label: PointLabel::WrongGuess,
                    tile_index: None,
                }
            }
            Action::CorrectGuess => CurvePoint {
                x: cost,
                y: info,
                label: PointLabel::CorrectGuess,
                tile_index: None,
            },
        };
        points.push(point);
    }

    EfficiencyCurve { points }
}
