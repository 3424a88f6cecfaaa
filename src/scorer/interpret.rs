use super::curve::{EfficiencyCurve, PointLabel};
use super::integrate::segment_area;
use super::setup::ScoringConfiguration;
use crate::puzzle::Difficulty;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Tier {
    Excellent,
    Strong,
    Moderate,
    Developing,
}

impl Tier {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            80..=u32::MAX => Tier::Excellent,
            60..=79 => Tier::Strong,
            30..=59 => Tier::Moderate,
            _ => Tier::Developing,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Excellent => "Top-tier efficiency",
            Tier::Strong => "Efficient",
            Tier::Moderate => "Room to improve",
            Tier::Developing => "Learning opportunity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum CurveShape {
    FrontLoaded,
    BackLoaded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltips {
    pub score: String,
    pub curve: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub headline: String,
    pub explanation: String,
    pub advice: String,
    pub tier: Option<Tier>,
    pub shape: Option<CurveShape>,
    pub tooltips: Tooltips,
}

/// One action of the played game, as shown in the calculation breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepBreakdown {
    pub step: usize,
    pub label: PointLabel,
    pub tile_index: Option<usize>,
    pub cost: f64,
    pub info: f64,
    pub efficiency: f64,
    pub total_cost: f64,
    pub total_info: f64,
    pub area: f64,
}

pub fn percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn interpret(
    score: f64,
    curve: &EfficiencyCurve,
    config: &ScoringConfiguration,
    game_won: bool,
) -> Interpretation {
    if !game_won {
        return Interpretation {
            headline: "Game incomplete - analysis limited".to_string(),
            explanation: "Complete the puzzle to see full efficiency analysis.".to_string(),
            advice: "Try the puzzle again and aim to flip harder tiles first for better efficiency."
                .to_string(),
            tier: None,
            shape: None,
            tooltips: Tooltips {
                score: "Requires successful completion".to_string(),
                curve: "Requires successful completion".to_string(),
            },
        };
    }

    let pct = percent(score);
    let tier = Tier::from_percent(pct);
    let shape = if curve.is_front_loaded() {
        CurveShape::FrontLoaded
    } else {
        CurveShape::BackLoaded
    };

    let eff_easy = config.efficiency(Difficulty::Easy);
    let eff_medium = config.efficiency(Difficulty::Medium);
    let eff_hard = config.efficiency(Difficulty::Hard);

    let headline = format!("Diagnostic Efficiency: {}% - {}", pct, tier);

    let mut explanation = format!(
        "Your AUEC score ({}%) measures diagnostic efficiency: how much information you gained per unit cost. ",
        pct
    );
    if eff_easy > 0.0 {
        explanation.push_str(&format!(
            "Hard tiles give {:.1}x more info per cost than easy tiles ({:.1} vs {:.2}), rewarding expert pattern recognition. ",
            eff_hard / eff_easy,
            eff_hard,
            eff_easy
        ));
    }
    explanation.push_str(if pct >= 70 {
        "Excellent efficiency suggests you prioritized hard tiles and avoided unnecessary moves. "
    } else if pct >= 40 {
        "Good efficiency with room for improvement by flipping harder tiles first. "
    } else {
        "Lower efficiency suggests focusing on hard tiles first would improve your strategy. "
    });
    explanation.push_str(match shape {
        CurveShape::FrontLoaded => {
            "Your curve is front-loaded: you started with high-value tiles."
        }
        CurveShape::BackLoaded => {
            "Your curve is back-loaded: your later moves gathered information faster."
        }
    });

    let (wrong_guesses, tiles_flipped) = curve.points().iter().fold((0, 0), |(w, t), p| {
        match p.label {
            PointLabel::WrongGuess => (w + 1, t),
            PointLabel::Flip(_) => (w, t + 1),
            PointLabel::Start | PointLabel::CorrectGuess => (w, t),
        }
    });

    let mut advice = "Strategic tips: ".to_string();
    if wrong_guesses > 0 {
        advice.push_str(&format!(
            "Reduce wrong guesses (you had {}) by gathering more evidence first. ",
            wrong_guesses
        ));
    }
    if tiles_flipped > 6 {
        advice.push_str("Try using fewer tiles by prioritizing the most informative (hard) ones. ");
    }
    advice.push_str(&format!(
        "Remember: hard tiles cost {} but give {} info points ({:.1} efficiency), while easy tiles cost {} but give {} info points ({:.2} efficiency).",
        config.cost(Difficulty::Hard),
        config.info(Difficulty::Hard),
        eff_hard,
        config.cost(Difficulty::Easy),
        config.info(Difficulty::Easy),
        eff_easy
    ));

    Interpretation {
        headline,
        explanation,
        advice,
        tier: Some(tier),
        shape: Some(shape),
        tooltips: Tooltips {
            score: format!(
                "Diagnostic efficiency score: 100% = best possible strategy. Hard tiles: {:.1} info/cost, Medium: {:.1}, Easy: {:.2}",
                eff_hard, eff_medium, eff_easy
            ),
            curve: "Area under your efficiency curve compared to the best and worst strategies"
                .to_string(),
        },
    }
}

/// Text shown when scoring could not run at all.
pub fn unavailable(message: &str) -> Interpretation {
    Interpretation {
        headline: "Analysis Unavailable".to_string(),
        explanation: format!("AUEC calculation failed: {}", message),
        advice: "Please try refreshing the page.".to_string(),
        tier: None,
        shape: None,
        tooltips: Tooltips {
            score: "Analysis unavailable".to_string(),
            curve: "Analysis unavailable".to_string(),
        },
    }
}

pub fn breakdown(curve: &EfficiencyCurve) -> Vec<StepBreakdown> {
    curve
        .segments()
        .enumerate()
        .map(|(i, (prev, curr))| {
            let cost = curr.x - prev.x;
            let info = curr.y - prev.y;
            StepBreakdown {
                step: i + 1,
                label: curr.label,
                tile_index: curr.tile_index,
                cost,
                info,
                efficiency: if cost > 0.0 { info / cost } else { 0.0 },
                total_cost: curr.x,
                total_info: curr.y,
                area: segment_area(prev, curr),
            }
        })
        .collect()
}
