use crate::config::ScoringWeights;
use crate::error::{DfResult, DifferentialError};
use crate::puzzle::Difficulty;
use serde::Serialize;
use tracing::debug;

/// Per-tier values, indexed by `Difficulty`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierValues {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl TierValues {
    #[inline(always)]
    pub fn get(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Validated weights with the derived info-per-cost ratios.
///
/// Built once per scoring run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringConfiguration {
    pub cost: TierValues,
    pub info: TierValues,
    pub wrong_cost: f64,
    pub efficiency: TierValues,
}

impl ScoringConfiguration {
    #[inline(always)]
    pub fn cost(&self, difficulty: Difficulty) -> f64 {
        self.cost.get(difficulty)
    }

    #[inline(always)]
    pub fn info(&self, difficulty: Difficulty) -> f64 {
        self.info.get(difficulty)
    }

    #[inline(always)]
    pub fn efficiency(&self, difficulty: Difficulty) -> f64 {
        self.efficiency.get(difficulty)
    }

    /// Tiers from least to most efficient. Ties keep board order.
    pub fn tiers_by_efficiency(&self) -> [Difficulty; 3] {
        let mut tiers = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        tiers.sort_by(|a, b| self.efficiency(*a).total_cmp(&self.efficiency(*b)));
        tiers
    }

    /// The tier with the highest efficiency; hard wins ties.
    pub fn most_efficient(&self) -> Difficulty {
        self.tiers_by_efficiency()[2]
    }

    /// Bit patterns of every weight, used as a cache key.
    pub fn canonical_bits(&self) -> [u64; 7] {
        [
            self.cost.easy.to_bits(),
            self.cost.medium.to_bits(),
            self.cost.hard.to_bits(),
            self.wrong_cost.to_bits(),
            self.info.easy.to_bits(),
            self.info.medium.to_bits(),
            self.info.hard.to_bits(),
        ]
    }
}

pub fn build_configuration(weights: &ScoringWeights) -> DfResult<ScoringConfiguration> {
    let costs = [
        ("cost_easy", weights.cost_easy),
        ("cost_medium", weights.cost_medium),
        ("cost_hard", weights.cost_hard),
        ("cost_wrong", weights.cost_wrong),
    ];
    for (name, value) in costs {
        if !value.is_finite() || value <= 0.0 {
            return Err(DifferentialError::Config(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }

    let infos = [
        ("info_easy", weights.info_easy),
        ("info_medium", weights.info_medium),
        ("info_hard", weights.info_hard),
    ];
    for (name, value) in infos {
        if !value.is_finite() || value < 0.0 {
            return Err(DifferentialError::Config(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }

    let cost = TierValues {
        easy: weights.cost_easy,
        medium: weights.cost_medium,
        hard: weights.cost_hard,
    };
    let info = TierValues {
        easy: weights.info_easy,
        medium: weights.info_medium,
        hard: weights.info_hard,
    };
    let efficiency = TierValues {
        easy: info.easy / cost.easy,
        medium: info.medium / cost.medium,
        hard: info.hard / cost.hard,
    };

    // Harder clues must never be worse value per cost than easier ones.
    if efficiency.hard < efficiency.medium || efficiency.medium < efficiency.easy {
        return Err(DifferentialError::Config(format!(
            "Efficiency must not decrease with difficulty (easy={:.3}, medium={:.3}, hard={:.3})",
            efficiency.easy, efficiency.medium, efficiency.hard
        )));
    }

    debug!(
        "Scoring config: Easy={:.2}, Medium={:.2}, Hard={:.2} info/cost",
        efficiency.easy, efficiency.medium, efficiency.hard
    );

    Ok(ScoringConfiguration {
        cost,
        info,
        wrong_cost: weights.cost_wrong,
        efficiency,
    })
}
