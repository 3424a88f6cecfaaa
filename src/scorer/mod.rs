pub mod bounds;
pub mod curve;
pub mod integrate;
pub mod interpret;
pub mod normalize;
pub mod setup;
pub mod types;

pub use self::bounds::{Bounds, BoundsEstimator};
pub use self::curve::{build_curve, CurvePoint, EfficiencyCurve, PointLabel};
pub use self::setup::ScoringConfiguration;
pub use self::types::ScoringResult;
use crate::actions::ActionLog;
use crate::config::Config;
use crate::error::{DfResult, DifferentialError};
use crate::puzzle::{PuzzleData, TileInventory};
use tracing::debug;

/// Runs curve building, integration, bounds, normalization and
/// interpretation for finished games.
///
/// Holds the validated configuration and the bounds cache, so one scorer
/// can be shared across many games of the same puzzle.
pub struct Scorer {
    pub config: ScoringConfiguration,
    pub bounds: BoundsEstimator,
    puzzle: Option<PuzzleData>,
}

impl Scorer {
    pub fn new(config: &Config, inventory: TileInventory) -> DfResult<Self> {
        let scoring = setup::build_configuration(&config.weights)?;
        config.bounds.validate()?;
        Ok(Self {
            config: scoring,
            bounds: BoundsEstimator::new(config.bounds.clone(), inventory),
            puzzle: None,
        })
    }

    /// A scorer bound to one puzzle; logs are checked against its board.
    pub fn for_puzzle(config: &Config, puzzle: PuzzleData) -> DfResult<Self> {
        puzzle.validate()?;
        let mut scorer = Self::new(config, puzzle.inventory())?;
        scorer.puzzle = Some(puzzle);
        Ok(scorer)
    }

    pub fn puzzle(&self) -> Option<&PuzzleData> {
        self.puzzle.as_ref()
    }

    pub fn compute_bounds(&self) -> Bounds {
        self.bounds.compute_bounds(&self.config)
    }

    pub fn score(&self, log: &ActionLog) -> DfResult<ScoringResult> {
        if log.is_empty() {
            return Err(DifferentialError::DataUnavailable(
                "Action log is empty".to_string(),
            ));
        }
        log.check_well_formed(self.puzzle.as_ref())?;

        let game_won = log.is_won();
        let curve = build_curve(log.actions(), &self.config);
        let raw_area = integrate::integrate(&curve);
        let bounds = self.compute_bounds();
        let normalized_score = normalize::normalize(raw_area, &bounds, game_won);

        debug!(
            "Scored {} flips, {} wrong guesses: cost={:.1}, info={:.1}, area={:.2}, score={:.3} (won={})",
            log.tiles_flipped(),
            log.wrong_guesses(),
            curve.total_cost(),
            curve.total_info(),
            raw_area,
            normalized_score,
            game_won
        );

        let interpretation =
            interpret::interpret(normalized_score, &curve, &self.config, game_won);
        let breakdown = interpret::breakdown(&curve);

        Ok(ScoringResult {
            curve,
            raw_area,
            normalized_score,
            bounds,
            game_won,
            breakdown,
            interpretation,
        })
    }
}
