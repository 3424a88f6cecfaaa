use crate::actions::ActionLog;
use crate::config::Config;
use crate::error::{DfResult, DifferentialError};
use crate::puzzle::PuzzleData;
use crate::scorer::{Scorer, ScoringResult};
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tracing::{info, warn};

/// The state required to score games for the current puzzle.
#[derive(Default)]
pub struct DifferentialState {
    pub scorer: RwLock<Option<Scorer>>,
}

/// Service: load today's puzzle and build its scorer.
pub fn load_puzzle<P: AsRef<Path>>(
    state: &DifferentialState,
    puzzle_path: P,
    config: Option<Config>,
) -> DfResult<String> {
    let puzzle = PuzzleData::load_from_file(puzzle_path)?;
    install_puzzle(state, puzzle, config)
}

/// Service: build a scorer for an already-parsed puzzle.
pub fn install_puzzle(
    state: &DifferentialState,
    puzzle: PuzzleData,
    config: Option<Config>,
) -> DfResult<String> {
    let config = config.unwrap_or_default();
    let date = puzzle.date.clone();
    let scorer = Scorer::for_puzzle(&config, puzzle)?;

    // Warm the cache so the first finished game doesn't pay for it.
    let bounds = scorer.compute_bounds();
    info!(
        "Puzzle {} ready (best={:.2}, worst={:.2})",
        date, bounds.best, bounds.worst
    );

    let mut guard = state.scorer.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(scorer);

    Ok(format!("Puzzle {} loaded", date))
}

/// Service: score a finished game.
///
/// Never fails: any error becomes a fallback result carrying the error
/// text, so the UI always has something to render.
pub fn score_game(state: &DifferentialState, log: Option<&ActionLog>) -> ScoringResult {
    match try_score_game(state, log) {
        Ok(result) => result,
        Err(e) => {
            warn!("Scoring failed, using fallback result: {}", e);
            ScoringResult::fallback(&e.to_string())
        }
    }
}

pub fn try_score_game(
    state: &DifferentialState,
    log: Option<&ActionLog>,
) -> DfResult<ScoringResult> {
    let guard = state.scorer.read().unwrap_or_else(PoisonError::into_inner);
    let scorer = guard.as_ref().ok_or_else(|| {
        DifferentialError::DataUnavailable("Puzzle not loaded. Load a puzzle first.".to_string())
    })?;
    let log = log.ok_or_else(|| {
        DifferentialError::DataUnavailable("Action log not available".to_string())
    })?;
    scorer.score(log)
}
