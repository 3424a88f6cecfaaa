use crate::error::{DfResult, DifferentialError};
use crate::puzzle::{Difficulty, PuzzleData};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One player action, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    TileFlip {
        #[serde(rename = "tileIndex", alias = "tile_index")]
        tile_index: usize,
        difficulty: Difficulty,
    },
    WrongGuess,
    CorrectGuess,
}

/// Append-only record of a single game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl From<Vec<Action>> for ActionLog {
    fn from(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// A game is won when it ends on a correct guess.
    pub fn is_won(&self) -> bool {
        matches!(self.actions.last(), Some(Action::CorrectGuess))
    }

    pub fn wrong_guesses(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::WrongGuess))
            .count()
    }

    pub fn tiles_flipped(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::TileFlip { .. }))
            .count()
    }

    /// Checks the invariants the game state is expected to uphold.
    ///
    /// With a puzzle, tile indices and difficulties are also checked
    /// against the board.
    pub fn check_well_formed(&self, puzzle: Option<&PuzzleData>) -> DfResult<()> {
        let mut seen = HashSet::new();
        let last = self.actions.len().saturating_sub(1);

        for (i, action) in self.actions.iter().enumerate() {
            match *action {
                Action::TileFlip {
                    tile_index,
                    difficulty,
                } => {
                    if !seen.insert(tile_index) {
                        return Err(DifferentialError::InvalidActionLog(format!(
                            "Tile {} flipped twice (action {})",
                            tile_index, i
                        )));
                    }
                    if let Some(p) = puzzle {
                        match p.tile(tile_index) {
                            None => {
                                return Err(DifferentialError::InvalidActionLog(format!(
                                    "Tile {} is not on a {}-tile board",
                                    tile_index,
                                    p.tiles.len()
                                )))
                            }
                            Some(tile) if tile.difficulty != difficulty => {
                                return Err(DifferentialError::InvalidActionLog(format!(
                                    "Tile {} is {}, log says {}",
                                    tile_index, tile.difficulty, difficulty
                                )))
                            }
                            Some(_) => {}
                        }
                    }
                }
                Action::CorrectGuess if i != last => {
                    return Err(DifferentialError::InvalidActionLog(format!(
                        "Correct guess at action {} is not the final action",
                        i
                    )));
                }
                Action::WrongGuess | Action::CorrectGuess => {}
            }
        }
        Ok(())
    }

    pub fn from_json_reader<R: Read>(reader: R) -> DfResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| DifferentialError::DataUnavailable(format!("Bad action log: {}", e)))
    }

    /// Reads `type,tile_index,difficulty` rows; the last two columns are
    /// only read for `tile_flip`.
    pub fn from_csv_reader<R: Read>(reader: R) -> DfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut log = Self::new();
        for (row_idx, result) in rdr.records().enumerate() {
            let rec = result?;
            let row = row_idx + 1;
            let action = match rec.get(0).unwrap_or("") {
                "tile_flip" => {
                    let tile_index = rec
                        .get(1)
                        .and_then(|s| s.parse::<usize>().ok())
                        .ok_or_else(|| bad_row(row, "missing or invalid tile index"))?;
                    let difficulty = rec
                        .get(2)
                        .and_then(|s| Difficulty::from_str(s).ok())
                        .ok_or_else(|| bad_row(row, "missing or invalid difficulty"))?;
                    Action::TileFlip {
                        tile_index,
                        difficulty,
                    }
                }
                "wrong_guess" => Action::WrongGuess,
                "correct_guess" => Action::CorrectGuess,
                other => return Err(bad_row(row, &format!("unknown action '{}'", other))),
            };
            log.push(action);
        }
        Ok(log)
    }

    /// Picks the CSV reader for `.csv` files and JSON for everything else.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DifferentialError::DataUnavailable(format!(
                "Could not open action log at '{}': {}",
                path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);

        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let log = if is_csv {
            Self::from_csv_reader(reader)?
        } else {
            Self::from_json_reader(reader)?
        };
        debug!("Loaded {} actions from {}", log.len(), path.display());
        Ok(log)
    }
}

fn bad_row(row: usize, msg: &str) -> DifferentialError {
    DifferentialError::DataUnavailable(format!("Action log row {}: {}", row, msg))
}
