use crate::error::{DfResult, DifferentialError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub difficulty: Difficulty,
    pub clue: String,
}

/// Today's puzzle, as produced by the puzzle generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleData {
    pub date: String,
    pub answer: String,
    #[serde(default)]
    pub acceptable_answers: Vec<String>,
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub concepts: Vec<String>,
    /// Keyed by `tile_<index>`.
    #[serde(default)]
    pub explanations: BTreeMap<String, String>,
}

impl PuzzleData {
    pub fn from_reader<R: Read>(reader: R) -> DfResult<Self> {
        let puzzle: PuzzleData = serde_json::from_reader(reader)
            .map_err(|e| DifferentialError::DataUnavailable(format!("Bad puzzle record: {}", e)))?;
        puzzle.validate()?;
        Ok(puzzle)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DifferentialError::DataUnavailable(format!(
                "Could not open puzzle at '{}': {}",
                path.display(),
                e
            ))
        })?;
        let puzzle = Self::from_reader(BufReader::new(file))?;
        info!(
            "Loaded puzzle {} ({} tiles, {} accepted answers)",
            puzzle.date,
            puzzle.tiles.len(),
            puzzle.acceptable_answers.len()
        );
        Ok(puzzle)
    }

    pub fn validate(&self) -> DfResult<()> {
        if self.tiles.is_empty() {
            return Err(DifferentialError::DataUnavailable(
                "Puzzle has no tiles".to_string(),
            ));
        }
        Ok(())
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn explanation(&self, index: usize) -> Option<&str> {
        self.explanations
            .get(&format!("tile_{}", index))
            .map(String::as_str)
    }

    pub fn inventory(&self) -> TileInventory {
        TileInventory::from_tiles(&self.tiles)
    }
}

/// How many tiles of each difficulty the board holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileInventory {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

/// The standard 3x3 board: tiles 0-1 easy, 2-4 medium, 5-8 hard.
impl Default for TileInventory {
    fn default() -> Self {
        Self {
            easy: 2,
            medium: 3,
            hard: 4,
        }
    }
}

impl TileInventory {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut inv = Self {
            easy: 0,
            medium: 0,
            hard: 0,
        };
        for tile in tiles {
            match tile.difficulty {
                Difficulty::Easy => inv.easy += 1,
                Difficulty::Medium => inv.medium += 1,
                Difficulty::Hard => inv.hard += 1,
            }
        }
        inv
    }

    pub fn count(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.hard
    }

    /// Difficulty of every tile in board order (easy first, hard last).
    pub fn tiles(&self) -> Vec<Difficulty> {
        Difficulty::iter()
            .flat_map(|d| std::iter::repeat(d).take(self.count(d) as usize))
            .collect()
    }
}
