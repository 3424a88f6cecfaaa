#![allow(dead_code)] // Not every test binary uses every helper

use differential::actions::{Action, ActionLog};
use differential::config::{Config, ScoringWeights};
use differential::puzzle::{Difficulty, PuzzleData, Tile};
use differential::scorer::setup::{build_configuration, ScoringConfiguration};
use std::collections::BTreeMap;

/// cost easy=9, medium=6, hard=2, wrong=8; info easy=9, medium=6, hard=6.
pub fn steep_weights() -> ScoringWeights {
    ScoringWeights {
        cost_easy: 9.0,
        cost_medium: 6.0,
        cost_hard: 2.0,
        cost_wrong: 8.0,
        info_easy: 9.0,
        info_medium: 6.0,
        info_hard: 6.0,
    }
}

pub fn steep_config() -> Config {
    Config {
        weights: steep_weights(),
        ..Default::default()
    }
}

pub fn steep_scoring() -> ScoringConfiguration {
    build_configuration(&steep_weights()).expect("steep weights are valid")
}

pub fn flip(tile_index: usize, difficulty: Difficulty) -> Action {
    Action::TileFlip {
        tile_index,
        difficulty,
    }
}

/// Standard board: tiles 0-1 easy, 2-4 medium, 5-8 hard.
pub fn board_difficulty(index: usize) -> Difficulty {
    match index {
        0..=1 => Difficulty::Easy,
        2..=4 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// Flips the given board tiles, then the listed guesses.
pub fn game(tiles: &[usize], wrong: usize, won: bool) -> ActionLog {
    let mut log = ActionLog::new();
    for &t in tiles {
        log.push(flip(t, board_difficulty(t)));
    }
    for _ in 0..wrong {
        log.push(Action::WrongGuess);
    }
    if won {
        log.push(Action::CorrectGuess);
    }
    log
}

pub fn sample_puzzle() -> PuzzleData {
    let tiles = (0..9)
        .map(|i| Tile {
            difficulty: board_difficulty(i),
            clue: format!("Clue {}", i),
        })
        .collect();
    let mut explanations = BTreeMap::new();
    explanations.insert("tile_5".to_string(), "Pathognomonic finding".to_string());

    PuzzleData {
        date: "2025-01-01".to_string(),
        answer: "Sarcoidosis".to_string(),
        acceptable_answers: vec!["sarcoidosis".to_string(), "sarcoid".to_string()],
        tiles,
        concepts: vec!["Granuloma".to_string()],
        explanations,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
