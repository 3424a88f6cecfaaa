mod common;

use common::{assert_close, flip, game, sample_puzzle, steep_config};
use differential::actions::{Action, ActionLog};
use differential::config::Config;
use differential::error::DifferentialError;
use differential::puzzle::{Difficulty, TileInventory};
use differential::scorer::interpret::Tier;
use differential::scorer::{PointLabel, Scorer};
use rstest::rstest;

fn steep_scorer() -> Scorer {
    Scorer::new(&steep_config(), TileInventory::default()).expect("valid config")
}

fn expert_scorer() -> Scorer {
    Scorer::new(&Config::default(), TileInventory::default()).expect("valid config")
}

// --- WORKED GAMES ---

#[test]
fn test_single_hard_flip_is_perfect() {
    let result = steep_scorer().score(&game(&[5], 0, true)).unwrap();

    assert_close(result.raw_area, 6.0);
    assert_close(result.bounds.best, 6.0);
    assert_close(result.bounds.worst, 1032.0);
    assert_close(result.normalized_score, 1.0);
    assert!(result.game_won);
}

#[test]
fn test_easy_flips_with_wrong_guesses() {
    let result = steep_scorer().score(&game(&[0, 1], 2, true)).unwrap();

    assert_close(result.raw_area, 162.0);
    assert_close(result.normalized_score, 870.0 / 1026.0);
    assert!(result.normalized_score > 0.0 && result.normalized_score < 1.0);
}

#[test]
fn test_lost_game_scores_zero() {
    let log = ActionLog::from(vec![
        flip(5, Difficulty::Hard),
        Action::WrongGuess,
        Action::WrongGuess,
    ]);
    let result = steep_scorer().score(&log).unwrap();

    assert!(!result.game_won);
    assert_close(result.raw_area, 6.0);
    assert_eq!(result.normalized_score, 0.0);
    assert_eq!(result.interpretation.tier, None);
    assert_eq!(
        result.interpretation.headline,
        "Game incomplete - analysis limited"
    );
}

#[test]
fn test_worst_game_scores_zero() {
    let result = steep_scorer()
        .score(&game(&[0, 1, 2, 3, 4, 5, 6, 7, 8], 2, true))
        .unwrap();

    assert_close(result.raw_area, 1032.0);
    assert_close(result.normalized_score, 0.0);
}

#[rstest]
#[case(&[5], 1.0)]
#[case(&[5, 6], 0.952_380_952_380_952_4)]
#[case(&[0, 5], 0.964_726_631_393_298_1)]
#[case(&[5, 0], 0.717_813_051_146_384_5)]
#[case(&[2, 5, 6], 0.895_943_562_610_229_3)]
#[case(&[5, 6, 2], 0.670_194_003_527_336_9)]
fn test_expert_defaults(#[case] tiles: &[usize], #[case] expected: f64) {
    let result = expert_scorer().score(&game(tiles, 0, true)).unwrap();
    assert_close(result.bounds.best, 4.5);
    assert_close(result.bounds.worst, 288.0);
    assert!((result.normalized_score - expected).abs() < 1e-9);
}

// Pairs on this board where the cheaper path to the same information also
// scores at least as well. This does not hold for every pair.
#[rstest]
#[case(&[5, 6, 7], &[2, 5, 6])]
#[case(&[2, 5, 6], &[2, 3, 5])]
#[case(&[2, 3, 5], &[2, 3, 4])]
#[case(&[5, 2, 3], &[2, 3, 4])]
fn test_cheaper_path_scores_higher(#[case] cheap: &[usize], #[case] dear: &[usize]) {
    let scorer = steep_scorer();
    let a = scorer.score(&game(cheap, 0, true)).unwrap();
    let b = scorer.score(&game(dear, 0, true)).unwrap();

    assert_eq!(a.curve.total_info(), b.curve.total_info());
    assert!(a.curve.total_cost() < b.curve.total_cost());
    assert!(a.normalized_score >= b.normalized_score);
}

// Front-loading hard tiles piles information up early, so the medium flips
// that follow sweep a tall area even though the whole game costs less.
#[test]
fn test_cheaper_path_can_score_lower() {
    let scorer = expert_scorer();
    let cheap = scorer.score(&game(&[5, 6, 7, 8, 2, 3, 4], 0, true)).unwrap();
    let dear = scorer.score(&game(&[0, 1, 2, 3, 5, 6, 7, 8], 0, true)).unwrap();

    assert_close(cheap.curve.total_cost(), 16.0);
    assert_close(dear.curve.total_cost(), 28.0);
    assert_close(cheap.curve.total_info(), 48.0);
    assert_close(dear.curve.total_info(), 48.0);

    assert_close(cheap.raw_area, 576.0);
    assert_close(dear.raw_area, 216.0);
    assert_eq!(cheap.normalized_score, 0.0);
    assert_close(dear.normalized_score, 72.0 / 283.5);
    assert!(cheap.normalized_score < dear.normalized_score);
}

#[test]
fn test_score_always_in_unit_range() {
    let scorer = steep_scorer();
    let games = [
        game(&[5], 0, true),
        game(&[0, 1, 2, 3, 4, 5, 6, 7, 8], 2, true),
        game(&[3, 8, 1], 1, true),
        game(&[], 2, true),
        game(&[4], 0, false),
    ];
    for log in &games {
        let s = scorer.score(log).unwrap().normalized_score;
        assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
    }
}

#[test]
fn test_guess_without_flips() {
    // Correct guess straight away: no information, no area.
    let result = steep_scorer().score(&game(&[], 0, true)).unwrap();
    assert_eq!(result.raw_area, 0.0);
    assert_close(result.normalized_score, 1.0);
}

#[test]
fn test_scorer_rejects_oversized_wrong_guess_budget() {
    let mut config = Config::default();
    config.bounds.max_wrong_guesses = 4_000_000_000;

    match Scorer::new(&config, TileInventory::default()) {
        Err(DifferentialError::Config(msg)) => {
            assert!(msg.contains("max_wrong_guesses"), "{}", msg)
        }
        Err(other) => panic!("expected config error, got {:?}", other),
        Ok(_) => panic!("expected config error, got a scorer"),
    }
}

// --- MALFORMED INPUT ---

#[test]
fn test_empty_log_is_unavailable() {
    let err = steep_scorer().score(&ActionLog::new()).unwrap_err();
    assert!(matches!(err, DifferentialError::DataUnavailable(_)));
}

#[test]
fn test_duplicate_flip_is_rejected() {
    let log = ActionLog::from(vec![
        flip(5, Difficulty::Hard),
        flip(5, Difficulty::Hard),
        Action::CorrectGuess,
    ]);
    let err = steep_scorer().score(&log).unwrap_err();
    assert!(matches!(err, DifferentialError::InvalidActionLog(_)));
}

#[test]
fn test_action_after_correct_guess_is_rejected() {
    let log = ActionLog::from(vec![
        flip(5, Difficulty::Hard),
        Action::CorrectGuess,
        flip(6, Difficulty::Hard),
    ]);
    let err = steep_scorer().score(&log).unwrap_err();
    assert!(matches!(err, DifferentialError::InvalidActionLog(_)));
}

#[rstest]
#[case(flip(12, Difficulty::Hard))] // off the board
#[case(flip(0, Difficulty::Hard))] // tile 0 is easy
fn test_log_checked_against_puzzle(#[case] bad: Action) {
    let scorer = Scorer::for_puzzle(&steep_config(), sample_puzzle()).unwrap();
    let log = ActionLog::from(vec![bad, Action::CorrectGuess]);

    let err = scorer.score(&log).unwrap_err();
    assert!(matches!(err, DifferentialError::InvalidActionLog(_)));
}

#[test]
fn test_puzzle_scorer_uses_board_inventory() {
    let mut puzzle = sample_puzzle();
    puzzle.tiles.truncate(6); // 2 easy, 3 medium, 1 hard
    let scorer = Scorer::for_puzzle(&steep_config(), puzzle).unwrap();

    assert_eq!(
        scorer.bounds.inventory(),
        TileInventory {
            easy: 2,
            medium: 3,
            hard: 1
        }
    );
    assert_close(scorer.compute_bounds().worst, 726.0);
}

#[test]
fn test_invalid_weights_are_rejected() {
    let mut config = steep_config();
    config.weights.cost_hard = 0.0;
    assert!(matches!(
        Scorer::new(&config, TileInventory::default()),
        Err(DifferentialError::Config(_))
    ));
}

// --- RESULT CONTENTS ---

#[test]
fn test_breakdown_matches_curve() {
    let result = steep_scorer().score(&game(&[0, 1], 2, true)).unwrap();
    let steps = &result.breakdown;

    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0].label, PointLabel::Flip(Difficulty::Easy));
    assert_eq!(steps[0].tile_index, Some(0));
    assert_close(steps[0].area, 40.5);
    assert_close(steps[1].area, 121.5);
    assert_close(steps[2].cost, 8.0);
    assert_eq!(steps[2].info, 0.0);
    assert_eq!(steps[2].efficiency, 0.0);
    assert_eq!(steps[4].label, PointLabel::CorrectGuess);
    assert_eq!(steps[4].cost, 0.0);

    let total: f64 = steps.iter().map(|s| s.area).sum();
    assert_close(total, result.raw_area);
}

#[test]
fn test_interpretation_for_won_game() {
    let result = steep_scorer().score(&game(&[0, 1], 2, true)).unwrap();
    let interp = &result.interpretation;

    assert_eq!(interp.tier, Some(Tier::Excellent));
    assert_eq!(interp.headline, "Diagnostic Efficiency: 85% - Excellent");
    assert!(interp.advice.starts_with("Strategic tips: "));
    assert!(interp.advice.contains("you had 2"));
    assert!(interp.explanation.contains("3.0x more info per cost"));
}

#[test]
fn test_result_serializes_camel_case() {
    let result = steep_scorer().score(&game(&[5], 0, true)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["rawArea"], 6.0);
    assert_eq!(json["normalizedScore"], 1.0);
    assert_eq!(json["gameWon"], true);
    assert_eq!(json["bounds"]["method"], "closed-form");
    assert!(json["curve"].is_array());
    assert!(json["interpretation"]["headline"].is_string());
}
