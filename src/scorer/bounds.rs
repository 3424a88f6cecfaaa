use super::curve::build_curve;
use super::integrate::integrate;
use super::setup::ScoringConfiguration;
use crate::actions::Action;
use crate::config::{BoundsMethod, BoundsParams};
use crate::puzzle::{Difficulty, TileInventory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaDistribution {
    pub p10: f64,
    pub median: f64,
    pub p90: f64,
}

/// Best-case and worst-case curve areas used for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub best: f64,
    pub worst: f64,
    pub method: BoundsMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<AreaDistribution>,
}

impl Bounds {
    /// Sampled bounds are estimates, not guaranteed extremes.
    pub fn is_exact(&self) -> bool {
        self.method == BoundsMethod::ClosedForm
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BoundsKey {
    weights: [u64; 7],
    inventory: TileInventory,
    max_wrong_guesses: u32,
    method: BoundsMethod,
    samples: usize,
    seed: Option<u64>,
}

impl BoundsKey {
    fn new(config: &ScoringConfiguration, params: &BoundsParams, inventory: TileInventory) -> Self {
        Self {
            weights: config.canonical_bits(),
            inventory,
            max_wrong_guesses: params.max_wrong_guesses,
            method: params.bounds_method,
            samples: params.bounds_samples,
            seed: params.bounds_seed,
        }
    }
}

/// Computes bounds for a board and memoizes them per configuration.
///
/// The cache is read-mostly; concurrent misses may compute the same key
/// twice, and the first value stored wins so every caller sees identical
/// bounds.
pub struct BoundsEstimator {
    params: BoundsParams,
    inventory: TileInventory,
    cache: RwLock<HashMap<BoundsKey, Bounds>>,
}

impl BoundsEstimator {
    pub fn new(params: BoundsParams, inventory: TileInventory) -> Self {
        Self {
            params,
            inventory,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn params(&self) -> &BoundsParams {
        &self.params
    }

    pub fn inventory(&self) -> TileInventory {
        self.inventory
    }

    pub fn cached_entries(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn compute_bounds(&self, config: &ScoringConfiguration) -> Bounds {
        let key = BoundsKey::new(config, &self.params, self.inventory);
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(bounds) = cache.get(&key) {
                debug!("Bounds cache hit");
                return *bounds;
            }
        }

        let computed = match self.params.bounds_method {
            BoundsMethod::ClosedForm => {
                closed_form(config, self.inventory, self.params.max_wrong_guesses)
            }
            BoundsMethod::Sampled => {
                let mut rng = match self.params.bounds_seed {
                    Some(seed) => fastrand::Rng::with_seed(seed),
                    None => fastrand::Rng::new(),
                };
                let bounds = sampled(
                    config,
                    self.inventory,
                    self.params.max_wrong_guesses,
                    self.params.bounds_samples,
                    &mut rng,
                );
                warn!(
                    "Bounds estimated from {} samples; treat as approximate",
                    self.params.bounds_samples
                );
                bounds
            }
        };
        info!(
            "Bounds ({}): best={:.2}, worst={:.2}",
            computed.method, computed.best, computed.worst
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        *cache.entry(key).or_insert(computed)
    }
}

/// Exact bounds for a fixed inventory and attempt budget.
///
/// Best is a single flip of the most efficient tier followed by a correct
/// guess. Worst flips every tile from least to most efficient tier, then
/// spends every wrong guess before guessing correctly.
pub fn closed_form(
    config: &ScoringConfiguration,
    inventory: TileInventory,
    max_wrong_guesses: u32,
) -> Bounds {
    let top = config.most_efficient();
    let best = config.cost(top) * config.info(top) / 2.0;

    let worst = sequence_area(
        &worst_sequence(config, inventory, max_wrong_guesses),
        config,
    );

    Bounds {
        best,
        worst,
        method: BoundsMethod::ClosedForm,
        distribution: None,
    }
}

/// Monte Carlo bounds: random legal games unioned with a few extreme
/// ones. The min/max are estimates and tighten as `samples` grows.
pub fn sampled(
    config: &ScoringConfiguration,
    inventory: TileInventory,
    max_wrong_guesses: u32,
    samples: usize,
    rng: &mut fastrand::Rng,
) -> Bounds {
    let board = inventory.tiles();
    let mut areas = Vec::with_capacity(samples + 4);

    for _ in 0..samples {
        let mut order: Vec<usize> = (0..board.len()).collect();
        rng.shuffle(&mut order);
        let picked = if board.is_empty() {
            0
        } else {
            rng.usize(1..=board.len())
        };
        order.truncate(picked);

        let wrong = rng.u32(0..=max_wrong_guesses);
        let actions = game_sequence(order.iter().map(|&i| (i, board[i])), wrong);
        areas.push(sequence_area(&actions, config));
    }

    for actions in extreme_sequences(config, inventory, max_wrong_guesses) {
        areas.push(sequence_area(&actions, config));
    }

    areas.sort_by(|a, b| a.total_cmp(b));
    let at = |q: f64| areas[((areas.len() as f64 * q) as usize).min(areas.len() - 1)];

    Bounds {
        best: areas[0],
        worst: areas[areas.len() - 1],
        method: BoundsMethod::Sampled,
        distribution: Some(AreaDistribution {
            p10: at(0.1),
            median: at(0.5),
            p90: at(0.9),
        }),
    }
}

fn sequence_area(actions: &[Action], config: &ScoringConfiguration) -> f64 {
    integrate(&build_curve(actions, config))
}

/// Flips in the given order, then `wrong` wrong guesses, then the answer.
fn game_sequence<I>(flips: I, wrong: u32) -> Vec<Action>
where
    I: IntoIterator<Item = (usize, Difficulty)>,
{
    let mut actions: Vec<Action> = flips
        .into_iter()
        .map(|(tile_index, difficulty)| Action::TileFlip {
            tile_index,
            difficulty,
        })
        .collect();
    actions.extend((0..wrong).map(|_| Action::WrongGuess));
    actions.push(Action::CorrectGuess);
    actions
}

fn tiles_of(
    board: &[Difficulty],
    difficulty: Difficulty,
) -> impl Iterator<Item = (usize, Difficulty)> + '_ {
    board
        .iter()
        .enumerate()
        .filter(move |(_, d)| **d == difficulty)
        .map(|(i, d)| (i, *d))
}

fn worst_sequence(
    config: &ScoringConfiguration,
    inventory: TileInventory,
    max_wrong_guesses: u32,
) -> Vec<Action> {
    let board = inventory.tiles();
    let flips: Vec<(usize, Difficulty)> = config
        .tiers_by_efficiency()
        .into_iter()
        .flat_map(|tier| tiles_of(&board, tier).collect::<Vec<_>>())
        .collect();
    game_sequence(flips, max_wrong_guesses)
}

fn extreme_sequences(
    config: &ScoringConfiguration,
    inventory: TileInventory,
    max_wrong_guesses: u32,
) -> Vec<Vec<Action>> {
    let board = inventory.tiles();
    let mut out = Vec::with_capacity(4);

    // Most efficient tier actually on the board.
    let top = config
        .tiers_by_efficiency()
        .into_iter()
        .rev()
        .find(|tier| inventory.count(*tier) > 0);

    if let Some(top) = top {
        out.push(game_sequence(tiles_of(&board, top).take(1), 0));
        out.push(game_sequence(tiles_of(&board, top), 0));
    }

    let mix: Vec<(usize, Difficulty)> = Difficulty::iter()
        .filter_map(|tier| tiles_of(&board, tier).next())
        .collect();
    if !mix.is_empty() {
        out.push(game_sequence(mix, max_wrong_guesses.min(1)));
    }

    out.push(worst_sequence(config, inventory, max_wrong_guesses));
    out
}
