use crate::error::{DfResult, DifferentialError};
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub bounds: BoundsParams,
}

/// Raw cost and information units per difficulty tier.
///
/// These are unvalidated; `scorer::setup::build_configuration` turns them
/// into a `ScoringConfiguration` and rejects inconsistent values.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === COST ===
    #[arg(long, default_value_t = 8.0)]
    pub cost_easy: f64,
    #[arg(long, default_value_t = 4.0)]
    pub cost_medium: f64,
    #[arg(long, default_value_t = 1.0)]
    pub cost_hard: f64,
    #[arg(long, default_value_t = 10.0)]
    pub cost_wrong: f64,

    // === INFO ===
    #[arg(long, default_value_t = 2.0)]
    pub info_easy: f64,
    #[arg(long, default_value_t = 4.0)]
    pub info_medium: f64,
    #[arg(long, default_value_t = 9.0)]
    pub info_hard: f64,
}

// Expert scheme: hard tiles yield 9.0 info/cost, easy ones 0.25.
impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost_easy: 8.0,
            cost_medium: 4.0,
            cost_hard: 1.0,
            cost_wrong: 10.0,
            info_easy: 2.0,
            info_medium: 4.0,
            info_hard: 9.0,
        }
    }
}

#[derive(ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BoundsMethod {
    /// Exact bounds for a fixed tile inventory and attempt budget.
    ClosedForm,
    /// Monte Carlo estimate over random legal games plus extreme games.
    Sampled,
}

/// Upper limit on the wrong-guess budget used to build bound games.
pub const MAX_WRONG_GUESSES: u32 = 100;
/// Upper limit on Monte Carlo games per sampled bounds estimate.
pub const MAX_BOUNDS_SAMPLES: usize = 100_000;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsParams {
    #[arg(long, value_enum, default_value_t = BoundsMethod::ClosedForm)]
    pub bounds_method: BoundsMethod,
    #[arg(long, default_value_t = 100, value_parser = parse_samples)]
    pub bounds_samples: usize,
    #[arg(long)]
    pub bounds_seed: Option<u64>,
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(..=MAX_WRONG_GUESSES as i64)
    )]
    pub max_wrong_guesses: u32,
}

impl Default for BoundsParams {
    fn default() -> Self {
        Self {
            bounds_method: BoundsMethod::ClosedForm,
            bounds_samples: 100,
            bounds_seed: None,
            max_wrong_guesses: 2,
        }
    }
}

impl BoundsParams {
    /// Rejects budgets that would build oversized bound games. Values from
    /// a deserialized config skip the CLI range checks, so the scorer calls
    /// this as well.
    pub fn validate(&self) -> DfResult<()> {
        if self.max_wrong_guesses > MAX_WRONG_GUESSES {
            return Err(DifferentialError::Config(format!(
                "max_wrong_guesses must be at most {}, got {}",
                MAX_WRONG_GUESSES, self.max_wrong_guesses
            )));
        }
        if self.bounds_samples > MAX_BOUNDS_SAMPLES {
            return Err(DifferentialError::Config(format!(
                "bounds_samples must be at most {}, got {}",
                MAX_BOUNDS_SAMPLES, self.bounds_samples
            )));
        }
        Ok(())
    }
}

fn parse_samples(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{}", e))?;
    if n > MAX_BOUNDS_SAMPLES {
        return Err(format!("must be at most {}", MAX_BOUNDS_SAMPLES));
    }
    Ok(n)
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DifferentialError::Config(format!(
                "Failed to read weights file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(cost_easy, "cost_easy");
        update_if_present!(cost_medium, "cost_medium");
        update_if_present!(cost_hard, "cost_hard");
        update_if_present!(cost_wrong, "cost_wrong");

        update_if_present!(info_easy, "info_easy");
        update_if_present!(info_medium, "info_medium");
        update_if_present!(info_hard, "info_hard");
    }
}
