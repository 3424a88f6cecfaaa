use crate::reports;
use clap::Args;
use differential::config::Config;
use differential::error::DfResult;
use differential::puzzle::{PuzzleData, TileInventory};
use differential::scorer::Scorer;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct BoundsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Take the tile inventory from this puzzle instead of the standard board.
    #[arg(short, long)]
    pub puzzle: Option<PathBuf>,
}

pub fn run(args: &BoundsArgs, config: &Config) -> DfResult<()> {
    let scorer = match &args.puzzle {
        Some(path) => Scorer::for_puzzle(config, PuzzleData::load_from_file(path)?)?,
        None => Scorer::new(config, TileInventory::default())?,
    };

    let inv = scorer.bounds.inventory();
    println!(
        "\nBoard: {} easy, {} medium, {} hard; up to {} wrong guesses",
        inv.easy,
        inv.medium,
        inv.hard,
        scorer.bounds.params().max_wrong_guesses
    );
    reports::print_bounds(&scorer.compute_bounds());
    Ok(())
}
