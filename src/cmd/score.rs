use crate::reports;
use clap::Args;
use differential::actions::ActionLog;
use differential::config::Config;
use differential::error::DfResult;
use differential::puzzle::PuzzleData;
use differential::scorer::Scorer;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Puzzle record (JSON).
    #[arg(short, long)]
    pub puzzle: PathBuf,

    /// Action log (JSON array, or CSV with a `.csv` extension).
    #[arg(short, long)]
    pub actions: PathBuf,

    /// Print the full result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ScoreArgs, config: &Config) -> DfResult<()> {
    let puzzle = PuzzleData::load_from_file(&args.puzzle)?;
    let log = ActionLog::load_from_file(&args.actions)?;
    let scorer = Scorer::for_puzzle(config, puzzle)?;

    let result = scorer.score(&log)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    reports::print_breakdown(&result);
    reports::print_bounds(&result.bounds);
    reports::print_score(&result);
    Ok(())
}
