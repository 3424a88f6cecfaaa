use crate::reports;
use clap::Args;
use differential::actions::ActionLog;
use differential::config::Config;
use differential::error::DfResult;
use differential::puzzle::PuzzleData;
use differential::scorer::Scorer;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub puzzle: PathBuf,

    /// Action logs to score.
    #[arg(required = true)]
    pub logs: Vec<PathBuf>,
}

pub fn run(args: &BatchArgs, config: &Config) -> DfResult<()> {
    let puzzle = PuzzleData::load_from_file(&args.puzzle)?;
    let scorer = Scorer::for_puzzle(config, puzzle)?;

    info!("Scoring {} games", args.logs.len());

    // The bounds cache is shared by every worker.
    let results: Vec<_> = args
        .logs
        .par_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let scored = ActionLog::load_from_file(path).and_then(|log| scorer.score(&log));
            (name, scored)
        })
        .collect();

    let mut rows = Vec::with_capacity(results.len());
    for (name, scored) in results {
        match scored {
            Ok(result) => rows.push((name, result)),
            Err(e) => warn!("Skipping {}: {}", name, e),
        }
    }

    rows.sort_by(|a, b| b.1.normalized_score.total_cmp(&a.1.normalized_score));
    reports::print_batch_summary(&rows);
    Ok(())
}
