use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use differential::config::ScoringWeights;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with cost/info weights; explicit flags still win.
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one finished game.
    Score(cmd::score::ScoreArgs),
    /// Print the best/worst areas used for normalization.
    Bounds(cmd::bounds::BoundsArgs),
    /// Score many games of the same puzzle.
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    // 1. Parse raw matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    // 2. Config plus the subcommand matches the weight flags live in
    let (mut config, cli_weights_ref, sub_name) = match &cli.command {
        Commands::Score(args) => (args.config.clone(), &args.config.weights, "score"),
        Commands::Bounds(args) => (args.config.clone(), &args.config.weights, "bounds"),
        Commands::Batch(args) => (args.config.clone(), &args.config.weights, "batch"),
    };

    // 3. Weights file as the base, CLI overrides on top
    if let Some(path) = &cli.weights {
        info!("Loading weights from: {}", path);
        let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });
        if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
            file_weights.merge_from_cli(cli_weights_ref, sub_matches);
        }
        config.weights = file_weights;
    }

    // 4. Execute
    let outcome = match &cli.command {
        Commands::Score(args) => cmd::score::run(args, &config),
        Commands::Bounds(args) => cmd::bounds::run(args, &config),
        Commands::Batch(args) => cmd::batch::run(args, &config),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
