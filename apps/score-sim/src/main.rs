//! Score simulator CLI - seeded in-memory game histories for the scorekeeper engines.
//!
//! Generates random but valid games, aggregates them with the statistics
//! layer and prints the views as JSON on stdout. Nothing is written to disk.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::{build_dice_report, build_trick_report};
use output::OutputWriter;
use scorekeeper::domain::rules::valid_player_count;
use scorekeeper::StatsConfig;
use simulator::Simulator;
use tracing::info;
use tracing_subscriber::EnvFilter;
use types::{Mode, OutputFormat};

#[derive(Parser)]
#[command(name = "score-sim")]
#[command(about = "Seeded game-history simulator for the scorekeeper engines")]
struct Args {
    /// Which game to simulate
    mode: Mode,

    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players seated at every table
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Player ids are drawn from 1..=K (defaults to the table size)
    #[arg(long)]
    player_pool: Option<usize>,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log a short run summary
    #[arg(long)]
    show_output: bool,

    /// Output format
    #[arg(long, default_value = "json")]
    format: OutputFormat,

    /// Stats configuration as inline JSON
    #[arg(long)]
    stats_config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors; RUST_LOG wins when set
    let level = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Dice tables may be solo or larger; trick tables follow the game rules
    let table = valid_player_count();
    if args.mode == Mode::Trick && !table.contains(&args.players) {
        return Err(format!(
            "trick games need {}..={} players, got {}",
            table.start(),
            table.end(),
            args.players
        )
        .into());
    }
    if args.players == 0 {
        return Err("at least one player is required".into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let pool = args.player_pool.unwrap_or(args.players);
    let config = match &args.stats_config {
        Some(raw) => {
            let json: serde_json::Value = serde_json::from_str(raw)?;
            StatsConfig::from_json(Some(&json))
        }
        None => StatsConfig::default(),
    };
    info!(
        mode = ?args.mode,
        games = args.games,
        players = args.players,
        pool,
        seed,
        "Starting simulator"
    );

    let start = Instant::now();
    let mut simulator = Simulator::new(seed, args.players, pool);
    let report = match args.mode {
        Mode::Trick => {
            let games = (1..=i64::from(args.games))
                .map(|id| simulator.trick_game(id))
                .collect::<Result<Vec<_>, _>>()?;
            build_trick_report(seed, &games)?
        }
        Mode::Dice => {
            let games = (1..=i64::from(args.games))
                .map(|id| simulator.dice_game(id))
                .collect::<Result<Vec<_>, _>>()?;
            build_dice_report(seed, &games, &config)
        }
    };

    let mut writer = OutputWriter::new(std::io::stdout().lock(), args.format);
    writer.write_report(&report)?;

    info!(
        games = report.game_count(),
        players = report.player_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Simulation finished"
    );

    Ok(())
}
