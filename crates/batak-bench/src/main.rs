use std::path::PathBuf;

use clap::Parser;

use batak_bench::config::{BenchmarkConfig, ResolvedOutputs};
use batak_bench::logging::init_logging;
use batak_bench::tournament::TournamentRunner;

/// Tournament benchmarking harness for Batak bots.
#[derive(Debug, Parser)]
#[command(
    name = "batak-bench",
    author,
    version,
    about = "Deterministic Batak bot tournament harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/batak.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of rounds to play.
    #[arg(long, value_name = "ROUNDS")]
    rounds: Option<usize>,

    /// Override the master RNG seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no tournament is run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchmarkConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(rounds) = cli.rounds {
        config.rounds.count = rounds;
    }

    if let Some(seed) = cli.seed {
        config.rounds.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let mode = config.mode;
    let rounds = config.rounds.count;
    let seat_count = config.seats.len();

    println!("Loaded configuration '{run_id}': {mode} with {seat_count} seats, {rounds} rounds");

    let logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = TournamentRunner::new(config, outputs)?;

    if cli.validate_only {
        println!("Validation-only mode: tournament execution skipped.");
        return Ok(());
    }

    let summary = runner.run()?;
    println!(
        "Tournament complete for '{run_id}': {} rounds -> {} rows at {}",
        summary.rounds_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!("Summary: {}", summary.summary_path.display());
    for seat in &summary.standings.seats {
        println!(
            "  seat {} {:<12} {:<10} wins {:>4}  batak {:>4}  mean {:>8.2}",
            seat.seat, seat.name, seat.difficulty, seat.wins, seat.batak_count, seat.mean_score
        );
    }
    if let Some(leader) = summary.standings.leader {
        println!("  leader: seat {leader}");
    }
    if summary.standings.drawn_rounds > 0 {
        println!("  rounds without a winner: {}", summary.standings.drawn_rounds);
    }
    if let Some(guard) = logging_guard.as_ref() {
        println!("Telemetry log: {}", guard.telemetry_path.display());
    }

    Ok(())
}
