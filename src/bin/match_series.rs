//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin match_series`
//! `cargo run --release --bin match_series -- --games 25 --seed 99`

use breakwave::engines::engine_greedy::GreedyEngine;
use breakwave::engines::engine_threat_wave::ThreatWaveEngine;
use breakwave::engines::engine_trait::Engine;
use breakwave::utils::match_harness::{play_match_series, MatchSeriesConfig};

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let games = flag_value(&args, "--games").unwrap_or(9);
    let base_seed = flag_value(&args, "--seed").unwrap_or(1234);

    // Player 1 is the engine under test; swap these lines to experiment.
    let player1 = || Box::new(ThreatWaveEngine::new()) as Box<dyn Engine>;
    let player2 = || Box::new(GreedyEngine::new()) as Box<dyn Engine>;

    let stats = play_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games,
            base_seed,
            ..MatchSeriesConfig::default()
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let position = args.iter().position(|a| a == flag)?;
    args.get(position + 1)?.parse().ok()
}
