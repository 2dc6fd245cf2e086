use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use contagion_app::cli::Cli;
use contagion_app::console;
use contagion_app::game_loop::{self, StopReason};
use contagion_app::state::HostState;
use contagion_core::stats::PopulationCounts;
use contagion_sim::SimulationEngine;

/// Final report printed to stdout as JSON.
#[derive(Serialize)]
struct RunSummary {
    reason: String,
    ticks: u64,
    elapsed_secs: f64,
    peak_infected: u32,
    counts: PopulationCounts,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.sim_config()?;
    let engine = SimulationEngine::initialize(config).context("invalid simulation config")?;
    info!(
        population = engine.config().population(),
        width = engine.config().width,
        height = engine.config().height,
        "Starting contagion simulation"
    );

    let host = Arc::new(HostState::new());
    let (command_tx, handle) = game_loop::spawn_game_loop(
        engine,
        cli.loop_settings(),
        Arc::clone(&host.latest_snapshot),
    );
    if let Ok(mut slot) = host.command_tx.lock() {
        *slot = Some(command_tx);
    }
    // Not joined: it stays blocked on stdin once the loop has finished.
    let _console = console::spawn_console(Arc::clone(&host));

    let outcome = handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    console::report_status(&host);

    let summary = RunSummary {
        reason: match outcome.reason {
            StopReason::Shutdown => "shutdown",
            StopReason::Disconnected => "disconnected",
            StopReason::TickLimit => "tick_limit",
            StopReason::BurnedOut => "burned_out",
        }
        .to_string(),
        ticks: outcome.snapshot.time.tick,
        elapsed_secs: outcome.snapshot.time.elapsed_secs,
        peak_infected: outcome.peak_infected,
        counts: outcome.snapshot.counts,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
