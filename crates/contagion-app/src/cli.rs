//! Command-line interface: builds the run configuration from a JSON file and flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use contagion_core::config::SimConfig;

use crate::game_loop::LoopSettings;

#[derive(Parser, Debug)]
#[command(
    name = "contagion",
    version,
    about = "Agent-based SIR epidemic simulation with collision-driven contact"
)]
pub struct Cli {
    /// JSON file holding a simulation config; flags below override its fields.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Agents that start susceptible.
    #[arg(long)]
    pub susceptible: Option<u32>,

    /// Agents that start infected.
    #[arg(long)]
    pub infected: Option<u32>,

    #[arg(long)]
    pub width: Option<f64>,

    #[arg(long)]
    pub height: Option<f64>,

    /// Ticks between infection and its outcome.
    #[arg(long)]
    pub cycle_to_fate: Option<u32>,

    /// Probability that an outcome is death.
    #[arg(long)]
    pub mortality_rate: Option<f64>,

    /// Enable the random velocity kick applied each tick.
    #[arg(long, overrides_with = "no_jitter")]
    pub jitter: bool,

    /// Disable the random velocity kick applied each tick.
    #[arg(long, overrides_with = "jitter")]
    pub no_jitter: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many ticks (default: run until the epidemic burns out).
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Steps per second; 0 runs unpaced.
    #[arg(long, default_value_t = contagion_core::constants::TICK_RATE)]
    pub rate: u32,

    /// Log a population summary every N ticks; 0 disables.
    #[arg(long, default_value_t = 30)]
    pub report_every: u64,
}

impl Cli {
    /// Resolve the simulation config: the `--config` file (or the demo run
    /// when absent), then every flag given on the command line.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => demo_config(),
        };

        if let Some(n) = self.susceptible {
            config.n_susceptible = n;
        }
        if let Some(n) = self.infected {
            config.n_infected = n;
        }
        if let Some(cycle) = self.cycle_to_fate {
            config.cycle_to_fate = cycle;
        }
        if let Some(rate) = self.mortality_rate {
            config.mortality_rate = rate;
        }
        if self.jitter {
            config.jitter = true;
        }
        if self.no_jitter {
            config.jitter = false;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }

    pub fn loop_settings(&self) -> LoopSettings {
        LoopSettings {
            rate_hz: self.rate,
            max_ticks: self.ticks,
            report_every: self.report_every,
        }
    }
}

/// The demo outbreak: a larger crowd, a long illness, and Brownian motion.
pub fn demo_config() -> SimConfig {
    SimConfig {
        n_susceptible: 200,
        n_infected: 1,
        cycle_to_fate: 200,
        mortality_rate: 0.1,
        jitter: true,
        ..SimConfig::default()
    }
}

/// Read a `SimConfig` from a JSON file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
}
