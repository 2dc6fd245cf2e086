//! Run configuration for a simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Configuration for starting a new simulation.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Agents that start susceptible.
    pub n_susceptible: u32,
    /// Agents that start infected.
    pub n_infected: u32,
    /// Domain width.
    pub width: f64,
    /// Domain height.
    pub height: f64,
    /// Radius given to every agent.
    pub radius: f64,
    /// Ticks between infection and its outcome.
    pub cycle_to_fate: u32,
    /// Probability that an outcome is death.
    pub mortality_rate: f64,
    /// Whether agents receive a random velocity kick each tick.
    pub jitter: bool,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Number of per-tick population samples kept in history.
    pub history_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            n_susceptible: DEFAULT_SUSCEPTIBLE,
            n_infected: DEFAULT_INFECTED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            cycle_to_fate: DEFAULT_CYCLE_TO_FATE,
            mortality_rate: DEFAULT_MORTALITY_RATE,
            jitter: false,
            seed: DEFAULT_SEED,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SimConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n_susceptible: u32,
        n_infected: u32,
        width: f64,
        height: f64,
        cycle_to_fate: u32,
        mortality_rate: f64,
        jitter: bool,
        seed: u64,
    ) -> Self {
        Self {
            n_susceptible,
            n_infected,
            width,
            height,
            cycle_to_fate,
            mortality_rate,
            jitter,
            seed,
            ..Self::default()
        }
    }

    /// Initial population size N, fixed for the lifetime of a run.
    ///
    /// Saturates on configs that `validate` would reject.
    pub fn population(&self) -> u32 {
        self.n_susceptible.saturating_add(self.n_infected)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_susceptible == 0 && self.n_infected == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.n_susceptible.checked_add(self.n_infected).is_none() {
            return Err(ConfigError::PopulationOverflow {
                susceptible: self.n_susceptible,
                infected: self.n_infected,
            });
        }
        if !(0.0..=1.0).contains(&self.mortality_rate) {
            return Err(ConfigError::MortalityOutOfRange(self.mortality_rate));
        }
        if self.cycle_to_fate == 0 {
            return Err(ConfigError::ZeroCycleToFate);
        }
        let bounds_ok = |v: f64| v.is_finite() && v > 0.0;
        if !bounds_ok(self.width) || !bounds_ok(self.height) {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !bounds_ok(self.radius) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}
