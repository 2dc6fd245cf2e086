//! Errors raised while validating a simulation configuration.

use thiserror::Error;

/// A configuration that cannot produce a meaningful run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: population must contain at least one agent")]
    EmptyPopulation,
    #[error("invalid configuration: population {susceptible} + {infected} exceeds u32::MAX")]
    PopulationOverflow { susceptible: u32, infected: u32 },
    #[error("invalid configuration: mortality rate {0} must be between 0.0 and 1.0")]
    MortalityOutOfRange(f64),
    #[error("invalid configuration: cycle_to_fate must be positive")]
    ZeroCycleToFate,
    #[error("invalid configuration: bounds {width}x{height} must be positive and finite")]
    InvalidBounds { width: f64, height: f64 },
    #[error("invalid configuration: radius {0} must be positive and finite")]
    InvalidRadius(f64),
}
