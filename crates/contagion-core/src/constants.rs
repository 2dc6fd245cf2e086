//! Simulation constants and tuning parameters.

/// Nominal step rate of the host loop (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Default domain width in pixels.
pub const DEFAULT_WIDTH: f64 = 1000.0;

/// Default domain height in pixels.
pub const DEFAULT_HEIGHT: f64 = 800.0;

// --- Agents ---

/// Default agent radius. Contact distance is the sum of two radii.
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Speed above which a velocity is collapsed to unit length.
/// Collapsing goes to 1.0, not to this value.
pub const MAX_SPEED: f64 = 3.0;

/// Half-width of the per-component Brownian kick added each tick.
pub const JITTER_AMPLITUDE: f64 = 1.0;

/// Half-width of the per-component initial velocity.
pub const INITIAL_SPEED_RANGE: f64 = 1.0;

// --- Epidemic ---

/// Default number of initially susceptible agents.
pub const DEFAULT_SUSCEPTIBLE: u32 = 50;

/// Default number of initially infected agents.
pub const DEFAULT_INFECTED: u32 = 1;

/// Default ticks between infection and outcome.
pub const DEFAULT_CYCLE_TO_FATE: u32 = 20;

/// Default probability that an outcome is death.
pub const DEFAULT_MORTALITY_RATE: f64 = 0.1;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Statistics ---

/// Number of per-tick population samples retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 600;

// --- Palette (RGB) ---

pub const COLOR_SUSCEPTIBLE: [u8; 3] = [166, 16, 30];
pub const COLOR_INFECTED: [u8; 3] = [129, 162, 99];
pub const COLOR_RECOVERED: [u8; 3] = [90, 99, 156];
pub const COLOR_DEAD: [u8; 3] = [0, 0, 0];
