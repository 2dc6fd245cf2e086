//! Game loop thread — steps the engine at a fixed rate and publishes snapshots.
//!
//! Commands arrive via `mpsc` channel. Each snapshot is stored in shared state
//! only after its tick has fully resolved.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use contagion_core::enums::EpidemicPhase;
use contagion_core::state::SimulationSnapshot;
use contagion_sim::engine::SimulationEngine;

use crate::state::LoopCommand;

/// How fast and how long the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSettings {
    /// Steps per second; 0 runs as fast as possible.
    pub rate_hz: u32,
    /// Stop after this many ticks.
    pub max_ticks: Option<u64>,
    /// Log a population summary every this many ticks; 0 disables.
    pub report_every: u64,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            rate_hz: contagion_core::constants::TICK_RATE,
            max_ticks: None,
            report_every: contagion_core::constants::TICK_RATE as u64,
        }
    }
}

impl LoopSettings {
    /// Nominal duration of one tick, or `None` when unpaced.
    pub fn tick_duration(&self) -> Option<Duration> {
        (self.rate_hz > 0).then(|| Duration::from_nanos(1_000_000_000 / self.rate_hz as u64))
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Shutdown,
    Disconnected,
    TickLimit,
    BurnedOut,
}

/// Final result handed back when the loop thread joins.
#[derive(Debug, Clone)]
pub struct LoopOutcome {
    pub reason: StopReason,
    pub snapshot: SimulationSnapshot,
    pub peak_infected: u32,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle to join for the outcome.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    settings: LoopSettings,
    latest_snapshot: Arc<Mutex<Option<SimulationSnapshot>>>,
) -> (mpsc::Sender<LoopCommand>, JoinHandle<LoopOutcome>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("contagion-loop".into())
        .spawn(move || run_game_loop(engine, settings, cmd_rx, &latest_snapshot))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until shutdown, disconnect, tick limit, or burn-out.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimulationSnapshot>>,
) -> LoopOutcome {
    let tick_duration = settings.tick_duration();
    let mut next_tick_time = Instant::now();
    let mut paused = false;
    let mut peak_infected = engine.counts().infected;

    let stop = |engine: &SimulationEngine, reason: StopReason, peak_infected: u32| {
        info!(?reason, tick = engine.time().tick, "Game loop stopped");
        LoopOutcome {
            reason,
            snapshot: engine.snapshot(),
            peak_infected,
        }
    };

    loop {
        // 1. Drain pending commands; block while paused.
        loop {
            let received = if paused {
                cmd_rx.recv().map_err(|_| mpsc::TryRecvError::Disconnected)
            } else {
                cmd_rx.try_recv()
            };
            match received {
                Ok(LoopCommand::Pause) => {
                    debug!("Paused");
                    paused = true;
                }
                Ok(LoopCommand::Resume) => {
                    debug!("Resumed");
                    paused = false;
                    next_tick_time = Instant::now();
                }
                Ok(LoopCommand::Shutdown) => {
                    return stop(&engine, StopReason::Shutdown, peak_infected)
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    return stop(&engine, StopReason::Disconnected, peak_infected)
                }
            }
        }

        // 2. Advance one full tick
        let snapshot = engine.tick();
        let tick = snapshot.time.tick;
        peak_infected = peak_infected.max(snapshot.counts.infected);

        if settings.report_every > 0 && tick % settings.report_every == 0 {
            info!(
                tick,
                susceptible = snapshot.counts.susceptible,
                infected = snapshot.counts.infected,
                recovered = snapshot.counts.recovered,
                dead = snapshot.counts.dead,
                "Population"
            );
        }

        // 3. Publish the resolved snapshot
        let burned_out = snapshot.phase == EpidemicPhase::BurnedOut;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if burned_out {
            return stop(&engine, StopReason::BurnedOut, peak_infected);
        }
        if settings.max_ticks.is_some_and(|max| tick >= max) {
            return stop(&engine, StopReason::TickLimit, peak_infected);
        }

        // 4. Sleep until next tick
        if let Some(tick_duration) = tick_duration {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}
