//! State shared between the host and the loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use contagion_core::state::SimulationSnapshot;

/// Commands sent from the host to the loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// Stop stepping; the last snapshot stays published.
    Pause,
    /// Continue stepping after a pause.
    Resume,
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// The snapshot slot is only written after a step has fully resolved, so a
/// reader never observes a partial tick.
pub struct HostState {
    /// Channel sender to forward commands to the loop thread.
    /// `None` before the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SimulationSnapshot>>>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop thread. Returns false if no loop is listening.
    pub fn send(&self, command: LoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard
                .as_ref()
                .map(|tx| tx.send(command).is_ok())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Copy of the most recently published snapshot.
    pub fn latest(&self) -> Option<SimulationSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
