//! Console commands read from stdin while the loop runs.
//!
//! One command per line: `pause`, `resume`, `status`, `quit`.

use std::io::BufRead;
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{info, warn};

use crate::state::{HostState, LoopCommand};

/// A parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Forward to the loop thread.
    Loop(LoopCommand),
    /// Log the latest published population counts.
    Status,
}

pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "pause" | "p" => Some(ConsoleCommand::Loop(LoopCommand::Pause)),
        "resume" | "r" => Some(ConsoleCommand::Loop(LoopCommand::Resume)),
        "quit" | "q" | "exit" => Some(ConsoleCommand::Loop(LoopCommand::Shutdown)),
        "status" | "s" => Some(ConsoleCommand::Status),
        _ => None,
    }
}

/// Read commands until EOF, a read error, `quit`, or the loop going away.
pub fn run_console<R: BufRead>(input: R, host: &HostState) {
    for line in input.lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(ConsoleCommand::Loop(command)) => {
                if !host.send(command) || command == LoopCommand::Shutdown {
                    break;
                }
            }
            Some(ConsoleCommand::Status) => report_status(host),
            None => warn!(
                input = line.trim(),
                "Unknown command (expected pause, resume, status, quit)"
            ),
        }
    }
}

/// Log the counts from the most recently published snapshot.
pub fn report_status(host: &HostState) {
    match host.latest() {
        Some(snapshot) => info!(
            tick = snapshot.time.tick,
            phase = ?snapshot.phase,
            susceptible = snapshot.counts.susceptible,
            infected = snapshot.counts.infected,
            recovered = snapshot.counts.recovered,
            dead = snapshot.counts.dead,
            "Status"
        ),
        None => info!("Status: no tick has run yet"),
    }
}

/// Spawns a thread that feeds stdin lines to the loop through `host`.
pub fn spawn_console(host: Arc<HostState>) -> JoinHandle<()> {
    std::thread::Builder::new()
        .name("contagion-console".into())
        .spawn(move || run_console(std::io::stdin().lock(), &host))
        .expect("Failed to spawn console thread")
}
