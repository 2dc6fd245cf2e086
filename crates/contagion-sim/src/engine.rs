//! Simulation engine — the core of the model.
//!
//! `SimulationEngine` owns the hecs ECS world and the seeded RNG, runs all
//! systems in a fixed order, and produces `SimulationSnapshot`s. Completely
//! headless, enabling deterministic testing.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use contagion_core::config::SimConfig;
use contagion_core::enums::EpidemicPhase;
use contagion_core::error::ConfigError;
use contagion_core::events::SimEvent;
use contagion_core::state::SimulationSnapshot;
use contagion_core::stats::{PopulationCounts, PopulationHistory};
use contagion_core::types::SimTime;

use crate::systems;
use crate::systems::outcome::Outcomes;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: EpidemicPhase,
    rng: ChaCha8Rng,
    next_agent_id: u32,
    dead_count: u32,
    outcomes: Outcomes,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    history: PopulationHistory,
}

impl SimulationEngine {
    /// Validate the config and populate the world with random agents.
    pub fn initialize(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: EpidemicPhase::Spreading,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_agent_id: 0,
            dead_count: 0,
            outcomes: Outcomes::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            history: PopulationHistory::new(config.history_capacity),
            config,
        };

        world_setup::spawn_population(
            &mut engine.world,
            &mut engine.rng,
            &engine.config,
            &mut engine.next_agent_id,
        );

        let counts = engine.counts();
        engine.history.record(counts);
        engine.update_phase(&counts);

        info!(
            susceptible = counts.susceptible,
            infected = counts.infected,
            seed = engine.config.seed,
            "Initialized simulation"
        );
        Ok(engine)
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// Agents keep moving after the epidemic burns out. Only a fully resolved
    /// population (no susceptible and no infected agents left) makes this a
    /// no-op: nothing moves and the clock does not advance.
    pub fn step(&mut self) {
        if self.is_resolved() {
            return;
        }

        let tick = self.time.tick + 1;
        let events_before = self.events.len();

        self.run_systems(tick);
        self.time.advance();

        let counts = self.counts();
        self.history.record(counts);

        let new_events = &self.events[events_before..];
        debug!(
            tick,
            infections = new_events
                .iter()
                .filter(|e| matches!(e, SimEvent::Infected { .. }))
                .count(),
            recoveries = new_events
                .iter()
                .filter(|e| matches!(e, SimEvent::Recovered { .. }))
                .count(),
            deaths = new_events
                .iter()
                .filter(|e| matches!(e, SimEvent::Died { .. }))
                .count(),
            "Tick resolved"
        );

        self.update_phase(&counts);
    }

    /// Read-only view of the current state. Pending events are included but not drained.
    pub fn snapshot(&self) -> SimulationSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.config.population(),
            self.events.clone(),
        )
    }

    /// Step once and return the resulting snapshot, draining pending events.
    pub fn tick(&mut self) -> SimulationSnapshot {
        self.step();
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.config.population(),
            events,
        )
    }

    /// Whether every live agent is in a terminal state.
    pub fn is_resolved(&self) -> bool {
        let counts = self.counts();
        counts.susceptible == 0 && counts.infected == 0
    }

    /// Current population counts.
    pub fn counts(&self) -> PopulationCounts {
        systems::snapshot::count_population(&self.world, self.config.population())
    }

    pub fn phase(&self) -> EpidemicPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Agents removed by death so far.
    pub fn dead_count(&self) -> u32 {
        self.dead_count
    }

    pub fn history(&self) -> &PopulationHistory {
        &self.history
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Overwrite an agent's kinematics (for tests needing exact placement).
    #[cfg(test)]
    pub fn place_agent(
        &mut self,
        id: contagion_core::components::AgentId,
        position: contagion_core::types::Position,
        velocity: contagion_core::types::Velocity,
    ) {
        use contagion_core::components::AgentId;
        use contagion_core::types::{Position, Velocity};

        for (_entity, (agent_id, pos, vel)) in
            self.world.query_mut::<(&AgentId, &mut Position, &mut Velocity)>()
        {
            if *agent_id == id {
                *pos = position;
                *vel = velocity;
            }
        }
    }

    /// Run all systems in order for the tick being executed.
    fn run_systems(&mut self, tick: u64) {
        // 1. Motion for every live agent
        systems::movement::run(
            &mut self.world,
            &mut self.rng,
            self.config.width,
            self.config.height,
        );
        // 2. Outcome clocks
        systems::outcome::run(&mut self.world, &mut self.rng, &mut self.outcomes);
        // 3. Remove the newly dead
        systems::transitions::kill(&mut self.world, &self.outcomes.deaths, &mut self.events, tick);
        self.dead_count += systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 4. New infections against the post-removal infected set
        systems::transitions::infect(
            &mut self.world,
            self.config.cycle_to_fate,
            self.config.mortality_rate,
            &mut self.events,
            tick,
        );
        // 5. Recoveries flagged in step 2
        systems::transitions::recover(
            &mut self.world,
            &self.outcomes.recoveries,
            &mut self.events,
            tick,
        );
    }

    fn update_phase(&mut self, counts: &PopulationCounts) {
        if self.phase == EpidemicPhase::Spreading && counts.infected == 0 {
            self.phase = EpidemicPhase::BurnedOut;
            info!(
                tick = self.time.tick,
                recovered = counts.recovered,
                dead = counts.dead,
                susceptible = counts.susceptible,
                "Epidemic burned out"
            );
        }
    }
}
