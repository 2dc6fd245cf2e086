#[cfg(test)]
mod tests {
    use crate::components::AgentId;
    use crate::config::SimConfig;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::SimEvent;
    use crate::state::{AgentView, SimulationSnapshot};
    use crate::stats::*;
    use crate::types::{Position, SimTime, Velocity};

    // ---- Configuration ----

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_empty_population_rejected() {
        let config = SimConfig {
            n_susceptible: 0,
            n_infected: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_population_overflow_rejected() {
        let config = SimConfig {
            n_susceptible: u32::MAX,
            n_infected: 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PopulationOverflow {
                susceptible: u32::MAX,
                infected: 1,
            })
        );
        assert_eq!(config.population(), u32::MAX);

        let at_limit = SimConfig {
            n_susceptible: u32::MAX - 1,
            n_infected: 1,
            ..Default::default()
        };
        assert_eq!(at_limit.validate(), Ok(()));
    }

    #[test]
    fn test_only_infected_population_accepted() {
        let config = SimConfig {
            n_susceptible: 0,
            n_infected: 3,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.population(), 3);
    }

    #[test]
    fn test_mortality_bounds() {
        for rate in [-0.01, 1.01, f64::NAN] {
            let config = SimConfig {
                mortality_rate: rate,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::MortalityOutOfRange(_))),
                "mortality {rate} should be rejected"
            );
        }
        for rate in [0.0, 0.5, 1.0] {
            let config = SimConfig {
                mortality_rate: rate,
                ..Default::default()
            };
            assert_eq!(config.validate(), Ok(()), "mortality {rate} should be accepted");
        }
    }

    #[test]
    fn test_zero_cycle_to_fate_rejected() {
        let config = SimConfig {
            cycle_to_fate: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCycleToFate));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let config = SimConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));

        let config = SimConfig {
            radius: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadius(-1.0)));
    }

    #[test]
    fn test_config_error_message() {
        let msg = ConfigError::MortalityOutOfRange(2.0).to_string();
        assert!(msg.starts_with("invalid configuration"), "got {msg}");
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_partial_config_json_uses_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "n_susceptible": 200, "jitter": true }"#).unwrap();
        assert_eq!(config.n_susceptible, 200);
        assert!(config.jitter);
        assert_eq!(config.n_infected, 1);
        assert_eq!(config.cycle_to_fate, 20);
        assert_eq!(config.width, 1000.0);
        assert_eq!(config.height, 800.0);
    }

    #[test]
    fn test_config_new_matches_fields() {
        let config = SimConfig::new(10, 1, 100.0, 100.0, 5, 0.0, false, 42);
        assert_eq!(config.n_susceptible, 10);
        assert_eq!(config.n_infected, 1);
        assert_eq!(config.cycle_to_fate, 5);
        assert_eq!(config.seed, 42);
        assert_eq!(config.radius, 5.0);
    }

    // ---- Types ----

    #[test]
    fn test_normalize_zero_velocity_is_noop() {
        let v = Velocity::new(0.0, 0.0).normalized();
        assert_eq!(v, Velocity::new(0.0, 0.0));
    }

    #[test]
    fn test_normalize_to_unit() {
        let v = Velocity::new(10.0, 0.0).normalized();
        assert!((v.speed() - 1.0).abs() < 1e-12);
        assert!((v.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_velocity() {
        assert_eq!(
            Velocity::new(1.5, -2.0).reversed(),
            Velocity::new(-1.5, 2.0)
        );
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Enums ----

    #[test]
    fn test_state_colors_distinct() {
        let colors = [
            HealthState::Susceptible.color(),
            HealthState::Infected.color(),
            HealthState::Recovered.color(),
            HealthState::Dead.color(),
        ];
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!HealthState::Susceptible.is_terminal());
        assert!(!HealthState::Infected.is_terminal());
        assert!(HealthState::Recovered.is_terminal());
        assert!(HealthState::Dead.is_terminal());
    }

    #[test]
    fn test_event_serde_is_tagged() {
        let event = SimEvent::Died {
            id: AgentId(7),
            tick: 12,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"Died""#), "got {json}");
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.id(), AgentId(7));
    }

    // ---- Statistics ----

    #[test]
    fn test_counts_from_live() {
        let counts = PopulationCounts::from_live(5, 3, 2, 12);
        assert_eq!(counts.dead, 2);
        assert_eq!(counts.live(), 10);
        assert_eq!(
            counts.susceptible + counts.infected + counts.recovered + counts.dead,
            counts.total
        );
    }

    #[test]
    fn test_stacked_bands_truncate() {
        let counts = PopulationCounts::from_live(100, 50, 30, 201);
        let bands = StackedBands::from_counts(&counts, 160);
        // 100/201*160 = 79.6, 50/201*160 = 39.8, 30/201*160 = 23.9
        assert_eq!(bands.susceptible, 79);
        assert_eq!(bands.infected, 39);
        assert_eq!(bands.recovered, 23);
        assert_eq!(bands.dead(160), 160 - 79 - 39 - 23);
    }

    #[test]
    fn test_stacked_bands_empty_population() {
        let bands = StackedBands::from_counts(&PopulationCounts::default(), 100);
        assert_eq!(bands, StackedBands::default());
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = PopulationHistory::new(3);
        for infected in 0..5 {
            history.record(PopulationCounts::from_live(10 - infected, infected, 0, 10));
        }
        assert_eq!(history.len(), 3);
        let infected: Vec<u32> = history.iter().map(|c| c.infected).collect();
        assert_eq!(infected, vec![2, 3, 4]);
        assert_eq!(history.latest().map(|c| c.infected), Some(4));
        assert_eq!(history.peak_infected(), 4);
    }

    #[test]
    fn test_history_zero_capacity() {
        let mut history = PopulationHistory::new(0);
        history.record(PopulationCounts::from_live(1, 0, 0, 1));
        assert!(history.is_empty());
        assert_eq!(history.peak_infected(), 0);
    }

    #[test]
    fn test_chart_column_advances_once_per_second() {
        assert_eq!(chart_column(0, 200), 0);
        assert_eq!(chart_column(29, 200), 0);
        assert_eq!(chart_column(30, 200), 1);
        assert_eq!(chart_column(300, 200), 10);
        assert_eq!(chart_column(1_000_000, 200), 199);
        assert_eq!(chart_column(5, 0), 0);
    }

    // ---- Snapshot ----

    fn view(id: u32, state: HealthState) -> AgentView {
        AgentView {
            id: AgentId(id),
            position: Position::default(),
            velocity: Velocity::default(),
            radius: 5.0,
            state,
            color: state.color(),
        }
    }

    #[test]
    fn test_snapshot_lookup() {
        let snapshot = SimulationSnapshot {
            agents: vec![
                view(0, HealthState::Susceptible),
                view(2, HealthState::Infected),
                view(5, HealthState::Recovered),
                view(6, HealthState::Infected),
            ],
            ..Default::default()
        };
        assert_eq!(
            snapshot.agent(AgentId(5)).map(|a| a.state),
            Some(HealthState::Recovered)
        );
        assert!(snapshot.agent(AgentId(1)).is_none());
        assert_eq!(
            snapshot.ids_in(HealthState::Infected),
            vec![AgentId(2), AgentId(6)]
        );
    }
}
