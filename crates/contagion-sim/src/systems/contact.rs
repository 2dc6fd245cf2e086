//! Contact detection: which members of one group touch any member of another.

use hecs::{Entity, World};

use contagion_core::components::{AgentId, Radius};
use contagion_core::enums::HealthState;
use contagion_core::types::Position;

/// A circle taking part in contact detection, tagged with a caller-chosen key.
#[derive(Debug, Clone, Copy)]
pub struct Body<K> {
    pub key: K,
    pub position: Position,
    pub radius: f64,
}

/// Members of `group_a` within contact distance of at least one member of `group_b`.
///
/// Contact means distance strictly below the sum of radii. Each `group_a`
/// member appears at most once, in `group_a` order. Brute force over all pairs.
pub fn find_contacts<K: Copy>(group_a: &[Body<K>], group_b: &[Body<K>]) -> Vec<K> {
    group_a
        .iter()
        .filter(|a| {
            group_b
                .iter()
                .any(|b| a.position.distance_to(&b.position) < a.radius + b.radius)
        })
        .map(|a| a.key)
        .collect()
}

/// Gather the bodies of every agent in `state`, ordered by agent id.
pub fn bodies_in(world: &World, state: HealthState) -> Vec<Body<Entity>> {
    let mut tagged: Vec<(AgentId, Body<Entity>)> = world
        .query::<(&AgentId, &HealthState, &Position, &Radius)>()
        .iter()
        .filter(|(_, (_, s, _, _))| **s == state)
        .map(|(entity, (id, _, pos, radius))| {
            (
                *id,
                Body {
                    key: entity,
                    position: *pos,
                    radius: radius.0,
                },
            )
        })
        .collect();

    tagged.sort_by_key(|(id, _)| *id);
    tagged.into_iter().map(|(_, body)| body).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(key: u32, x: f64, y: f64, radius: f64) -> Body<u32> {
        Body {
            key,
            position: Position::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_overlap_detected() {
        let susceptible = [body(0, 0.0, 0.0, 5.0)];
        let infected = [body(1, 6.0, 0.0, 5.0)];
        assert_eq!(find_contacts(&susceptible, &infected), vec![0]);
    }

    #[test]
    fn test_included_once_with_many_overlaps() {
        let susceptible = [body(0, 0.0, 0.0, 5.0)];
        let infected = [
            body(1, 6.0, 0.0, 5.0),
            body(2, -6.0, 0.0, 5.0),
            body(3, 0.0, 3.0, 5.0),
        ];
        assert_eq!(find_contacts(&susceptible, &infected), vec![0]);
    }

    #[test]
    fn test_touching_exactly_is_not_contact() {
        let susceptible = [body(0, 0.0, 0.0, 5.0)];
        let infected = [body(1, 10.0, 0.0, 5.0)];
        assert!(find_contacts(&susceptible, &infected).is_empty());
    }

    #[test]
    fn test_uses_sum_of_unequal_radii() {
        let susceptible = [body(0, 0.0, 0.0, 1.0)];
        let infected = [body(1, 0.0, 8.0, 7.5)];
        assert_eq!(find_contacts(&susceptible, &infected), vec![0]);
    }

    #[test]
    fn test_preserves_group_a_order() {
        let susceptible = [
            body(4, 100.0, 0.0, 5.0),
            body(2, 0.0, 0.0, 5.0),
            body(9, 50.0, 50.0, 5.0),
            body(3, 101.0, 1.0, 5.0),
        ];
        let infected = [body(7, 1.0, 1.0, 5.0), body(8, 99.0, 0.0, 5.0)];
        assert_eq!(find_contacts(&susceptible, &infected), vec![4, 2, 3]);
    }

    #[test]
    fn test_empty_groups() {
        let some = [body(0, 0.0, 0.0, 5.0)];
        assert!(find_contacts::<u32>(&[], &some).is_empty());
        assert!(find_contacts(&some, &[]).is_empty());
    }

    #[test]
    fn test_bodies_in_filters_and_orders() {
        let mut world = World::new();
        let late = world.spawn((
            AgentId(5),
            HealthState::Susceptible,
            Position::new(1.0, 1.0),
            Radius(5.0),
        ));
        world.spawn((
            AgentId(1),
            HealthState::Infected,
            Position::new(2.0, 2.0),
            Radius(5.0),
        ));
        let early = world.spawn((
            AgentId(0),
            HealthState::Susceptible,
            Position::new(3.0, 3.0),
            Radius(4.0),
        ));

        let bodies = bodies_in(&world, HealthState::Susceptible);
        let keys: Vec<Entity> = bodies.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![early, late]);
        assert_eq!(bodies[0].radius, 4.0);
    }
}
