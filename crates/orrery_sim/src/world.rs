use bevy::prelude::*;
use orrery_core::{Body, SimConfig};
use orrery_physics::{collision, integrator};

/// The whole simulation state, tracked as a Bevy Resource.
///
/// Owns the live body collection and the fixed constants; one tick is one
/// discrete step. The host reads `bodies` between ticks for rendering —
/// there is exactly one writer and no concurrent access during a tick.
#[derive(Resource)]
pub struct Simulation {
    /// Live bodies; contains only alive entries at the start of each tick
    pub bodies: Vec<Body>,
    /// Fixed constants for the whole run
    pub config: SimConfig,
    /// Completed ticks
    pub tick_count: u64,
    /// Merge events resolved so far
    pub merge_count: u64,
    /// Whether stepping is suspended
    pub paused: bool,
}

impl Simulation {
    /// Placeholder with no bodies (used before seeding completes)
    pub fn empty(config: SimConfig) -> Self {
        Self::new(config, Vec::new())
    }

    pub fn new(config: SimConfig, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            config,
            tick_count: 0,
            merge_count: 0,
            paused: false,
        }
    }

    /// Advance the simulation by one tick: integrate every body, then
    /// resolve collisions over the advanced positions.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        integrator::update_velocities(&mut self.bodies, &self.config);
        integrator::update_positions(&mut self.bodies, &self.config);

        let events = collision::plan_merges(&self.bodies, self.config.collision_scale);
        for event in &events {
            info!(
                "Merging {} + {} -> {} (mass {:.3e})",
                self.bodies[event.first].name,
                self.bodies[event.second].name,
                event.merged.name,
                event.merged.mass
            );
        }
        self.merge_count += events.len() as u64;
        collision::apply_merges(&mut self.bodies, events);

        self.tick_count += 1;
    }

    /// Number of live bodies
    pub fn alive_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_alive()).count()
    }

    /// Total mass of the live collection
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total linear momentum of the live collection
    pub fn total_momentum(&self) -> [f64; 3] {
        let mut total = [0.0f64; 3];
        for body in &self.bodies {
            let p = body.momentum();
            for k in 0..3 {
                total[k] += p[k];
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::palette;

    fn touching_pair() -> Vec<Body> {
        vec![
            Body::new("a", 2.0, 1000.0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], palette::RED),
            Body::new("b", 6.0, 2000.0, [1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], palette::BLUE),
        ]
    }

    fn test_config() -> SimConfig {
        // Tiny gravity and dt so integration barely moves the bodies
        SimConfig {
            gravity: 1e-30,
            dt: 1.0,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_tick_merges_touching_bodies() {
        let mut sim = Simulation::new(test_config(), touching_pair());
        let mass_before = sim.total_mass();
        let momentum_before = sim.total_momentum();

        sim.tick();

        assert_eq!(sim.tick_count, 1);
        assert_eq!(sim.merge_count, 1);
        assert_eq!(sim.alive_count(), 1);
        assert_eq!(sim.bodies[0].name, "a & b");
        assert!((sim.total_mass() - mass_before).abs() < 1e-12);
        for k in 0..3 {
            assert!((sim.total_momentum()[k] - momentum_before[k]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_paused_simulation_does_not_advance() {
        let mut sim = Simulation::new(test_config(), touching_pair());
        sim.paused = true;

        sim.tick();

        assert_eq!(sim.tick_count, 0);
        assert_eq!(sim.alive_count(), 2);
        assert!(sim.bodies[0].trail.is_empty());
    }

    #[test]
    fn test_tick_appends_trail_points() {
        let mut sim = Simulation::new(
            test_config(),
            vec![Body::new(
                "lone",
                1e20,
                1.0,
                [0.0; 3],
                [3.0, 0.0, 0.0],
                palette::WHITE,
            )],
        );

        sim.tick();
        sim.tick();

        assert_eq!(sim.bodies[0].trail.len(), 2);
        assert_eq!(sim.bodies[0].position, [6.0, 0.0, 0.0]);
    }

    #[test]
    fn test_distant_bodies_survive_many_ticks() {
        let mut sim = Simulation::new(
            test_config(),
            vec![
                Body::new("x", 1.0, 1.0, [0.0; 3], [0.0; 3], palette::RED),
                Body::new("y", 1.0, 1.0, [1e20, 0.0, 0.0], [0.0; 3], palette::BLUE),
            ],
        );

        for _ in 0..10 {
            sim.tick();
        }

        assert_eq!(sim.alive_count(), 2);
        assert_eq!(sim.merge_count, 0);
        assert_eq!(sim.tick_count, 10);
    }
}
