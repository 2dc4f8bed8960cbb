use bevy::prelude::*;

use super::world::Simulation;

/// Bevy plugin driving the simulation at the host's fixed tick rate.
/// The host is expected to insert a [`Simulation`] resource and set
/// `Time::<Fixed>` to the desired cadence.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, simulation_tick);
    }
}

/// Main simulation tick — one discrete step per fixed-rate frame
fn simulation_tick(mut sim: ResMut<Simulation>) {
    sim.tick();
}
