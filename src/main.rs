use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use orrery_core::constants::TICK_RATE_HZ;
use orrery_core::SimConfig;
use orrery_physics::scenario;
use orrery_sim::pipeline::SimulationPlugin;
use orrery_sim::world::Simulation;

fn main() {
    let config = SimConfig::default();
    let bodies = scenario::reference_system();

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / TICK_RATE_HZ),
        )))
        .add_plugins(LogPlugin::default())
        .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
        .insert_resource(Simulation::new(config, bodies))
        .add_plugins(SimulationPlugin)
        .add_systems(FixedUpdate, log_status)
        .run();
}

/// Periodic status line for the headless host
fn log_status(sim: Res<Simulation>) {
    if sim.tick_count > 0 && sim.tick_count % 100 == 0 {
        info!(
            "tick {}: {} bodies, {} merges, total mass {:.3e} kg",
            sim.tick_count,
            sim.alive_count(),
            sim.merge_count,
            sim.total_mass()
        );
    }
}
