//! Headless batch run: advance a seeded system for a fixed number of ticks
//! and report merge history plus conservation totals.
//!
//! Usage: collide [TICKS] [BODIES]
//! With no BODIES argument the canonical five-planet system is used;
//! otherwise a seeded random cloud of that many bodies.

use orrery_core::SimConfig;
use orrery_physics::scenario;
use orrery_sim::world::Simulation;

fn main() {
    let mut args = std::env::args().skip(1);
    let ticks: u64 = match args.next().map(|a| a.parse()).transpose() {
        Ok(t) => t.unwrap_or(1000),
        Err(_) => {
            eprintln!("Usage: collide [TICKS] [BODIES]");
            std::process::exit(2);
        }
    };
    let cloud_size: Option<usize> = match args.next().map(|a| a.parse()).transpose() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Usage: collide [TICKS] [BODIES]");
            std::process::exit(2);
        }
    };

    let config = SimConfig::default();
    let bodies = match cloud_size {
        Some(n) => scenario::random_cloud(n, &config),
        None => scenario::reference_system(),
    };

    let mut sim = Simulation::new(config, bodies);
    let mass_start = sim.total_mass();
    let momentum_start = sim.total_momentum();

    eprintln!("Running {} bodies for {} ticks...", sim.alive_count(), ticks);

    let mut previous = sim.merge_count;
    for _ in 0..ticks {
        sim.tick();
        if sim.merge_count != previous {
            previous = sim.merge_count;
            println!(
                "tick {:>6}: {} bodies remain after merge #{}",
                sim.tick_count,
                sim.alive_count(),
                sim.merge_count
            );
        }
    }

    println!();
    println!("After {} ticks: {} bodies, {} merges", sim.tick_count, sim.alive_count(), sim.merge_count);
    for body in &sim.bodies {
        println!(
            "  {:30} mass {:.3e} kg  radius {:7.1}  |v| {:9.1}",
            body.name,
            body.mass,
            body.radius,
            (body.velocity[0].powi(2) + body.velocity[1].powi(2) + body.velocity[2].powi(2)).sqrt()
        );
    }

    let momentum_end = sim.total_momentum();
    println!();
    println!(
        "Mass drift: {:.3e} kg (of {:.3e})",
        (sim.total_mass() - mass_start).abs(),
        mass_start
    );
    println!(
        "Momentum drift: [{:.3e}, {:.3e}, {:.3e}]",
        momentum_end[0] - momentum_start[0],
        momentum_end[1] - momentum_start[1],
        momentum_end[2] - momentum_start[2]
    );
}
