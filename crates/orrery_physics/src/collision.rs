//! Proximity collision detection and inelastic body merging.
//!
//! Collisions are resolved once per tick in two phases: a read-only sweep
//! over the live collection collects merge decisions, then all removals and
//! insertions are applied in one pass. This keeps the sweep free of
//! iterator invalidation and makes the one-merge-per-body rule explicit.

use orrery_core::Body;

use crate::forces;

/// Whether two bodies are within collision range this tick.
/// The combined radius is scaled by `scale` to bridge the gap between the
/// raw position unit and the display-sized radius unit.
pub fn colliding(a: &Body, b: &Body, scale: f64) -> bool {
    forces::distance(a, b) < (a.radius + b.radius) * scale
}

/// Combine two colliding bodies into one.
///
/// Mass is summed, radius combines as an equal-density sphere (volumes add),
/// and position/velocity are mass-weighted averages, so total momentum is
/// conserved exactly. Color averaging is cosmetic and has no bearing on the
/// physical invariants.
pub fn merge(a: &Body, b: &Body) -> Body {
    let mass = a.mass + b.mass;
    let radius = (a.radius.powi(3) + b.radius.powi(3)).cbrt();

    let mut position = [0.0f64; 3];
    let mut velocity = [0.0f64; 3];
    for k in 0..3 {
        position[k] = (a.position[k] * a.mass + b.position[k] * b.mass) / mass;
        velocity[k] = (a.velocity[k] * a.mass + b.velocity[k] * b.mass) / mass;
    }

    let mut color = [0.0f32; 4];
    for k in 0..4 {
        color[k] = (a.color[k] + b.color[k]) / 2.0;
    }

    Body::new(
        format!("{} & {}", a.name, b.name),
        mass,
        radius,
        position,
        velocity,
        color,
    )
}

/// One merge decision from a collision sweep: the indices of the two
/// consumed bodies and their replacement.
#[derive(Debug)]
pub struct MergeEvent {
    pub first: usize,
    pub second: usize,
    pub merged: Body,
}

/// Read-only collision sweep over the live collection.
///
/// All colliding unordered pairs are gathered, then candidates are accepted
/// nearest-separation-first (index order breaks exact ties) until no
/// unclaimed pair remains. A body participates in at most one merge per
/// sweep, and merged bodies are not retested until the next tick.
pub fn plan_merges(bodies: &[Body], scale: f64) -> Vec<MergeEvent> {
    let mut candidates: Vec<(usize, usize, f64)> = Vec::new();
    for i in 0..bodies.len() {
        if !bodies[i].is_alive() {
            continue;
        }
        for j in (i + 1)..bodies.len() {
            if !bodies[j].is_alive() {
                continue;
            }
            if colliding(&bodies[i], &bodies[j], scale) {
                candidates.push((i, j, forces::distance(&bodies[i], &bodies[j])));
            }
        }
    }

    candidates.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)).then(a.1.cmp(&b.1)));

    let mut claimed = vec![false; bodies.len()];
    let mut events = Vec::new();
    for (i, j, _) in candidates {
        if claimed[i] || claimed[j] {
            continue;
        }
        claimed[i] = true;
        claimed[j] = true;
        events.push(MergeEvent {
            first: i,
            second: j,
            merged: merge(&bodies[i], &bodies[j]),
        });
    }

    events
}

/// Apply the decisions from [`plan_merges`]: mark consumed bodies dead,
/// append their replacements, and compact so only live bodies remain.
pub fn apply_merges(bodies: &mut Vec<Body>, events: Vec<MergeEvent>) {
    for event in events {
        bodies[event.first].alive = false;
        bodies[event.second].alive = false;
        bodies.push(event.merged);
    }
    bodies.retain(|b| b.is_alive());
}
