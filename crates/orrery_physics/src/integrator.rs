//! Forward-Euler integration, split into a velocity half and a position half.
//!
//! The two halves must run in order within a tick: velocities for every body
//! are updated from a consistent snapshot of positions, and only afterwards
//! do positions advance using the new velocities.

use orrery_core::{Body, SimConfig};

use crate::forces::gravitational_force;

/// Update every body's velocity from the summed pairwise gravity of all
/// other bodies. Positions are untouched, so all accelerations are computed
/// from the same pre-tick snapshot regardless of iteration order.
pub fn update_velocities(bodies: &mut [Body], config: &SimConfig) {
    let mut accels = vec![[0.0f64; 3]; bodies.len()];

    for (i, body) in bodies.iter().enumerate() {
        let mut fx = 0.0;
        let mut fy = 0.0;
        let mut fz = 0.0;
        for (j, other) in bodies.iter().enumerate() {
            if i != j {
                let f = gravitational_force(body, other, config.gravity);
                fx += f[0];
                fy += f[1];
                fz += f[2];
            }
        }
        // mass > 0 is a data-model invariant
        accels[i] = [fx / body.mass, fy / body.mass, fz / body.mass];
    }

    for (body, acc) in bodies.iter_mut().zip(accels) {
        body.velocity[0] += acc[0] * config.dt;
        body.velocity[1] += acc[1] * config.dt;
        body.velocity[2] += acc[2] * config.dt;
    }
}

/// Advance every body's position by its current velocity and record the new
/// position on its trail. Must run after [`update_velocities`] completes.
pub fn update_positions(bodies: &mut [Body], config: &SimConfig) {
    for body in bodies.iter_mut() {
        body.position[0] += body.velocity[0] * config.dt;
        body.position[1] += body.velocity[1] * config.dt;
        body.position[2] += body.velocity[2] * config.dt;
        let pos = body.position;
        body.trail.push(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::palette;

    fn config(gravity: f64, dt: f64) -> SimConfig {
        SimConfig {
            gravity,
            dt,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_two_body_attraction_along_axis() {
        // Earth-ish masses separated by 1e7 m along x, at rest
        let m1 = 5.972e24;
        let m2 = 6e24;
        let r = 1e7;
        let g = 6.674e-11;
        let mut bodies = vec![
            Body::new("a", m1, 1.0, [0.0, 0.0, 0.0], [0.0; 3], palette::RED),
            Body::new("b", m2, 1.0, [r, 0.0, 0.0], [0.0; 3], palette::BLUE),
        ];

        update_velocities(&mut bodies, &config(g, 1.0));

        // Each body accelerates toward the other with a = G * m_other / r^2
        let v1_expected = g * m2 / (r * r);
        let v2_expected = g * m1 / (r * r);

        assert!((bodies[0].velocity[0] - v1_expected).abs() < 1e-9 * v1_expected);
        assert!((bodies[1].velocity[0] + v2_expected).abs() < 1e-9 * v2_expected);

        // No acceleration perpendicular to the connecting axis
        assert_eq!(bodies[0].velocity[1], 0.0);
        assert_eq!(bodies[0].velocity[2], 0.0);
        assert_eq!(bodies[1].velocity[1], 0.0);
        assert_eq!(bodies[1].velocity[2], 0.0);
    }

    #[test]
    fn test_velocity_update_uses_position_snapshot() {
        // Symmetric pair: after the velocity pass both speeds must match
        // exactly, which only holds if neither update saw a moved partner.
        let mut bodies = vec![
            Body::new("a", 1e24, 1.0, [-1e7, 0.0, 0.0], [0.0; 3], palette::RED),
            Body::new("b", 1e24, 1.0, [1e7, 0.0, 0.0], [0.0; 3], palette::BLUE),
        ];

        update_velocities(&mut bodies, &config(6.674e-11, 1.0));

        assert!((bodies[0].velocity[0] + bodies[1].velocity[0]).abs() < 1e-18);
        assert_eq!(bodies[0].position, [-1e7, 0.0, 0.0]);
        assert_eq!(bodies[1].position, [1e7, 0.0, 0.0]);
    }

    #[test]
    fn test_position_update_applies_velocity_and_records_trail() {
        let mut bodies = vec![Body::new(
            "drifter",
            1.0,
            1.0,
            [1.0, 2.0, 3.0],
            [10.0, -20.0, 30.0],
            palette::GREEN,
        )];

        update_positions(&mut bodies, &config(6.674e-11, 0.5));

        assert_eq!(bodies[0].position, [6.0, -8.0, 18.0]);
        assert_eq!(bodies[0].trail, vec![[6.0, -8.0, 18.0]]);

        update_positions(&mut bodies, &config(6.674e-11, 0.5));
        assert_eq!(bodies[0].trail.len(), 2);
        assert_eq!(bodies[0].trail[1], bodies[0].position);
    }

    #[test]
    fn test_isolated_body_keeps_velocity() {
        let mut bodies = vec![Body::new(
            "lone",
            1e20,
            1.0,
            [0.0; 3],
            [5.0, 0.0, 0.0],
            palette::WHITE,
        )];

        update_velocities(&mut bodies, &config(6.674e-11, 1.0));
        assert_eq!(bodies[0].velocity, [5.0, 0.0, 0.0]);
    }
}
