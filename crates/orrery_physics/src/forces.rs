use orrery_core::Body;

/// Euclidean distance between two bodies
pub fn distance(a: &Body, b: &Body) -> f64 {
    let dx = b.position[0] - a.position[0];
    let dy = b.position[1] - a.position[1];
    let dz = b.position[2] - a.position[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Gravitational force exerted on `a` by `b`.
/// Returns [fx, fy, fz]
///
/// Two bodies at the exact same position exert no force on each other;
/// the zero vector stands in for the undefined direction rather than
/// producing NaN or infinity.
pub fn gravitational_force(a: &Body, b: &Body, g: f64) -> [f64; 3] {
    let dx = b.position[0] - a.position[0];
    let dy = b.position[1] - a.position[1];
    let dz = b.position[2] - a.position[2];

    let r2 = dx * dx + dy * dy + dz * dz;
    let r = r2.sqrt();
    if r == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    // G * m1 * m2 / r^2 along the unit vector from a to b
    let f = g * a.mass * b.mass / (r2 * r);

    [f * dx, f * dy, f * dz]
}
