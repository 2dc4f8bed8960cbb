use serde::{Deserialize, Serialize};

/// A simulated spherical mass: the only entity in the simulation.
///
/// Position and velocity are mutated in place each tick; a body leaves the
/// simulation only by being consumed into a merge, which clears `alive`
/// before the collision sweep compacts it away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Identifying label, informational only
    pub name: String,
    /// Mass in kg, strictly positive
    pub mass: f64,
    /// Radius, strictly positive; used for collision threshold and display
    pub radius: f64,
    /// Position (x, y, z)
    pub position: [f64; 3],
    /// Velocity (x, y, z)
    pub velocity: [f64; 3],
    /// Display color [r, g, b, a]; never read by physics
    pub color: [f32; 4],
    /// Past positions, appended each tick for trail rendering
    pub trail: Vec<[f64; 3]>,
    /// Live flag: consumed bodies are dead and non-renderable
    pub alive: bool,
}

impl Body {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: [f64; 3],
        velocity: [f64; 3],
        color: [f32; 4],
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            position,
            velocity,
            color,
            trail: Vec::new(),
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Linear momentum (mass * velocity)
    pub fn momentum(&self) -> [f64; 3] {
        [
            self.mass * self.velocity[0],
            self.mass * self.velocity[1],
            self.mass * self.velocity[2],
        ]
    }

    /// Position as an external renderer should draw it
    pub fn display_position(&self, scale: f64) -> [f64; 3] {
        [
            self.position[0] * scale,
            self.position[1] * scale,
            self.position[2] * scale,
        ]
    }

    /// Radius as an external renderer should draw it
    pub fn display_radius(&self, scale: f64) -> f64 {
        self.radius * scale
    }
}

/// Named palette colors for scenario seeding [r, g, b, a]
pub mod palette {
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const ORANGE: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
    pub const PURPLE: [f32; 4] = [0.4, 0.0, 0.6, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
