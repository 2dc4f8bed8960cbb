use serde::{Deserialize, Serialize};

use crate::constants;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Gravitational constant
    pub gravity: f64,
    /// Time step per tick
    pub dt: f64,
    /// Combined-radius scale for collision detection
    pub collision_scale: f64,
    /// Position scale handed to an external renderer
    pub position_display_scale: f64,
    /// Radius scale handed to an external renderer
    pub radius_display_scale: f64,
    /// Random seed for deterministic scenario generation
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: constants::G,
            dt: constants::DT,
            collision_scale: constants::COLLISION_SCALE,
            position_display_scale: constants::POSITION_DISPLAY_SCALE,
            radius_display_scale: constants::RADIUS_DISPLAY_SCALE,
            seed: 42,
        }
    }
}
