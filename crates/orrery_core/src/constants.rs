// Physical constants (SI-flavoured units)
// The simulation works in raw SI magnitudes rather than scaled units:
// - Distance: meters (seed positions are around 10^13..10^14)
// - Mass: kilograms (seed masses are around 10^26..10^31)
// - Time: one tick advances DT "seconds"
// DT is deliberately enormous relative to physical time so that orbital
// motion is visually fast; the display-scale factors below reconcile the
// raw magnitudes with renderer-friendly ranges.

/// Newtonian gravitational constant
pub const G: f64 = 6.674e-11;

/// Time step per tick
pub const DT: f64 = 3e9;

/// Scale applied to the sum of two radii to form the collision threshold.
/// Radii are stored in display-friendly units (thousands) while positions
/// are raw meters; this constant bridges the two scales.
pub const COLLISION_SCALE: f64 = 7e9;

/// Factor a renderer applies to positions before display
pub const POSITION_DISPLAY_SCALE: f64 = 1e-12;

/// Factor a renderer applies to radii before display
pub const RADIUS_DISPLAY_SCALE: f64 = 1e-2;

/// Ticks per second when the host paces the simulation
pub const TICK_RATE_HZ: f64 = 10.0;
