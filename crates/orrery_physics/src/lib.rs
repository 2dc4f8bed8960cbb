pub mod collision;
pub mod forces;
pub mod integrator;
pub mod scenario;
