pub mod pipeline;
pub mod world;
