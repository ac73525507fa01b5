// Core utilities shared by the engine and the demos

pub mod color;
pub mod math;
