// Bouncing-balls physics: semi-implicit Euler integration, boundary response
// and pairwise impulse-based collisions between circular bodies

pub mod body;
mod collision;
mod world;

pub use body::Body;
pub use collision::Contact;
pub use world::{PhysicsSettings, PhysicsWorld, DEFAULT_SETTINGS};
