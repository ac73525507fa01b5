use glam::Vec2;
use rand::Rng;

use crate::core::color::{self, Color};
use crate::core::math::Bounds;

/// Smallest radius a body may have
pub const MIN_RADIUS: f32 = 0.01;

/// Smallest mass a body may have
pub const MIN_MASS: f32 = 0.001;

/// A circular body simulated by the physics world
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Center position in world space (pixels, y down)
    pub position: Vec2,
    /// Velocity in pixels per second
    pub velocity: Vec2,
    radius: f32,
    mass: f32,
    /// Display color, ignored by the simulation
    pub color: Color,
}

impl Body {
    /// Create a new body. Radius and mass are forced positive.
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, mass: f32, color: Color) -> Self {
        Self {
            position,
            velocity,
            radius: positive_or(radius, MIN_RADIUS),
            mass: positive_or(mass, MIN_MASS),
            color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// Kinetic energy (1/2 m v^2)
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

fn positive_or(value: f32, minimum: f32) -> f32 {
    if value.is_finite() {
        value.max(minimum)
    } else {
        minimum
    }
}

/// Ranges used when generating a random body population
#[derive(Debug, Clone)]
pub struct SpawnSettings {
    /// Number of bodies per population
    pub count: usize,
    /// Radius range (min, max)
    pub radius: (f32, f32),
    /// Initial horizontal speed range (min, max); vertical speed starts at zero
    pub horizontal_speed: (f32, f32),
    /// Mass range (min, max)
    pub mass: (f32, f32),
    /// Colors assigned by body index, cycled
    pub palette: &'static [u32],
}

impl SpawnSettings {
    /// Generate a fresh population that fits inside `bounds`
    pub fn populate<R: Rng>(&self, bounds: Bounds, rng: &mut R) -> Vec<Body> {
        // Every body must fit between the walls
        let max_radius = (bounds.min_side() / 2.0).max(MIN_RADIUS);

        (0..self.count)
            .map(|i| {
                let radius = uniform(rng, self.radius).min(max_radius);
                let position = Vec2::new(
                    bounds.width * (0.2 + 0.6 * rng.random::<f32>()),
                    bounds.height * 0.2 * rng.random::<f32>(),
                );
                let velocity = Vec2::new(uniform(rng, self.horizontal_speed), 0.0);
                let mass = uniform(rng, self.mass);
                let color = if self.palette.is_empty() {
                    color::WHITE
                } else {
                    color::hex(self.palette[i % self.palette.len()])
                };

                Body::new(
                    bounds.clamp_center(position, radius),
                    velocity,
                    radius,
                    mass,
                    color,
                )
            })
            .collect()
    }
}

fn uniform<R: Rng>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    min + (max - min) * rng.random::<f32>()
}
