use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::body::{Body, SpawnSettings};
use super::collision::{self, Contact};
use crate::core::color;
use crate::core::math::{clamp, Bounds};

/// Tuning constants for the bouncing-balls simulation
#[derive(Debug, Clone)]
pub struct PhysicsSettings {
    /// Gravity restored on reset (pixels/s^2, scaled by body mass)
    pub default_gravity: f32,
    /// Restitution restored on reset
    pub default_bounce: f32,
    /// Per-step multiplier applied to horizontal velocity
    pub air_friction: f32,
    /// Extra horizontal multiplier while touching the floor
    pub ground_friction: f32,
    /// Floor impacts slower than this come to rest instead of bouncing
    pub rest_threshold: f32,
    /// Longest time increment a single step will integrate
    pub max_timestep: f32,
    /// Population generated on reset/resize
    pub spawn: SpawnSettings,
}

/// The settings used by the physics demo
pub const DEFAULT_SETTINGS: PhysicsSettings = PhysicsSettings {
    default_gravity: 9.8,
    default_bounce: 0.8,
    air_friction: 0.99,
    ground_friction: 0.95,
    rest_threshold: 0.1,
    max_timestep: 0.05,
    spawn: SpawnSettings {
        count: 5,
        radius: (10.0, 30.0),
        horizontal_speed: (-5.0, 5.0),
        mass: (1.0, 3.0),
        palette: &color::BALL_PALETTE,
    },
};

impl Default for PhysicsSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

/// Physics world owning a fixed set of circular bodies
pub struct PhysicsWorld {
    /// Bodies in creation order
    bodies: Vec<Body>,

    /// Gravity magnitude, pointing down (+y)
    gravity: f32,

    /// Restitution in [0, 1]
    bounce: f32,

    /// Simulation area
    bounds: Bounds,

    /// Tuning constants
    settings: PhysicsSettings,

    /// Random source for population generation
    rng: StdRng,

    /// Pairs resolved during the last step
    contacts: Vec<Contact>,
}

impl PhysicsWorld {
    /// Create a world with a random population and an unpredictable seed
    pub fn new(bounds: Bounds) -> Self {
        Self::with_seed(bounds, rand::rng().random())
    }

    /// Create a world whose populations are reproducible for a given seed
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        let mut world = Self::from_bodies(bounds, Vec::new());
        world.rng = StdRng::seed_from_u64(seed);
        world.respawn();
        world
    }

    /// Create a world around a hand-built set of bodies
    pub fn from_bodies(bounds: Bounds, bodies: Vec<Body>) -> Self {
        let settings = PhysicsSettings::default();
        let bounds = if bounds.is_valid() {
            bounds
        } else {
            warn!("Invalid physics bounds {:?}, using default", bounds);
            Bounds::default()
        };

        Self {
            bodies,
            gravity: settings.default_gravity,
            bounce: settings.default_bounce,
            bounds,
            settings,
            rng: StdRng::seed_from_u64(0),
            contacts: Vec::new(),
        }
    }

    /// Advance the simulation by `dt` seconds (clamped to the max timestep)
    pub fn step(&mut self, dt: f32) {
        self.contacts.clear();

        // NaN and non-positive increments are no-ops
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        let dt = dt.min(self.settings.max_timestep);

        for index in 0..self.bodies.len() {
            self.integrate(index, dt);
        }

        collision::resolve_pairs(&mut self.bodies, self.bounce, &mut self.contacts);

        // Positional correction may have pushed someone through a wall
        for body in &mut self.bodies {
            body.position = self.bounds.clamp_center(body.position, body.radius());
        }

        if !self.contacts.is_empty() {
            trace!("Resolved {} body contacts", self.contacts.len());
        }
    }

    /// Integrate a single body and resolve its wall, floor and ceiling contacts
    fn integrate(&mut self, index: usize, dt: f32) {
        let Bounds { width, height } = self.bounds;
        let bounce = self.bounce;
        let gravity = self.gravity;
        let settings = &self.settings;
        let body = &mut self.bodies[index];
        let radius = body.radius();

        // Gravity is scaled by mass: heavier bodies fall faster here
        body.velocity.y += gravity * body.mass() * dt;

        // Semi-implicit Euler: position uses the updated velocity
        body.position += body.velocity * dt;

        body.velocity.x *= settings.air_friction;

        // Walls
        if body.position.x - radius < 0.0 {
            body.position.x = radius;
            body.velocity.x = -body.velocity.x * bounce;
        } else if body.position.x + radius > width {
            body.position.x = width - radius;
            body.velocity.x = -body.velocity.x * bounce;
        }

        // Floor
        if body.position.y + radius > height {
            body.position.y = height - radius;

            if body.velocity.y.abs() > settings.rest_threshold {
                body.velocity.y = -body.velocity.y * bounce;
            } else {
                body.velocity.y = 0.0;
            }

            body.velocity.x *= settings.ground_friction;
        }

        // Ceiling
        if body.position.y - radius < 0.0 {
            body.position.y = radius;
            body.velocity.y = -body.velocity.y * bounce;
        }
    }

    /// Replace the population for the current bounds
    fn respawn(&mut self) {
        self.bodies = self.settings.spawn.populate(self.bounds, &mut self.rng);
        self.contacts.clear();
    }

    /// Regenerate the population and restore default gravity and bounce
    pub fn reset(&mut self) {
        self.gravity = self.settings.default_gravity;
        self.bounce = self.settings.default_bounce;
        self.respawn();
        info!(
            "Physics reset: {} bodies, gravity {}, bounce {}",
            self.bodies.len(),
            self.gravity,
            self.bounce
        );
    }

    /// Adopt new bounds and regenerate the population, keeping gravity and bounce
    pub fn resize(&mut self, bounds: Bounds) {
        if !bounds.is_valid() {
            warn!("Ignoring physics resize to invalid bounds {:?}", bounds);
            return;
        }
        self.bounds = bounds;
        self.respawn();
        debug!("Physics resized to {}x{}", bounds.width, bounds.height);
    }

    /// Set gravity; non-finite values are ignored
    pub fn set_gravity(&mut self, gravity: f32) {
        if !gravity.is_finite() {
            warn!("Ignoring non-finite gravity {}", gravity);
            return;
        }
        self.gravity = gravity;
        debug!("Gravity set to {}", gravity);
    }

    /// Set the bounce coefficient, clamped to [0, 1]; non-finite values are ignored
    pub fn set_bounce(&mut self, bounce: f32) {
        if !bounce.is_finite() {
            warn!("Ignoring non-finite bounce {}", bounce);
            return;
        }
        self.bounce = clamp(bounce, 0.0, 1.0);
        debug!("Bounce set to {}", self.bounce);
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn bounce(&self) -> f32 {
        self.bounce
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    /// Bodies in creation order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Pairs resolved during the last step
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
