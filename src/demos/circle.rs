// Single bouncing circle

use glam::Vec2;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{frames, step_level, Animation, DemoKind, Playback};
use crate::core::color::{self, Color, WHITE};
use crate::core::math::Bounds;
use crate::engine::input::Control;
use crate::engine::renderer::ShapeBatch;

/// Pixels per frame on each axis at speed 5
const BASE_SPEED: f32 = 3.0;
const DEFAULT_SPEED: u32 = 5;
const MIN_SPEED: u32 = 1;
const MAX_SPEED: u32 = 10;
/// Radius as a fraction of the shorter side
const RADIUS_FRACTION: f32 = 0.05;

pub struct CircleDemo {
    playback: Playback,
    bounds: Bounds,
    position: Vec2,
    /// Direction and base magnitude, in pixels per frame
    velocity: Vec2,
    speed: u32,
    radius: f32,
    color: Color,
    rng: StdRng,
}

impl CircleDemo {
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut demo = Self {
            playback: Playback::default(),
            bounds,
            position: bounds.center(),
            velocity: Vec2::splat(BASE_SPEED),
            speed: DEFAULT_SPEED,
            radius: bounds.min_side() * RADIUS_FRACTION,
            color: color::hex(color::BALL_PALETTE[0]),
            rng: StdRng::seed_from_u64(seed),
        };
        demo.resize(bounds);
        demo
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn speed_factor(&self) -> f32 {
        self.speed as f32 / DEFAULT_SPEED as f32
    }

    fn recolor(&mut self) {
        let hue = self.rng.random_range(0.0..360.0_f32).floor();
        self.color = color::hsl(hue, 0.8, 0.5);
    }

    /// Reflect one axis if the circle touches a wall while moving into it
    fn bounce_axis(position: f32, velocity: &mut f32, radius: f32, extent: f32) -> bool {
        let into_low = position - radius <= 0.0 && *velocity < 0.0;
        let into_high = position + radius >= extent && *velocity > 0.0;
        if into_low || into_high {
            *velocity = -*velocity;
            true
        } else {
            false
        }
    }
}

impl Animation for CircleDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Circle
    }

    fn playback(&self) -> &Playback {
        &self.playback
    }

    fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    fn advance(&mut self, dt: f32) {
        let frames = frames(dt);
        self.position += self.velocity * self.speed_factor() * frames;

        let Bounds { width, height } = self.bounds;
        let bounced_x = Self::bounce_axis(self.position.x, &mut self.velocity.x, self.radius, width);
        let bounced_y =
            Self::bounce_axis(self.position.y, &mut self.velocity.y, self.radius, height);
        if bounced_x || bounced_y {
            self.recolor();
        }

        self.position = self.bounds.clamp_center(self.position, self.radius);
    }

    fn reset(&mut self) {
        self.position = self.bounds.center();
        self.speed = DEFAULT_SPEED;
        self.velocity = Vec2::splat(BASE_SPEED);
        self.recolor();
    }

    fn resize(&mut self, bounds: Bounds) {
        if !bounds.is_valid() {
            return;
        }
        self.bounds = bounds;
        self.position = bounds.center();
        self.radius = bounds.min_side() * RADIUS_FRACTION;
    }

    fn draw(&self, batch: &mut ShapeBatch) {
        batch.fill_circle(self.position, self.radius, self.color);
        batch.stroke_circle(self.position, self.radius, WHITE, 2.0);
    }

    fn adjust(&mut self, control: Control, steps: i32) {
        if control != Control::Primary {
            return;
        }
        self.speed = step_level(self.speed, steps, MIN_SPEED, MAX_SPEED);
        debug!("Circle speed set to {}", self.speed);
    }

    fn describe(&self) -> String {
        format!("Circle | speed {} (Up/Down)", self.speed)
    }
}
