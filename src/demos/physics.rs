// Bouncing balls driven by the physics engine

use glam::Vec2;

use super::{step_value, Animation, DemoKind, Playback};
use crate::core::color::{with_alpha, SHADOW, WHITE};
use crate::core::math::Bounds;
use crate::engine::input::Control;
use crate::engine::physics::PhysicsWorld;
use crate::engine::renderer::ShapeBatch;

const GRAVITY_STEP: f32 = 0.5;
const GRAVITY_RANGE: (f32, f32) = (0.0, 20.0);
const BOUNCE_STEP: f32 = 0.05;
const BOUNCE_RANGE: (f32, f32) = (0.0, 1.0);

pub struct PhysicsDemo {
    playback: Playback,
    world: PhysicsWorld,
}

impl PhysicsDemo {
    /// A seeded demo generates the same populations on every run
    pub fn new(bounds: Bounds, seed: Option<u64>) -> Self {
        let world = match seed {
            Some(seed) => PhysicsWorld::with_seed(bounds, seed),
            None => PhysicsWorld::new(bounds),
        };
        Self {
            playback: Playback::default(),
            world,
        }
    }

    /// Override the starting gravity and bounce; reset still restores the defaults
    pub fn with_parameters(mut self, gravity: Option<f32>, bounce: Option<f32>) -> Self {
        if let Some(gravity) = gravity {
            self.world.set_gravity(gravity);
        }
        if let Some(bounce) = bounce {
            self.world.set_bounce(bounce);
        }
        self
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }
}

impl Animation for PhysicsDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Physics
    }

    fn playback(&self) -> &Playback {
        &self.playback
    }

    fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    fn advance(&mut self, dt: f32) {
        self.world.step(dt);
    }

    fn reset(&mut self) {
        self.world.reset();
    }

    fn resize(&mut self, bounds: Bounds) {
        self.world.resize(bounds);
    }

    fn draw(&self, batch: &mut ShapeBatch) {
        for body in self.world.bodies() {
            let r = body.radius();
            // Shadow below the ball
            batch.fill_circle(body.position + Vec2::new(0.0, r * 0.8), r * 0.8, SHADOW);
            batch.fill_circle(body.position, r, body.color);
            // Highlight toward the top-left
            batch.fill_circle(body.position - Vec2::splat(r * 0.3), r * 0.35, with_alpha(WHITE, 0.5));
        }
    }

    fn adjust(&mut self, control: Control, steps: i32) {
        match control {
            Control::Primary => {
                let gravity = step_value(
                    self.world.gravity(),
                    steps,
                    GRAVITY_STEP,
                    GRAVITY_RANGE.0,
                    GRAVITY_RANGE.1,
                );
                self.world.set_gravity(gravity);
            }
            Control::Secondary => {
                let bounce = step_value(
                    self.world.bounce(),
                    steps,
                    BOUNCE_STEP,
                    BOUNCE_RANGE.0,
                    BOUNCE_RANGE.1,
                );
                self.world.set_bounce(bounce);
            }
        }
    }

    fn describe(&self) -> String {
        format!(
            "Physics | gravity {:.1} (Up/Down) | bounce {:.2} (Left/Right) | energy {:.0}",
            self.world.gravity(),
            self.world.bounce(),
            self.world.kinetic_energy()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FRAME: f32 = 1.0 / 60.0;

    fn demo() -> PhysicsDemo {
        PhysicsDemo::new(Bounds::new(800.0, 600.0), Some(11))
    }

    #[test]
    fn test_gravity_control() {
        let mut demo = demo();
        demo.adjust(Control::Primary, 1);
        assert_abs_diff_eq!(demo.world().gravity(), 10.0, epsilon = 1e-5);
        demo.adjust(Control::Primary, 100);
        assert_abs_diff_eq!(demo.world().gravity(), 20.0);
        demo.adjust(Control::Primary, -100);
        assert_abs_diff_eq!(demo.world().gravity(), 0.0);
    }

    #[test]
    fn test_bounce_control() {
        let mut demo = demo();
        demo.adjust(Control::Secondary, -2);
        assert_abs_diff_eq!(demo.world().bounce(), 0.7, epsilon = 1e-5);
        demo.adjust(Control::Secondary, 50);
        assert_abs_diff_eq!(demo.world().bounce(), 1.0);
    }

    #[test]
    fn test_update_only_steps_while_running() {
        let mut demo = demo();
        let before: Vec<Vec2> = demo.world().bodies().iter().map(|b| b.position).collect();
        demo.update(FRAME);
        let after: Vec<Vec2> = demo.world().bodies().iter().map(|b| b.position).collect();
        assert_eq!(before, after);

        demo.start();
        demo.update(FRAME);
        let moved: Vec<Vec2> = demo.world().bodies().iter().map(|b| b.position).collect();
        assert_ne!(before, moved);
    }

    #[test]
    fn test_reset_restores_parameters() {
        let mut demo = demo();
        demo.adjust(Control::Primary, 4);
        demo.adjust(Control::Secondary, -4);
        demo.reset();
        assert_eq!(demo.world().gravity(), 9.8);
        assert_eq!(demo.world().bounce(), 0.8);
        assert_eq!(demo.world().bodies().len(), 5);
    }

    #[test]
    fn test_resize_keeps_parameters() {
        let mut demo = demo();
        demo.adjust(Control::Primary, 2);
        demo.resize(Bounds::new(400.0, 300.0));
        assert_abs_diff_eq!(demo.world().gravity(), 10.5, epsilon = 1e-5);
        assert_eq!(demo.world().bounds(), Bounds::new(400.0, 300.0));
    }

    #[test]
    fn test_draws_three_circles_per_body() {
        let demo = demo();
        let mut single = ShapeBatch::new();
        single.fill_circle(Vec2::ZERO, 1.0, WHITE);
        let mut batch = ShapeBatch::new();
        demo.draw(&mut batch);
        assert!(!batch.is_empty());
        assert!(batch.indices().len() >= 3 * 5 * single.indices().len());
    }

    #[test]
    fn test_starting_parameters_do_not_survive_reset() {
        let mut demo = demo().with_parameters(Some(2.0), Some(0.3));
        assert_eq!(demo.world().gravity(), 2.0);
        assert_eq!(demo.world().bounce(), 0.3);
        demo.reset();
        assert_eq!(demo.world().gravity(), 9.8);
    }

    #[test]
    fn test_describe_mentions_parameters() {
        let text = demo().describe();
        assert!(text.contains("gravity 9.8"));
        assert!(text.contains("bounce 0.80"));
    }
}
