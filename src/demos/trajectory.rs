// Point tracing a Lissajous-like curve with a fading trail

use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::{Vec2, Vec4};
use log::debug;

use super::{frames, step_level, Animation, DemoKind, Playback};
use crate::core::color::{self, with_alpha, WHITE};
use crate::core::math::Bounds;
use crate::engine::input::Control;
use crate::engine::renderer::ShapeBatch;

const DEFAULT_COMPLEXITY: u32 = 5;
const MIN_COMPLEXITY: u32 = 1;
const MAX_COMPLEXITY: u32 = 10;

/// Curve parameter advance per frame at complexity 5
const TIME_STEP: f32 = 0.01;
const TRAIL_LENGTH: usize = 100;
const POINT_SIZE: f32 = 8.0;
/// Sampling step for the reference path
const PATH_STEP: f32 = 0.1;
/// Curve extent as a fraction of each side
const EXTENT: f32 = 0.35;

const POINT_COLOR: u32 = 0xFFCC00;
const PATH_COLOR: Vec4 = Vec4::new(0.0, 119.0 / 255.0, 237.0 / 255.0, 0.5);

pub struct TrajectoryDemo {
    playback: Playback,
    bounds: Bounds,
    time: f32,
    complexity: u32,
    /// Oldest first
    trail: VecDeque<Vec2>,
}

impl TrajectoryDemo {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            playback: Playback::default(),
            bounds,
            time: 0.0,
            complexity: DEFAULT_COMPLEXITY,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    pub fn complexity(&self) -> u32 {
        self.complexity
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }

    fn factor(&self) -> f32 {
        self.complexity as f32 / DEFAULT_COMPLEXITY as f32
    }

    /// Point on the curve at parameter `t`
    pub fn point_at(&self, t: f32) -> Vec2 {
        let center = self.bounds.center();
        let f = self.factor();
        Vec2::new(
            center.x + self.bounds.width * EXTENT * (t * f + (t * 0.5).sin()).sin(),
            center.y + self.bounds.height * EXTENT * (t * 2.0 * f + (t * 0.3).cos()).sin(),
        )
    }

    /// The whole curve for t in [0, 4π)
    fn reference_path(&self) -> Vec<Vec2> {
        let samples = (4.0 * PI / PATH_STEP).ceil() as usize;
        (0..samples)
            .map(|i| self.point_at(i as f32 * PATH_STEP))
            .collect()
    }

    fn set_complexity(&mut self, complexity: u32) {
        self.complexity = complexity;
        self.trail.clear();
        debug!("Trajectory complexity set to {}", complexity);
    }
}

impl Animation for TrajectoryDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Trajectory
    }

    fn playback(&self) -> &Playback {
        &self.playback
    }

    fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    fn advance(&mut self, dt: f32) {
        let frames = frames(dt);
        if frames <= 0.0 {
            return;
        }

        let point = self.point_at(self.time);
        self.trail.push_back(point);
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }

        self.time += TIME_STEP * self.factor() * frames;
    }

    fn reset(&mut self) {
        self.time = 0.0;
        self.set_complexity(DEFAULT_COMPLEXITY);
    }

    fn resize(&mut self, bounds: Bounds) {
        if bounds.is_valid() {
            self.bounds = bounds;
            // Old samples belong to the previous layout
            self.trail.clear();
        }
    }

    fn draw(&self, batch: &mut ShapeBatch) {
        batch.polyline(&self.reference_path(), PATH_COLOR, 1.0, false);

        let point_color = color::hex(POINT_COLOR);
        let len = self.trail.len() as f32;
        for (i, point) in self.trail.iter().enumerate() {
            let alpha = i as f32 / len;
            let size = POINT_SIZE * (alpha * 0.8 + 0.2);
            batch.fill_circle(*point, size, with_alpha(point_color, alpha * 0.7));
        }

        let current = self.point_at(self.time);
        batch.fill_circle(current, POINT_SIZE, point_color);
        batch.stroke_circle(current, POINT_SIZE, WHITE, 2.0);
    }

    fn adjust(&mut self, control: Control, steps: i32) {
        if control != Control::Primary {
            return;
        }
        let complexity = step_level(self.complexity, steps, MIN_COMPLEXITY, MAX_COMPLEXITY);
        if complexity != self.complexity {
            self.set_complexity(complexity);
        }
    }

    fn describe(&self) -> String {
        format!("Trajectory | complexity {} (Up/Down)", self.complexity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FRAME: f32 = 1.0 / 60.0;

    fn running_demo() -> TrajectoryDemo {
        let mut demo = TrajectoryDemo::new(Bounds::new(800.0, 600.0));
        demo.start();
        demo
    }

    #[test]
    fn test_curve_formula() {
        let demo = TrajectoryDemo::new(Bounds::new(800.0, 600.0));
        let origin = demo.point_at(0.0);
        // sin(0 + sin 0) = 0, sin(0 + cos 0) = sin 1
        assert_abs_diff_eq!(origin.x, 400.0, epsilon = 1e-3);
        assert_abs_diff_eq!(origin.y, 300.0 + 210.0 * 1.0_f32.sin(), epsilon = 1e-3);
    }

    #[test]
    fn test_curve_stays_in_extent() {
        let demo = TrajectoryDemo::new(Bounds::new(800.0, 600.0));
        for point in demo.reference_path() {
            assert!((point.x - 400.0).abs() <= 280.0 + 1e-3);
            assert!((point.y - 300.0).abs() <= 210.0 + 1e-3);
        }
    }

    #[test]
    fn test_time_advances_with_complexity() {
        let mut demo = running_demo();
        demo.update(FRAME);
        assert_abs_diff_eq!(demo.time(), 0.01, epsilon = 1e-5);

        demo.adjust(Control::Primary, 5);
        demo.update(FRAME);
        assert_abs_diff_eq!(demo.time(), 0.03, epsilon = 1e-5);
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut demo = running_demo();
        for _ in 0..250 {
            demo.update(FRAME);
        }
        assert_eq!(demo.trail().len(), TRAIL_LENGTH);
    }

    #[test]
    fn test_complexity_change_clears_trail() {
        let mut demo = running_demo();
        for _ in 0..10 {
            demo.update(FRAME);
        }
        demo.adjust(Control::Primary, -1);
        assert_eq!(demo.complexity(), 4);
        assert!(demo.trail().is_empty());
    }

    #[test]
    fn test_complexity_is_clamped() {
        let mut demo = running_demo();
        demo.adjust(Control::Primary, 100);
        assert_eq!(demo.complexity(), MAX_COMPLEXITY);
        demo.adjust(Control::Primary, -100);
        assert_eq!(demo.complexity(), MIN_COMPLEXITY);
    }

    #[test]
    fn test_reset() {
        let mut demo = running_demo();
        demo.adjust(Control::Primary, 2);
        for _ in 0..10 {
            demo.update(FRAME);
        }
        demo.reset();
        assert_eq!(demo.time(), 0.0);
        assert_eq!(demo.complexity(), DEFAULT_COMPLEXITY);
        assert!(demo.trail().is_empty());
    }

    #[test]
    fn test_stopped_demo_is_frozen() {
        let mut demo = TrajectoryDemo::new(Bounds::new(800.0, 600.0));
        demo.update(FRAME);
        assert_eq!(demo.time(), 0.0);
        assert!(demo.trail().is_empty());
    }
}
