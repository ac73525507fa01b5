// Morphing blob built from layered sine waves, cycling through a palette

use std::f32::consts::TAU;

use glam::Vec2;
use log::debug;

use super::{frames, step_level, Animation, DemoKind, Playback};
use crate::core::color::{self, Color, WHITE};
use crate::core::math::Bounds;
use crate::engine::input::Control;
use crate::engine::renderer::ShapeBatch;

const DEFAULT_SPEED: u32 = 5;
const MIN_SPEED: u32 = 1;
const MAX_SPEED: u32 = 10;
const DEFAULT_LOBES: u32 = 6;

/// Base radius as a fraction of the width
const RADIUS_FRACTION: f32 = 0.2;
/// Time advance per frame at speed 5
const TIME_STEP: f32 = 0.02;
/// Palette advance per frame at speed 5
const COLOR_STEP: f32 = 0.01;
/// Outline resolution
const SEGMENTS: usize = 100;
/// A marker dot every this many segments
const DOT_SPACING: usize = 5;

pub struct MorphDemo {
    playback: Playback,
    bounds: Bounds,
    time: f32,
    speed: u32,
    /// Fractional index into the palette
    color_index: f32,
    /// Lobe count of the dominant wave
    lobes: u32,
}

impl MorphDemo {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            playback: Playback::default(),
            bounds,
            time: 0.0,
            speed: DEFAULT_SPEED,
            color_index: 0.0,
            lobes: DEFAULT_LOBES,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn lobes(&self) -> u32 {
        self.lobes
    }

    pub fn color_index(&self) -> f32 {
        self.color_index
    }

    fn factor(&self) -> f32 {
        self.speed as f32 / DEFAULT_SPEED as f32
    }

    fn base_radius(&self) -> f32 {
        self.bounds.width * RADIUS_FRACTION
    }

    /// Outline radius at polar angle `angle`
    pub fn radius_at(&self, angle: f32) -> f32 {
        let base = self.base_radius();
        let n = self.lobes as f32;
        let t = self.time;
        base + (angle * n + t).sin() * base * 0.2
            + (angle * n / 2.0 + t * 1.5).sin() * base * 0.1
            + (angle * n * 2.0 + t * 0.7).cos() * base * 0.05
    }

    fn point_at(&self, angle: f32) -> Vec2 {
        self.bounds.center() + Vec2::from_angle(angle) * self.radius_at(angle)
    }

    pub fn color(&self) -> Color {
        color::palette_blend(&color::MORPH_PALETTE, self.color_index)
    }
}

impl Animation for MorphDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Transform
    }

    fn playback(&self) -> &Playback {
        &self.playback
    }

    fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    fn advance(&mut self, dt: f32) {
        let frames = frames(dt);
        let factor = self.factor();
        self.time += TIME_STEP * factor * frames;
        self.color_index = (self.color_index + COLOR_STEP * factor * frames)
            % color::MORPH_PALETTE.len() as f32;
        self.lobes = 3 + (2.5 + 2.5 * (self.time * 0.1).sin()).floor() as u32;
    }

    fn reset(&mut self) {
        self.time = 0.0;
        self.lobes = DEFAULT_LOBES;
        self.speed = DEFAULT_SPEED;
    }

    fn resize(&mut self, bounds: Bounds) {
        if bounds.is_valid() {
            self.bounds = bounds;
        }
    }

    fn draw(&self, batch: &mut ShapeBatch) {
        let color = self.color();
        let step = TAU / SEGMENTS as f32;
        let outline: Vec<Vec2> = (0..SEGMENTS).map(|i| self.point_at(i as f32 * step)).collect();

        // The radius never drops below 65% of the base, so the outline is
        // star-shaped around the center
        batch.fill_fan(self.bounds.center(), &outline, color);

        for i in (0..SEGMENTS).step_by(DOT_SPACING) {
            let angle = i as f32 * step;
            let dot_radius = self.radius_at(angle) * 0.05;
            let position = outline[i];
            batch.fill_circle(position, dot_radius, WHITE);
            batch.stroke_circle(position, dot_radius, color, 2.0);
        }
    }

    fn adjust(&mut self, control: Control, steps: i32) {
        if control != Control::Primary {
            return;
        }
        self.speed = step_level(self.speed, steps, MIN_SPEED, MAX_SPEED);
        debug!("Transform speed set to {}", self.speed);
    }

    fn describe(&self) -> String {
        format!("Transform | speed {} (Up/Down) | {} lobes", self.speed, self.lobes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FRAME: f32 = 1.0 / 60.0;

    fn running_demo() -> MorphDemo {
        let mut demo = MorphDemo::new(Bounds::new(800.0, 600.0));
        demo.start();
        demo
    }

    #[test]
    fn test_radius_stays_within_wave_envelope() {
        let mut demo = running_demo();
        for _ in 0..500 {
            demo.update(FRAME);
            for i in 0..SEGMENTS {
                let r = demo.radius_at(i as f32 * TAU / SEGMENTS as f32);
                assert!(r >= 160.0 * 0.65 - 1e-3);
                assert!(r <= 160.0 * 1.35 + 1e-3);
            }
        }
    }

    #[test]
    fn test_radius_formula_at_time_zero() {
        let demo = MorphDemo::new(Bounds::new(800.0, 600.0));
        // sin 0 = 0, sin 0 = 0, cos 0 = 1
        assert_abs_diff_eq!(demo.radius_at(0.0), 160.0 * 1.05, epsilon = 1e-3);
    }

    #[test]
    fn test_time_and_color_advance_with_speed() {
        let mut demo = running_demo();
        demo.update(FRAME);
        assert_abs_diff_eq!(demo.time(), 0.02, epsilon = 1e-5);
        assert_abs_diff_eq!(demo.color_index(), 0.01, epsilon = 1e-5);

        demo.adjust(Control::Primary, 5);
        demo.update(FRAME);
        assert_abs_diff_eq!(demo.time(), 0.06, epsilon = 1e-5);
    }

    #[test]
    fn test_lobes_follow_slow_wave() {
        let mut demo = running_demo();
        demo.update(FRAME);
        // 2.5 + 2.5 sin(~0) floors to 2
        assert_eq!(demo.lobes(), 5);

        for _ in 0..5000 {
            demo.update(FRAME);
            assert!((3..=8).contains(&demo.lobes()));
        }
    }

    #[test]
    fn test_color_index_wraps() {
        let mut demo = running_demo();
        demo.adjust(Control::Primary, 5);
        for _ in 0..400 {
            demo.update(FRAME);
            assert!(demo.color_index() < color::MORPH_PALETTE.len() as f32);
        }
    }

    #[test]
    fn test_reset() {
        let mut demo = running_demo();
        demo.adjust(Control::Primary, 3);
        for _ in 0..30 {
            demo.update(FRAME);
        }
        demo.reset();
        assert_eq!(demo.time(), 0.0);
        assert_eq!(demo.speed(), DEFAULT_SPEED);
        assert_eq!(demo.lobes(), DEFAULT_LOBES);
    }

    #[test]
    fn test_draw_emits_shape_and_dots() {
        let demo = MorphDemo::new(Bounds::new(800.0, 600.0));
        let mut batch = ShapeBatch::new();
        demo.draw(&mut batch);
        // Fan: hub plus one vertex per segment, then 20 dots
        assert!(batch.vertices().len() > SEGMENTS + 1 + 20);
    }
}
