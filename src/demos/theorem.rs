// Pythagorean theorem: a right triangle that grows squares on its sides

use glam::{Vec2, Vec4};
use log::debug;

use super::{frames, step_value, Animation, DemoKind, Playback};
use crate::core::color::{self, with_alpha, Color};
use crate::core::math::{approx_equal, lerp, Bounds};
use crate::engine::input::Control;
use crate::engine::renderer::ShapeBatch;

const DEFAULT_ANGLE: f32 = 45.0;
const MIN_ANGLE: f32 = 5.0;
const MAX_ANGLE: f32 = 85.0;
const ANGLE_STEP: f32 = 5.0;
/// The angle is considered settled within this many degrees of its target
const ANGLE_TOLERANCE: f32 = 0.1;
/// Fraction of the remaining angle covered per frame
const EASING: f32 = 0.05;
/// Progress gained per frame once settled; squares appear past 1
const PROGRESS_SPEED: f32 = 0.02;
/// Square growth per frame
const SQUARES_SPEED: f32 = 0.01;
/// Hypotenuse as a fraction of the shorter side
const HYPOTENUSE_FRACTION: f32 = 0.6;

const SIDE_A_COLOR: u32 = 0x0077ED;
const SIDE_B_COLOR: u32 = 0xFFCC00;
const SIDE_C_COLOR: u32 = 0xFF3B30;
const OUTLINE_COLOR: u32 = 0xF7F7F7;
const TRIANGLE_FILL: Vec4 = Vec4::new(0.0, 119.0 / 255.0, 237.0 / 255.0, 0.1);

const DASH: f32 = 5.0;

/// Right triangle with the right angle at `right`
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// Vertical leg
    pub a: f32,
    /// Horizontal leg
    pub b: f32,
    /// Hypotenuse
    pub c: f32,
    /// Bottom-left corner
    pub right: Vec2,
    /// Bottom-right corner
    pub base_end: Vec2,
    /// Top-left corner
    pub apex: Vec2,
}

impl Triangle {
    fn centroid(&self) -> Vec2 {
        (self.right + self.base_end + self.apex) / 3.0
    }
}

pub struct TheoremDemo {
    playback: Playback,
    bounds: Bounds,
    /// Displayed angle in degrees
    angle: f32,
    target_angle: f32,
    progress: f32,
    show_squares: bool,
    squares_progress: f32,
}

impl TheoremDemo {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            playback: Playback::default(),
            bounds,
            angle: DEFAULT_ANGLE,
            target_angle: DEFAULT_ANGLE,
            progress: 0.0,
            show_squares: false,
            squares_progress: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    pub fn squares_progress(&self) -> f32 {
        self.squares_progress
    }

    fn hide_squares(&mut self) {
        self.progress = 0.0;
        self.show_squares = false;
        self.squares_progress = 0.0;
    }

    /// Triangle for the current angle, centered in the bounds
    pub fn triangle(&self) -> Triangle {
        let c = self.bounds.min_side() * HYPOTENUSE_FRACTION;
        let theta = self.angle.to_radians();
        let a = c * theta.sin();
        let b = c * theta.cos();

        let center = self.bounds.center();
        let right = Vec2::new(center.x - b / 2.0, center.y + a / 2.0);
        Triangle {
            a,
            b,
            c,
            right,
            base_end: right + Vec2::new(b, 0.0),
            apex: right - Vec2::new(0.0, a),
        }
    }

    /// Square standing on edge `from`-`to`, grown outward by `progress`
    fn square_on(from: Vec2, to: Vec2, inside: Vec2, progress: f32) -> [Vec2; 4] {
        let edge = to - from;
        let mut normal = edge.perp().normalize_or_zero();
        if normal.dot((from + to) / 2.0 - inside) < 0.0 {
            normal = -normal;
        }
        let depth = normal * edge.length() * progress;
        [from, to, to + depth, from + depth]
    }

    fn draw_square(batch: &mut ShapeBatch, corners: [Vec2; 4], side: Color, progress: f32) {
        batch.fill_quad(corners, with_alpha(side, 0.5 * progress));
        batch.polyline(&corners, side, 2.0, true);
    }

    fn dashed_line(batch: &mut ShapeBatch, from: Vec2, to: Vec2, color: Color, width: f32) {
        let length = from.distance(to);
        if length <= 0.0 {
            return;
        }
        let direction = (to - from) / length;
        let mut offset = 0.0;
        while offset < length {
            let end = (offset + DASH).min(length);
            batch.line(from + direction * offset, from + direction * end, color, width);
            offset += DASH * 2.0;
        }
    }
}

impl Animation for TheoremDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Theorem
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

        if !approx_equal(self.angle, self.target_angle, ANGLE_TOLERANCE) {
            // Same as applying the per-frame easing `frames` times
            let eased = 1.0 - (1.0 - EASING).powf(frames);
            self.angle = lerp(self.angle, self.target_angle, eased);
            self.hide_squares();
            return;
        }

        self.progress += PROGRESS_SPEED * frames;
        if self.progress > 1.0 {
            self.show_squares = true;
        }
        if self.show_squares {
            self.squares_progress = (self.squares_progress + SQUARES_SPEED * frames).min(1.0);
        }
    }

    fn reset(&mut self) {
        self.angle = DEFAULT_ANGLE;
        self.target_angle = DEFAULT_ANGLE;
        self.hide_squares();
    }

    fn resize(&mut self, bounds: Bounds) {
        if bounds.is_valid() {
            self.bounds = bounds;
        }
    }

    fn draw(&self, batch: &mut ShapeBatch) {
        let triangle = self.triangle();
        let corners = [triangle.right, triangle.base_end, triangle.apex];
        let side_a = color::hex(SIDE_A_COLOR);
        let side_b = color::hex(SIDE_B_COLOR);
        let side_c = color::hex(SIDE_C_COLOR);

        if self.squares_progress > 0.0 {
            let inside = triangle.centroid();
            let progress = self.squares_progress;
            let squares = [
                (Self::square_on(triangle.right, triangle.apex, inside, progress), side_a),
                (Self::square_on(triangle.right, triangle.base_end, inside, progress), side_b),
                (Self::square_on(triangle.base_end, triangle.apex, inside, progress), side_c),
            ];
            for (square, side) in squares {
                Self::draw_square(batch, square, side, progress);
            }
        }

        batch.fill_polygon(&corners, TRIANGLE_FILL);
        batch.polyline(&corners, color::hex(OUTLINE_COLOR), 2.0, true);

        Self::dashed_line(batch, triangle.apex, triangle.right, side_a, 2.0);
        Self::dashed_line(batch, triangle.apex, triangle.base_end, side_b, 2.0);
    }

    fn adjust(&mut self, control: Control, steps: i32) {
        if control != Control::Primary {
            return;
        }
        let target = step_value(self.target_angle, steps, ANGLE_STEP, MIN_ANGLE, MAX_ANGLE);
        if target != self.target_angle {
            self.target_angle = target;
            self.hide_squares();
            debug!("Theorem angle target set to {}", target);
        }
    }

    fn describe(&self) -> String {
        let mut text = format!(
            "Theorem | θ = {}° (Up/Down) | a² + b² = c²",
            self.angle.round()
        );
        if self.squares_progress >= 1.0 {
            let triangle = self.triangle();
            text.push_str(&format!(
                " | {:.0} + {:.0} = {:.0}",
                triangle.a * triangle.a,
                triangle.b * triangle.b,
                triangle.c * triangle.c
            ));
        }
        text
    }
}
