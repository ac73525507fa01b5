// Demonstrations shown by the app
//
// Each demo is a self-contained animation behind the [`Animation`] trait:
// - Circle: a single bouncing circle
// - Trajectory: a point tracing a Lissajous-like curve
// - Physics: bouncing balls driven by the physics engine
// - Theorem: a right triangle with squares on its sides
// - Transform: a morphing, color-cycling blob
//
// The [`AnimationHost`] owns one of each and keeps exactly one active.

mod circle;
mod host;
mod morph;
mod physics;
mod theorem;
mod trajectory;

pub use circle::CircleDemo;
pub use host::AnimationHost;
pub use morph::MorphDemo;
pub use physics::PhysicsDemo;
pub use theorem::TheoremDemo;
pub use trajectory::TrajectoryDemo;

use log::info;

use crate::core::math::Bounds;
use crate::engine::input::Control;
use crate::engine::renderer::ShapeBatch;

/// Decorative animations are tuned in frames of a 60 Hz display
pub const REFERENCE_FPS: f32 = 60.0;

/// Convert elapsed seconds into reference frames
pub fn frames(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt * REFERENCE_FPS
    } else {
        0.0
    }
}

/// Identifies one of the demos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DemoKind {
    Circle,
    Trajectory,
    Physics,
    Theorem,
    Transform,
}

impl DemoKind {
    /// Every demo in tab order
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Circle,
        DemoKind::Trajectory,
        DemoKind::Physics,
        DemoKind::Theorem,
        DemoKind::Transform,
    ];

    /// Position in tab order
    pub fn index(self) -> usize {
        match self {
            DemoKind::Circle => 0,
            DemoKind::Trajectory => 1,
            DemoKind::Physics => 2,
            DemoKind::Theorem => 3,
            DemoKind::Transform => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following tab, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding tab, wrapping around
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            DemoKind::Circle => "Circle",
            DemoKind::Trajectory => "Trajectory",
            DemoKind::Physics => "Physics",
            DemoKind::Theorem => "Theorem",
            DemoKind::Transform => "Transform",
        }
    }
}

/// Running flag shared by every demo
#[derive(Debug, Default, Clone)]
pub struct Playback {
    running: bool,
}

impl Playback {
    /// Returns true if the state changed
    pub fn start(&mut self) -> bool {
        let changed = !self.running;
        self.running = true;
        changed
    }

    /// Returns true if the state changed
    pub fn stop(&mut self) -> bool {
        let changed = self.running;
        self.running = false;
        changed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Common interface of every demo
pub trait Animation {
    fn kind(&self) -> DemoKind;

    fn playback(&self) -> &Playback;

    fn playback_mut(&mut self) -> &mut Playback;

    /// Advance the animation by `dt` seconds; only called while running
    fn advance(&mut self, dt: f32);

    /// Restore the demo's initial parameters
    fn reset(&mut self);

    /// Adopt a new drawing area
    fn resize(&mut self, bounds: Bounds);

    /// Append this frame's geometry
    fn draw(&self, batch: &mut ShapeBatch);

    /// Nudge one of the demo's controls by whole slider steps
    fn adjust(&mut self, control: Control, steps: i32);

    /// One-line status for the window title
    fn describe(&self) -> String;

    fn start(&mut self) {
        if self.playback_mut().start() {
            info!("{} started", self.kind().label());
        }
    }

    fn stop(&mut self) {
        if self.playback_mut().stop() {
            info!("{} stopped", self.kind().label());
        }
    }

    fn is_running(&self) -> bool {
        self.playback().is_running()
    }

    /// Advance if running; a stopped demo is frozen
    fn update(&mut self, dt: f32) {
        if self.is_running() {
            self.advance(dt);
        }
    }
}

/// Grid slack so values that are on the grid up to rounding count as on it
const GRID_TOLERANCE: f32 = 1e-4;

/// Move `value` by whole `step`s inside `[min, max]`.
///
/// An off-grid value first lands on the neighbouring grid point in the
/// direction of travel, like a slider snapping to its step.
pub fn step_value(value: f32, steps: i32, step: f32, min: f32, max: f32) -> f32 {
    let grid = value / step;
    let target = match steps.signum() {
        1 => (grid + GRID_TOLERANCE).floor() + steps as f32,
        -1 => (grid - GRID_TOLERANCE).ceil() + steps as f32,
        _ => grid.round(),
    };
    (target * step).clamp(min, max)
}

/// Integer slider in `[min, max]`
pub fn step_level(value: u32, steps: i32, min: u32, max: u32) -> u32 {
    (value as i64 + steps as i64).clamp(min as i64, max as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kind_order_round_trips() {
        for (index, kind) in DemoKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), index);
            assert_eq!(DemoKind::from_index(index), Some(*kind));
        }
        assert_eq!(DemoKind::from_index(5), None);
    }

    #[test]
    fn test_kind_wraps() {
        assert_eq!(DemoKind::Transform.next(), DemoKind::Circle);
        assert_eq!(DemoKind::Circle.previous(), DemoKind::Transform);
        assert_eq!(DemoKind::Physics.next(), DemoKind::Theorem);
    }

    #[test]
    fn test_frames() {
        assert_abs_diff_eq!(frames(1.0 / 60.0), 1.0, epsilon = 1e-5);
        assert_eq!(frames(-1.0), 0.0);
        assert_eq!(frames(f32::NAN), 0.0);
    }

    #[test]
    fn test_playback_transitions() {
        let mut playback = Playback::default();
        assert!(!playback.is_running());
        assert!(playback.start());
        assert!(!playback.start());
        assert!(playback.stop());
        assert!(!playback.stop());
    }

    #[test]
    fn test_step_value_snaps_and_clamps() {
        assert_abs_diff_eq!(step_value(9.8, 1, 0.5, 0.0, 20.0), 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(step_value(9.8, -1, 0.5, 0.0, 20.0), 9.5, epsilon = 1e-5);
        assert_abs_diff_eq!(step_value(10.0, 2, 0.5, 0.0, 20.0), 11.0, epsilon = 1e-5);
        assert_abs_diff_eq!(step_value(0.8, 1, 0.05, 0.0, 1.0), 0.85, epsilon = 1e-5);
        assert_abs_diff_eq!(step_value(0.85, 1, 0.05, 0.0, 1.0), 0.9, epsilon = 1e-5);
        assert_eq!(step_value(19.5, 4, 0.5, 0.0, 20.0), 20.0);
        assert_eq!(step_value(0.0, -1, 0.05, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_step_level() {
        assert_eq!(step_level(5, 1, 1, 10), 6);
        assert_eq!(step_level(1, -3, 1, 10), 1);
        assert_eq!(step_level(10, 2, 1, 10), 10);
    }
}
