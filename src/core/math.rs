// Math utilities and helper functions

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Size of a drawing/simulation area in logical pixels.
///
/// Origin is the top-left corner, y grows downward (canvas convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Create new bounds (not validated, see [`Bounds::is_valid`])
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds are usable only with a finite, non-zero area
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Center point of the area
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Clamp a circle center so the whole circle stays inside the area
    pub fn clamp_center(&self, center: Vec2, radius: f32) -> Vec2 {
        // max() first so an oversized radius still yields a finite position
        let max_x = (self.width - radius).max(radius);
        let max_y = (self.height - radius).max(radius);
        Vec2::new(
            clamp(center.x, radius, max_x),
            clamp(center.y, radius, max_y),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
