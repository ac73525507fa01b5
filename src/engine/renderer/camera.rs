// Pixel-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::core::math::Bounds;

/// Orthographic camera mapping logical pixels (origin top-left, y down) to clip space
#[derive(Debug, Clone)]
pub struct Camera {
    /// Viewport width in logical pixels
    viewport_width: f32,
    /// Viewport height in logical pixels
    viewport_height: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a new camera
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Update the view-projection matrix
    fn update_view_proj(&mut self) {
        // Bottom is the viewport height so y grows downward like a canvas
        self.view_proj = Mat4::orthographic_rh(
            0.0,
            self.viewport_width.max(1.0),
            self.viewport_height.max(1.0),
            0.0,
            -1.0, // Near plane
            1.0,  // Far plane
        );
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Visible area in logical pixels
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.viewport_width, self.viewport_height)
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec2;

    fn to_ndc(camera: &Camera, point: Vec2) -> Vec2 {
        let clip = camera.view_proj_matrix() * point.extend(0.0).extend(1.0);
        Vec2::new(clip.x, clip.y)
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::new(800.0, 600.0);

        let top_left = to_ndc(&camera, Vec2::new(0.0, 0.0));
        assert_abs_diff_eq!(top_left.x, -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(top_left.y, 1.0, epsilon = 1e-5);

        let bottom_right = to_ndc(&camera, Vec2::new(800.0, 600.0));
        assert_abs_diff_eq!(bottom_right.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(bottom_right.y, -1.0, epsilon = 1e-5);

        let center = to_ndc(&camera, Vec2::new(400.0, 300.0));
        assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_resize_updates_projection() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.resize(400.0, 200.0);

        assert_eq!(camera.bounds(), Bounds::new(400.0, 200.0));
        let corner = to_ndc(&camera, Vec2::new(400.0, 200.0));
        assert_abs_diff_eq!(corner.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(corner.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_viewport_stays_finite() {
        let camera = Camera::new(0.0, 0.0);
        assert!(camera.view_proj_matrix().is_finite());
    }
}
