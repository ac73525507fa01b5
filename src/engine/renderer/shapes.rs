// CPU-side geometry batching
//
// Every primitive is tessellated into an indexed triangle list so a single
// pipeline can draw the whole frame.

use super::ShapeVertex;
use crate::core::color::Color;
use glam::Vec2;

const MIN_CIRCLE_SEGMENTS: usize = 12;
const MAX_CIRCLE_SEGMENTS: usize = 64;

/// Triangle geometry collected for one frame
#[derive(Debug, Default, Clone)]
pub struct ShapeBatch {
    vertices: Vec<ShapeVertex>,
    indices: Vec<u32>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all geometry, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    fn positive(value: f32) -> bool {
        value > 0.0
    }

    fn push_vertex(&mut self, position: Vec2, color: Color) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(ShapeVertex::new(position, color));
        index
    }

    /// Number of segments used to approximate a circle of this radius
    fn circle_segments(radius: f32) -> usize {
        (radius.sqrt() * 4.0).clamp(MIN_CIRCLE_SEGMENTS as f32, MAX_CIRCLE_SEGMENTS as f32)
            as usize
    }

    fn circle_points(center: Vec2, radius: f32) -> Vec<Vec2> {
        let segments = Self::circle_segments(radius);
        (0..segments)
            .map(|i| {
                let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
                center + Vec2::from_angle(angle) * radius
            })
            .collect()
    }

    /// Draw a filled circle
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !Self::positive(radius) {
            return;
        }
        let rim = Self::circle_points(center, radius);
        self.fill_fan(center, &rim, color);
    }

    /// Draw a circle outline of the given stroke width
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        if !Self::positive(radius) {
            return;
        }
        let rim = Self::circle_points(center, radius);
        self.polyline(&rim, color, width, true);
    }

    /// Draw a straight line as a quad of the given width
    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        let direction = to - from;
        let length = direction.length();
        if !Self::positive(length) || !Self::positive(width) {
            return;
        }

        let offset = direction.perp() / length * (width / 2.0);
        self.fill_quad(
            [from + offset, to + offset, to - offset, from - offset],
            color,
        );
    }

    /// Draw connected line segments, optionally closing the loop
    pub fn polyline(&mut self, points: &[Vec2], color: Color, width: f32, closed: bool) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color, width);
        }
        if closed && points.len() > 2 {
            self.line(points[points.len() - 1], points[0], color, width);
        }
    }

    /// Fill a quad given its corners in order
    pub fn fill_quad(&mut self, corners: [Vec2; 4], color: Color) {
        self.fill_polygon(&corners, color);
    }

    /// Fill a convex polygon (fan from the first point)
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let first = self.vertices.len() as u32;
        for point in points {
            self.push_vertex(*point, color);
        }
        for i in 1..points.len() as u32 - 1 {
            self.indices
                .extend_from_slice(&[first, first + i, first + i + 1]);
        }
    }

    /// Fill the closed outline `rim` as a fan around `center`.
    ///
    /// Works for any outline that is star-shaped with respect to `center`.
    pub fn fill_fan(&mut self, center: Vec2, rim: &[Vec2], color: Color) {
        if rim.len() < 3 {
            return;
        }
        let hub = self.push_vertex(center, color);
        let start = self.vertices.len() as u32;
        for point in rim {
            self.push_vertex(*point, color);
        }
        let count = rim.len() as u32;
        for i in 0..count {
            let next = (i + 1) % count;
            self.indices
                .extend_from_slice(&[hub, start + i, start + next]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::WHITE;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fill_circle_geometry() {
        let mut batch = ShapeBatch::new();
        batch.fill_circle(Vec2::new(50.0, 50.0), 10.0, WHITE);

        let segments = ShapeBatch::circle_segments(10.0);
        assert_eq!(batch.vertices().len(), segments + 1);
        assert_eq!(batch.indices().len(), segments * 3);

        // Rim vertices sit on the circle
        for vertex in &batch.vertices()[1..] {
            let p = Vec2::from_array(vertex.position);
            assert_abs_diff_eq!(p.distance(Vec2::new(50.0, 50.0)), 10.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_segments_scale_with_radius() {
        assert_eq!(ShapeBatch::circle_segments(1.0), MIN_CIRCLE_SEGMENTS);
        assert_eq!(ShapeBatch::circle_segments(10_000.0), MAX_CIRCLE_SEGMENTS);
        assert!(ShapeBatch::circle_segments(30.0) > ShapeBatch::circle_segments(5.0));
    }

    #[test]
    fn test_degenerate_shapes_are_skipped() {
        let mut batch = ShapeBatch::new();
        batch.fill_circle(Vec2::ZERO, 0.0, WHITE);
        batch.fill_circle(Vec2::ZERO, f32::NAN, WHITE);
        batch.stroke_circle(Vec2::ZERO, -1.0, WHITE, 2.0);
        batch.line(Vec2::ONE, Vec2::ONE, WHITE, 2.0);
        batch.line(Vec2::ZERO, Vec2::ONE, WHITE, 0.0);
        batch.fill_polygon(&[Vec2::ZERO, Vec2::ONE], WHITE);
        batch.fill_fan(Vec2::ZERO, &[Vec2::ONE], WHITE);
        assert!(batch.is_empty());
        assert!(batch.vertices().is_empty());
    }

    #[test]
    fn test_line_is_a_quad_of_requested_width() {
        let mut batch = ShapeBatch::new();
        batch.line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), WHITE, 4.0);

        assert_eq!(batch.indices().len(), 6);
        let ys: Vec<f32> = batch.vertices().iter().map(|v| v.position[1]).collect();
        let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert_abs_diff_eq!(max - min, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_polyline_closed_adds_segment() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];

        let mut open = ShapeBatch::new();
        open.polyline(&points, WHITE, 1.0, false);
        let mut closed = ShapeBatch::new();
        closed.polyline(&points, WHITE, 1.0, true);

        assert_eq!(open.indices().len(), 2 * 6);
        assert_eq!(closed.indices().len(), 3 * 6);
    }

    #[test]
    fn test_indices_stay_in_range() {
        let mut batch = ShapeBatch::new();
        batch.fill_circle(Vec2::new(5.0, 5.0), 3.0, WHITE);
        batch.stroke_circle(Vec2::new(5.0, 5.0), 30.0, WHITE, 2.0);
        batch.fill_quad(
            [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
            WHITE,
        );
        let count = batch.vertices().len() as u32;
        assert!(batch.indices().iter().all(|&i| i < count));
        assert_eq!(batch.indices().len() % 3, 0);
    }

    #[test]
    fn test_clear() {
        let mut batch = ShapeBatch::new();
        batch.fill_circle(Vec2::ZERO, 5.0, WHITE);
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.vertices().is_empty());
    }
}
