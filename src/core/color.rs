// RGBA color helpers
//
// Colors are plain `Vec4` (r, g, b, a) in the 0.0..=1.0 range, authored in
// sRGB like canvas colors and passed to the GPU unchanged.

use glam::Vec4;

/// RGBA color
pub type Color = Vec4;

pub const WHITE: Color = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const SHADOW: Color = Vec4::new(0.0, 0.0, 0.0, 0.1);

/// Background used by every demo
pub const BACKGROUND: Color = Vec4::new(0.173, 0.173, 0.180, 1.0);

/// Palette shared by the bouncing balls (blue, yellow, red, green, purple)
pub const BALL_PALETTE: [u32; 5] = [0x0077ED, 0xFFCC00, 0xFF3B30, 0x34C759, 0x5E5CE6];

/// Palette cycled by the morphing shape (ball palette plus orange)
pub const MORPH_PALETTE: [u32; 6] = [0x0077ED, 0xFFCC00, 0xFF3B30, 0x34C759, 0x5E5CE6, 0xFF9500];

/// Convert a 0xRRGGBB value into an opaque color
pub fn hex(rgb: u32) -> Color {
    let r = ((rgb >> 16) & 0xFF) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xFF) as f32 / 255.0;
    let b = (rgb & 0xFF) as f32 / 255.0;
    Vec4::new(r, g, b, 1.0)
}

/// Convert HSL (hue in degrees, saturation and lightness in 0..=1) to an opaque color
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    Vec4::new(r + m, g + m, b + m, 1.0)
}

/// Same color with a different alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Vec4::new(color.x, color.y, color.z, alpha.clamp(0.0, 1.0))
}

/// Interpolate through a cyclic palette; `position` is a fractional index
pub fn palette_blend(palette: &[u32], position: f32) -> Color {
    if palette.is_empty() {
        return WHITE;
    }
    let len = palette.len();
    let position = position.rem_euclid(len as f32);
    let index = position.floor() as usize % len;
    let next = (index + 1) % len;
    hex(palette[index]).lerp(hex(palette[next]), position.fract())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hex_conversion() {
        let c = hex(0xFF8000);
        assert_abs_diff_eq!(c.x, 1.0);
        assert_abs_diff_eq!(c.y, 128.0 / 255.0);
        assert_abs_diff_eq!(c.z, 0.0);
        assert_abs_diff_eq!(c.w, 1.0);
    }

    #[test]
    fn test_hsl_primaries() {
        let red = hsl(0.0, 1.0, 0.5);
        assert_abs_diff_eq!(red.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(red.y, 0.0, epsilon = 1e-6);

        let green = hsl(120.0, 1.0, 0.5);
        assert_abs_diff_eq!(green.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(green.x, 0.0, epsilon = 1e-6);

        let blue = hsl(240.0, 1.0, 0.5);
        assert_abs_diff_eq!(blue.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hsl_wraps_hue() {
        let a = hsl(30.0, 0.8, 0.5);
        let b = hsl(390.0, 0.8, 0.5);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_palette_blend() {
        let palette = [0x000000, 0xFFFFFF];
        assert_abs_diff_eq!(palette_blend(&palette, 0.0).x, 0.0);
        assert_abs_diff_eq!(palette_blend(&palette, 0.5).x, 0.5, epsilon = 1e-6);
        // Wraps from the last entry back to the first
        assert_abs_diff_eq!(palette_blend(&palette, 1.25).x, 0.75, epsilon = 1e-6);
        assert_abs_diff_eq!(palette_blend(&palette, 2.0).x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(with_alpha(WHITE, 2.0).w, 1.0);
        assert_eq!(with_alpha(WHITE, 0.3).w, 0.3);
    }
}
