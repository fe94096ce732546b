use rand::Rng;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::unit_clamp;
use crate::surface::buffer::Surface;

/// What one scanline pass drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanlineReport {
    /// Row distance between successive dark lines.
    pub spacing: u32,
    /// Height of each dark line.
    pub thickness: u32,
    /// Number of dark lines drawn.
    pub lines: u32,
    /// Number of random bright distortion lines drawn.
    pub distortion_lines: u32,
}

/// Row spacing shrinks from 4 towards 2 as intensity rises.
pub fn scanline_spacing(intensity: f64) -> u32 {
    let i = unit_clamp(intensity);
    ((4.0 * (1.0 - i * 0.5)).floor() as u32).max(2)
}

/// Dark line height: 1 row, 2 at full intensity.
pub fn scanline_thickness(intensity: f64) -> u32 {
    let i = unit_clamp(intensity);
    ((2.0 * i).floor() as u32).max(1)
}

/// Opacity of the dark line starting at row `y`.
pub fn scanline_opacity(y: u32, intensity: f64) -> f32 {
    let i = unit_clamp(intensity);
    (0.3 + ((f64::from(y) * 0.1).sin() * 0.2 + 0.2) * i) as f32
}

/// Darken periodic rows, then add a few bright single-row distortion lines.
pub fn apply_scanlines<R: Rng + ?Sized>(
    surface: &mut Surface,
    intensity: f64,
    rng: &mut R,
) -> ScanlineReport {
    let intensity = unit_clamp(intensity);
    let width = i64::from(surface.width());
    let height = surface.height();
    let spacing = scanline_spacing(intensity);
    let thickness = scanline_thickness(intensity);

    let mut lines = 0;
    for y in (0..height).step_by(spacing as usize) {
        let color = Rgba8Premul::from_rgb_alpha(0, 0, 0, scanline_opacity(y, intensity));
        surface.fill_rect(0, i64::from(y), width, i64::from(thickness), color);
        lines += 1;
    }

    let distortion_lines = (intensity * 3.0).floor() as u32;
    for _ in 0..distortion_lines {
        let y = rng.random_range(0..height);
        let alpha = rng.random_range(0.3f32..0.7);
        let color = Rgba8Premul::from_rgb_alpha(255, 255, 255, alpha);
        surface.fill_rect(0, i64::from(y), width, 1, color);
    }

    ScanlineReport {
        spacing,
        thickness,
        lines,
        distortion_lines,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scanlines.rs"]
mod tests;
