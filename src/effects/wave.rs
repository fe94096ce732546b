use rand::Rng;
use std::f64::consts::PI;

use crate::foundation::math::unit_clamp;
use crate::surface::buffer::Surface;
use crate::surface::snapshot::Snapshot;

/// Above this intensity the wave pass adds random vertical stretch blocks.
pub const STRETCH_THRESHOLD: f64 = 0.7;

/// Parameters of the two summed sine waves for one intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Whole-pixel amplitude of the sine term.
    pub primary_amplitude: f64,
    /// Sine frequency in radians per row.
    pub primary_frequency: f64,
    /// Whole-pixel amplitude of the cosine term.
    pub secondary_amplitude: f64,
    /// Cosine frequency in radians per row.
    pub secondary_frequency: f64,
    /// Cosine phase offset.
    pub phase: f64,
}

impl WaveParams {
    /// Wave shape for `intensity` (clamped to `[0, 1]`).
    pub fn for_intensity(intensity: f64) -> Self {
        let i = unit_clamp(intensity);
        Self {
            primary_amplitude: (i * 12.0).floor(),
            primary_frequency: 0.05 + i * 0.1,
            secondary_amplitude: (i * 6.0).floor(),
            secondary_frequency: 0.02 + i * 0.05,
            phase: i * PI,
        }
    }

    /// Horizontal shift for row `y`, before rounding to whole pixels.
    pub fn offset(&self, y: u32) -> f64 {
        let y = f64::from(y);
        self.primary_amplitude * (y * self.primary_frequency).sin()
            + self.secondary_amplitude * (y * self.secondary_frequency + self.phase).cos()
    }

    /// Upper bound on `|offset(y)|` for any row.
    pub fn max_shift(&self) -> f64 {
        self.primary_amplitude + self.secondary_amplitude
    }
}

/// What one wave pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaveReport {
    /// Largest absolute whole-pixel row shift applied.
    pub max_row_shift: u32,
    /// Number of vertical stretch/compress blocks layered on top.
    pub stretches: u32,
}

/// Resample every row with a horizontal sine offset, then (at high intensity) layer a few
/// vertically stretched or compressed bands from the pre-filter image.
pub fn apply_wave_distortion<R: Rng + ?Sized>(
    surface: &mut Surface,
    intensity: f64,
    rng: &mut R,
) -> WaveReport {
    let intensity = unit_clamp(intensity);
    let params = WaveParams::for_intensity(intensity);
    let src = Snapshot::capture(surface);
    surface.clear();

    let mut max_row_shift = 0u32;
    for y in 0..surface.height() {
        let dx = params.offset(y).round() as i64;
        max_row_shift = max_row_shift.max(dx.unsigned_abs() as u32);
        surface.draw_rows_from(&src, i64::from(y), 1, dx, i64::from(y));
    }

    let mut stretches = 0;
    if intensity > STRETCH_THRESHOLD {
        let height = surface.height();
        let count = (intensity * 5.0).floor() as u32;
        for _ in 0..count {
            let center_y = f64::from(rng.random_range(0..height));
            let stretch_height = f64::from(rng.random_range(5u32..15));
            let factor = rng.random_range(0.7f64..1.3);
            let section_height = (stretch_height / factor).floor();
            surface.draw_scaled_rows_from(
                &src,
                center_y - section_height / 2.0,
                section_height,
                center_y - stretch_height / 2.0,
                stretch_height,
            );
            stretches += 1;
        }
    }

    WaveReport {
        max_row_shift,
        stretches,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/wave.rs"]
mod tests;
