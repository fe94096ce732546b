use rand::Rng;
use smallvec::SmallVec;

use crate::effects::color_shift::apply_color_shift;
use crate::effects::glitch::{GlitchReport, apply_glitch};
use crate::effects::scanlines::{ScanlineReport, apply_scanlines};
use crate::effects::wave::{WaveReport, apply_wave_distortion};
use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::unit_clamp;
use crate::surface::buffer::Surface;

/// Glitch artifacts are drawn only strictly above this intensity.
pub const GLITCH_THRESHOLD: f64 = 0.4;

/// One stage of the fixed filter pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Translucent dark base tinted by intensity.
    BaseFill,
    /// Periodic dark rows plus random bright lines.
    Scanlines,
    /// Per-row sine offset resample.
    Wave,
    /// RGB channel split (a no-op below its own threshold).
    ColorShift,
    /// Strip/block/flicker glitches.
    Glitch,
}

/// What `compose_frame` ran, in order, plus each randomized stage's report.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Stages executed, in execution order.
    pub stages: SmallVec<[Stage; 5]>,
    /// Intensity after clamping.
    pub intensity: f64,
    /// Scanline pass tally.
    pub scanlines: ScanlineReport,
    /// Wave pass tally.
    pub wave: WaveReport,
    /// Whether the color split actually modified pixels.
    pub color_shifted: bool,
    /// Present only when the glitch stage ran.
    pub glitch: Option<GlitchReport>,
}

/// Base tint: `rgba(0, 0, 34, intensity * 0.5)`.
pub fn base_fill_color(intensity: f64) -> Rgba8Premul {
    Rgba8Premul::from_rgb_alpha(0, 0, 34, (unit_clamp(intensity) * 0.5) as f32)
}

/// Build one effect frame. Fully overwrites `surface`.
///
/// Order is fixed: base fill, scanlines, wave, color shift, then glitch when
/// `intensity > GLITCH_THRESHOLD`. Intensity is clamped to `[0, 1]`.
pub fn compose_frame<R: Rng + ?Sized>(
    surface: &mut Surface,
    intensity: f64,
    rng: &mut R,
) -> FrameReport {
    let intensity = unit_clamp(intensity);
    let mut report = FrameReport {
        intensity,
        ..FrameReport::default()
    };

    surface.clear();
    surface.fill(base_fill_color(intensity));
    report.stages.push(Stage::BaseFill);

    report.scanlines = apply_scanlines(surface, intensity, rng);
    report.stages.push(Stage::Scanlines);

    report.wave = apply_wave_distortion(surface, intensity, rng);
    report.stages.push(Stage::Wave);

    report.color_shifted = apply_color_shift(surface, intensity);
    report.stages.push(Stage::ColorShift);

    if intensity > GLITCH_THRESHOLD {
        report.glitch = Some(apply_glitch(surface, intensity, rng));
        report.stages.push(Stage::Glitch);
    }

    tracing::trace!(
        intensity,
        stages = report.stages.len(),
        glitch = report.glitch.is_some(),
        "composed frame"
    );
    report
}

#[cfg(test)]
#[path = "../../tests/unit/effects/compose.rs"]
mod tests;
