use rand::Rng;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::unit_clamp;
use crate::surface::buffer::Surface;
use crate::surface::snapshot::Snapshot;

/// Above this intensity a "broken screen" band may appear.
pub const BROKEN_SCREEN_THRESHOLD: f64 = 0.8;
/// Chance of a broken-screen band per frame once above the threshold.
pub const BROKEN_SCREEN_CHANCE: f64 = 0.3;

/// Kind of a single glitch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlitchKind {
    /// Thin horizontal strip re-drawn with a small random horizontal offset.
    Strip,
    /// Taller block re-drawn with an intensity-driven offset.
    Block,
    /// Bright translucent strip (drawn only with probability `intensity * 0.7`).
    Flicker,
}

/// Tally of what one glitch pass drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlitchReport {
    /// Strip events drawn.
    pub strips: u32,
    /// Block events drawn.
    pub blocks: u32,
    /// Flicker events rolled, whether or not they drew.
    pub flickers: u32,
    /// Flicker events that actually drew a strip.
    pub flickers_drawn: u32,
    /// Whether the broken-screen band was drawn.
    pub broken_screen: bool,
}

impl GlitchReport {
    /// Number of glitch events rolled (excluding the broken-screen band).
    pub fn events(&self) -> u32 {
        self.strips + self.blocks + self.flickers
    }
}

/// Number of glitch events per frame.
pub fn glitch_event_count(intensity: f64) -> u32 {
    (unit_clamp(intensity) * 5.0).floor() as u32
}

/// Horizontal offset of a block glitch; fixed for a given intensity.
pub fn block_offset(intensity: f64) -> i64 {
    (unit_clamp(intensity) * 30.0).floor() as i64 - 15
}

/// Layer strip/block/flicker glitches copied from a snapshot of the current frame, and at high
/// intensity occasionally tear the image with a dark band and shift everything below it.
pub fn apply_glitch<R: Rng + ?Sized>(
    surface: &mut Surface,
    intensity: f64,
    rng: &mut R,
) -> GlitchReport {
    let intensity = unit_clamp(intensity);
    let src = Snapshot::capture(surface);
    let width = i64::from(surface.width());
    let height = i64::from(surface.height());
    let mut report = GlitchReport::default();

    for _ in 0..glitch_event_count(intensity) {
        let kind = match rng.random_range(0..3u8) {
            0 => GlitchKind::Strip,
            1 => GlitchKind::Block,
            _ => GlitchKind::Flicker,
        };
        match kind {
            GlitchKind::Strip => {
                let y = rng.random_range(0..height);
                let h = rng.random_range(2..10i64);
                let dx = rng.random_range(-10..=10i64);
                surface.draw_rows_from(&src, y, h, dx, y);
                report.strips += 1;
            }
            GlitchKind::Block => {
                let y = rng.random_range(0..(height - 30).max(1));
                let h = rng.random_range(10..30i64);
                surface.draw_rows_from(&src, y, h, block_offset(intensity), y);
                report.blocks += 1;
            }
            GlitchKind::Flicker => {
                report.flickers += 1;
                if rng.random_bool(intensity * 0.7) {
                    let y = rng.random_range(0..height);
                    let h = rng.random_range(1..=5i64);
                    let alpha = rng.random_range(0.0f32..0.7);
                    surface.fill_rect(
                        0,
                        y,
                        width,
                        h,
                        Rgba8Premul::from_rgb_alpha(255, 255, 255, alpha),
                    );
                    report.flickers_drawn += 1;
                }
            }
        }
    }

    if intensity > BROKEN_SCREEN_THRESHOLD && rng.random_bool(BROKEN_SCREEN_CHANCE) {
        let h = height as f64;
        let break_y = (h * 0.3 + rng.random_range(0.0..1.0) * h * 0.4).floor() as i64;
        let break_h = (h * 0.05).floor() as i64;
        surface.fill_rect(
            0,
            break_y,
            width,
            break_h,
            Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.8),
        );
        let below = break_y + break_h;
        let dx = rng.random_range(-5..5i64);
        surface.draw_rows_from(&src, below, height - below, dx, below);
        report.broken_screen = true;
    }

    report
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glitch.rs"]
mod tests;
