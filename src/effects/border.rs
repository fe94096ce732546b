use std::f64::consts::TAU;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::alpha_to_u8;
use crate::surface::buffer::Surface;

/// Edge strip thickness in pixels.
pub const BORDER_WIDTH: i64 = 4;
/// Distance between scanline ticks along each edge.
pub const TICK_PERIOD: usize = 4;
/// Tick length along the edge.
pub const TICK_LENGTH: i64 = 2;

const GRADIENT_MID: [u8; 3] = [80, 80, 255];

/// Border alpha, periodic in `progress` with period 1.
pub fn border_pulse(progress: f64) -> f64 {
    0.5 + (progress * TAU).sin() * 0.3
}

/// Three-stop gradient (dark, blue, dark) sampled at the center of pixel `i` of `len`.
fn gradient_color(i: u32, len: u32, alpha: u8) -> Rgba8Premul {
    let t = (f64::from(i) + 0.5) / f64::from(len.max(1));
    let f = 1.0 - (2.0 * t - 1.0).abs();
    let ch = |c: u8| (f64::from(c) * f).round().clamp(0.0, 255.0) as u8;
    Rgba8Premul::from_straight_rgba(
        ch(GRADIENT_MID[0]),
        ch(GRADIENT_MID[1]),
        ch(GRADIENT_MID[2]),
        alpha,
    )
}

/// Draw the pulsing frame around the effect region. Deterministic in `(size, progress)`.
pub fn draw_border(surface: &mut Surface, progress: f64) {
    let w = surface.width();
    let h = surface.height();
    let (wi, hi) = (i64::from(w), i64::from(h));
    let alpha = alpha_to_u8(border_pulse(progress) as f32);

    for y in (0..BORDER_WIDTH).chain(hi - BORDER_WIDTH..hi) {
        surface.fill_row_with(y, 0, wi, |x| gradient_color(x, w, alpha));
    }
    for y in 0..h {
        let c = gradient_color(y, h, alpha);
        let yi = i64::from(y);
        surface.fill_rect(0, yi, BORDER_WIDTH, 1, c);
        surface.fill_rect(wi - BORDER_WIDTH, yi, BORDER_WIDTH, 1, c);
    }

    let tick = Rgba8Premul::from_rgb_alpha(0, 0, 0, 0.5);
    for x in (0..wi).step_by(TICK_PERIOD) {
        surface.fill_rect(x, 0, TICK_LENGTH, BORDER_WIDTH, tick);
        surface.fill_rect(x, hi - BORDER_WIDTH, TICK_LENGTH, BORDER_WIDTH, tick);
    }
    for y in (0..hi).step_by(TICK_PERIOD) {
        surface.fill_rect(0, y, BORDER_WIDTH, TICK_LENGTH, tick);
        surface.fill_rect(wi - BORDER_WIDTH, y, BORDER_WIDTH, TICK_LENGTH, tick);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/border.rs"]
mod tests;
