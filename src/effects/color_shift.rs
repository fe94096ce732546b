use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::{premul_channel, unit_clamp, unpremul_channel};
use crate::surface::buffer::Surface;
use crate::surface::snapshot::Snapshot;

/// Below this intensity the channel split is skipped entirely.
pub const COLOR_SHIFT_THRESHOLD: f64 = 0.3;

/// Red channel source distance (pixels to the right).
pub fn red_shift(intensity: f64) -> i64 {
    (unit_clamp(intensity) * 4.0).floor() as i64
}

/// Blue channel source distance (pixels to the left).
pub fn blue_shift(intensity: f64) -> i64 {
    (unit_clamp(intensity) * 3.0).floor() as i64
}

/// RGB split: red is pulled from the right, blue from the left, then a faint blue wash.
///
/// Channels are shifted in straight-alpha space and re-premultiplied by the destination pixel's
/// own alpha. Reads come from a snapshot of the pre-filter state. Returns whether the filter ran.
pub fn apply_color_shift(surface: &mut Surface, intensity: f64) -> bool {
    let intensity = unit_clamp(intensity);
    if intensity < COLOR_SHIFT_THRESHOLD {
        return false;
    }

    let src = Snapshot::capture(surface);
    let rs = red_shift(intensity);
    let bs = blue_shift(intensity);

    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let own = src.pixel_clamped(i64::from(x), y);
            let a = own[3];
            if a == 0 {
                continue;
            }
            let red_src = src.pixel_clamped(i64::from(x) + rs, y);
            let blue_src = src.pixel_clamped(i64::from(x) - bs, y);
            let r = premul_channel(unpremul_channel(red_src[0], red_src[3]), a);
            let b = premul_channel(unpremul_channel(blue_src[2], blue_src[3]), a);
            surface.set_pixel(x, y, [r, own[1], b, a]);
        }
    }

    surface.fill(Rgba8Premul::from_rgb_alpha(
        0,
        0,
        255,
        (intensity * 0.05) as f32,
    ));
    true
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color_shift.rs"]
mod tests;
