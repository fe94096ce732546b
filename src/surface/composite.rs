use crate::foundation::error::{GlitchswapError, GlitchswapResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel as stored in a surface buffer.
pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel, with an extra opacity multiplier on `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Source-over a whole span of pixels. Both spans must be equal-length rgba8.
pub fn over_span(dst: &mut [u8], src: &[u8]) -> GlitchswapResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(GlitchswapError::validation(
            "over_span expects equal-length rgba8 spans",
        ));
    }
    over_pixels(dst, src);
    Ok(())
}

/// Source-over pixel by pixel over the common prefix of both spans. Trailing bytes that do
/// not form a whole pixel in both spans are left alone.
pub(crate) fn over_pixels(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
        d.copy_from_slice(&out);
    }
}

/// Source-over a single color onto every pixel of a span.
pub(crate) fn over_color_span(dst: &mut [u8], color: PremulRgba8) {
    if color[3] == 0 {
        return;
    }
    if color[3] == 255 {
        for d in dst.chunks_exact_mut(4) {
            d.copy_from_slice(&color);
        }
        return;
    }
    for d in dst.chunks_exact_mut(4) {
        let out = over([d[0], d[1], d[2], d[3]], color, 1.0);
        d.copy_from_slice(&out);
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/surface/composite.rs"]
mod tests;
