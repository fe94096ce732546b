use crate::foundation::math::{alpha_to_u8, premul_channel};

pub use kurbo::{Point, Rect, Vec2};

/// Integer pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels, at least 1.
    pub width: u32,
    /// Height in pixels, at least 1.
    pub height: u32,
}

impl SurfaceSize {
    /// Build a size, clamping each axis to at least one pixel.
    pub fn clamped(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Truncate fractional layout units to whole pixels, clamping to at least one pixel.
    ///
    /// Non-finite and non-positive values collapse to 1.
    pub fn from_layout(width: f64, height: f64) -> Self {
        fn px(v: f64) -> u32 {
            if !v.is_finite() || v < 1.0 {
                return 1;
            }
            v.trunc().min(f64::from(u32::MAX)) as u32
        }
        Self::clamped(px(width), px(height))
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Length of a tightly packed RGBA8 buffer of this size.
    pub fn byte_len(self) -> usize {
        self.pixel_count().saturating_mul(4)
    }
}

/// Scroll offset of the viewport, captured at session start and restored at swap/teardown.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollAnchor {
    /// Horizontal scroll offset.
    pub x: f64,
    /// Vertical scroll offset.
    pub y: f64,
}

impl ScrollAnchor {
    /// Anchor at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Premultiplied red.
    pub r: u8,
    /// Premultiplied green.
    pub g: u8,
    /// Premultiplied blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight (non-premultiplied) RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: premul_channel(r, a),
            g: premul_channel(g, a),
            b: premul_channel(b, a),
            a,
        }
    }

    /// Straight 8-bit color with a fractional alpha in `[0, 1]`, the way CSS `rgba()` reads.
    pub fn from_rgb_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self::from_straight_rgba(r, g, b, alpha_to_u8(alpha))
    }

    /// Byte layout used by [`Surface`](crate::Surface) buffers.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
