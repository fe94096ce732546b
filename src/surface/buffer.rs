use crate::foundation::core::{Rgba8Premul, SurfaceSize};
use crate::foundation::error::{GlitchswapError, GlitchswapResult};
use crate::surface::composite::{PremulRgba8, over_color_span, over_pixels, over_span};
use crate::surface::snapshot::Snapshot;

/// Premultiplied RGBA8 drawing surface backing the transition overlay.
///
/// Row-major and tightly packed. Dimensions are never zero: construction clamps to 1x1.
/// All drawing operations clip to the surface bounds and composite source-over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    size: SurfaceSize,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_size(SurfaceSize::clamped(width, height))
    }

    /// Allocate a fully transparent surface of `size` (clamped to at least 1x1).
    pub fn with_size(size: SurfaceSize) -> Self {
        let size = SurfaceSize::clamped(size.width, size.height);
        Self {
            size,
            data: vec![0; size.byte_len()],
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Surface dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Raw premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw premultiplied RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Read one pixel. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> PremulRgba8 {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite one pixel (no blending). Panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: PremulRgba8) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Source-over fill of the whole surface.
    pub fn fill(&mut self, color: Rgba8Premul) {
        over_color_span(&mut self.data, color.to_array());
    }

    /// Source-over fill of a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgba8Premul) {
        let Some((x0, x1)) = clip_span(x, w, self.size.width) else {
            return;
        };
        let Some((y0, y1)) = clip_span(y, h, self.size.height) else {
            return;
        };
        let c = color.to_array();
        let stride = self.stride();
        for row in y0..y1 {
            let start = row * stride + x0 * 4;
            let end = row * stride + x1 * 4;
            over_color_span(&mut self.data[start..end], c);
        }
    }

    /// Source-over fill of a one-pixel-tall span on row `y`, with a per-column color.
    pub(crate) fn fill_row_with(
        &mut self,
        y: i64,
        x: i64,
        w: i64,
        color_at: impl Fn(u32) -> Rgba8Premul,
    ) {
        let Some((y0, _)) = clip_span(y, 1, self.size.height) else {
            return;
        };
        let Some((x0, x1)) = clip_span(x, w, self.size.width) else {
            return;
        };
        let stride = self.stride();
        for col in x0..x1 {
            let i = y0 * stride + col * 4;
            let c = color_at(col as u32).to_array();
            over_color_span(&mut self.data[i..i + 4], c);
        }
    }

    /// Source-over composite of an equally sized surface onto this one.
    pub fn draw_surface(&mut self, src: &Surface) -> GlitchswapResult<()> {
        if src.size != self.size {
            return Err(GlitchswapError::validation(format!(
                "draw_surface expects {}x{}, got {}x{}",
                self.size.width, self.size.height, src.size.width, src.size.height
            )));
        }
        over_span(&mut self.data, &src.data)
    }

    /// Source-over copy of `rows` source rows starting at `src_y`, shifted by `dx` and
    /// landing at `dst_y`. Parts falling outside either buffer are clipped.
    pub fn draw_rows_from(&mut self, src: &Snapshot, src_y: i64, rows: i64, dx: i64, dst_y: i64) {
        if rows <= 0 || src.size() != self.size {
            return;
        }
        let width = i64::from(self.size.width);
        // Horizontal overlap between the shifted source row and the surface.
        let dst_x0 = dx.max(0);
        let dst_x1 = (width + dx).min(width);
        if dst_x0 >= dst_x1 {
            return;
        }
        let src_x0 = dst_x0 - dx;
        let span = (dst_x1 - dst_x0) as usize * 4;
        let stride = self.stride();

        for r in 0..rows {
            let sy = src_y + r;
            let dy = dst_y + r;
            if sy < 0
                || sy >= i64::from(src.height())
                || dy < 0
                || dy >= i64::from(self.size.height)
            {
                continue;
            }
            let s_start = sy as usize * stride + src_x0 as usize * 4;
            let d_start = dy as usize * stride + dst_x0 as usize * 4;
            let s = &src.data()[s_start..s_start + span];
            let d = &mut self.data[d_start..d_start + span];
            debug_assert_eq!(d.len(), s.len());
            over_pixels(d, s);
        }
    }

    /// Nearest-neighbour vertical resample: source rows `[src_y, src_y + src_h)` are stretched
    /// onto destination rows `[dst_y, dst_y + dst_h)`, composited source-over.
    pub fn draw_scaled_rows_from(
        &mut self,
        src: &Snapshot,
        src_y: f64,
        src_h: f64,
        dst_y: f64,
        dst_h: f64,
    ) {
        if src_h.is_nan() || dst_h.is_nan() || src_h <= 0.0 || dst_h <= 0.0 {
            return;
        }
        if src.size() != self.size {
            return;
        }
        let scale = src_h / dst_h;
        let first = dst_y.round() as i64;
        let count = dst_h.round() as i64;
        for i in 0..count {
            let sy = (src_y + (i as f64 + 0.5) * scale).floor() as i64;
            self.draw_rows_from(src, sy, 1, 0, first + i);
        }
    }

    fn stride(&self) -> usize {
        self.size.width as usize * 4
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.size.width && y < self.size.height,
            "pixel ({x},{y}) out of bounds"
        );
        (y as usize * self.size.width as usize + x as usize) * 4
    }
}

/// Intersect `[start, start + len)` with `[0, limit)`, returning pixel indices.
fn clip_span(start: i64, len: i64, limit: u32) -> Option<(usize, usize)> {
    if len <= 0 {
        return None;
    }
    let lo = start.max(0);
    let hi = start.saturating_add(len).min(i64::from(limit));
    if lo >= hi {
        return None;
    }
    Some((lo as usize, hi as usize))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/buffer.rs"]
mod tests;
