use crate::foundation::core::SurfaceSize;
use crate::surface::buffer::Surface;
use crate::surface::composite::PremulRgba8;

/// Detached, read-only copy of a surface's pixels.
///
/// Filters that resample the surface capture one first, clear or overwrite the surface, and read
/// exclusively from the snapshot so no pass reads pixels it has already written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    size: SurfaceSize,
    data: Vec<u8>,
}

impl Snapshot {
    /// Copy the current contents of `surface`.
    pub fn capture(surface: &Surface) -> Self {
        Self {
            size: surface.size(),
            data: surface.data().to_vec(),
        }
    }

    /// Captured dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Captured width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Captured height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel; `x` is clamped into the row so edge reads repeat the border pixel.
    pub fn pixel_clamped(&self, x: i64, y: u32) -> PremulRgba8 {
        let x = x.clamp(0, i64::from(self.size.width) - 1) as usize;
        let i = (y as usize * self.size.width as usize + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}
