use crate::foundation::core::Rgba8Premul;
use crate::surface::buffer::Surface;

/// Top-to-bottom color steps of the page backdrop.
pub const BACKDROP_STEPS: [[u8; 3]; 16] = [
    [0x7a, 0x79, 0xd6],
    [0x6e, 0x6d, 0xca],
    [0x62, 0x61, 0xbe],
    [0x56, 0x55, 0xb2],
    [0x4a, 0x49, 0xa6],
    [0x3e, 0x3d, 0x9a],
    [0x32, 0x31, 0x8e],
    [0x26, 0x25, 0x82],
    [0x1a, 0x19, 0x76],
    [0x0e, 0x0d, 0x6a],
    [0x02, 0x01, 0x5e],
    [0x00, 0x00, 0x52],
    [0x00, 0x00, 0x4a],
    [0x00, 0x00, 0x42],
    [0x00, 0x00, 0x3a],
    [0x00, 0x00, 0x38],
];

/// Step index covering row `y` of a surface `height` rows tall.
pub fn backdrop_step(y: u32, height: u32) -> usize {
    let n = BACKDROP_STEPS.len() as u64;
    let idx = u64::from(y) * n / u64::from(height.max(1));
    (idx as usize).min(BACKDROP_STEPS.len() - 1)
}

/// Paint the opaque stepped gradient backdrop over the whole surface.
pub fn stepped_backdrop(surface: &mut Surface) {
    let w = i64::from(surface.width());
    let h = surface.height();
    for y in 0..h {
        let [r, g, b] = BACKDROP_STEPS[backdrop_step(y, h)];
        surface.fill_rect(0, i64::from(y), w, 1, Rgba8Premul::from_straight_rgba(r, g, b, 255));
    }
}
