use super::*;
use crate::foundation::math::alpha_to_u8;
use crate::foundation::random::seeded_rng;

#[test]
fn spacing_and_thickness_follow_intensity() {
    assert_eq!(scanline_spacing(0.0), 4);
    assert_eq!(scanline_spacing(0.5), 3);
    assert_eq!(scanline_spacing(1.0), 2);
    assert_eq!(scanline_thickness(0.0), 1);
    assert_eq!(scanline_thickness(0.49), 1);
    assert_eq!(scanline_thickness(0.5), 2);
    assert_eq!(scanline_thickness(1.0), 2);
}

#[test]
fn opacity_is_flat_at_zero_intensity_and_varies_per_row_otherwise() {
    assert_eq!(scanline_opacity(0, 0.0), scanline_opacity(17, 0.0));
    assert_ne!(scanline_opacity(0, 1.0), scanline_opacity(16, 1.0));
    for y in 0..200 {
        let o = scanline_opacity(y, 1.0);
        assert!((0.3..=0.7).contains(&o), "row {y} opacity {o}");
    }
}

#[test]
fn zero_intensity_draws_uniform_lines_every_fourth_row() {
    let mut s = Surface::new(8, 12);
    let mut rng = seeded_rng(3);
    let report = apply_scanlines(&mut s, 0.0, &mut rng);
    assert_eq!(report.lines, 3);
    assert_eq!(report.distortion_lines, 0);

    let a = alpha_to_u8(0.3);
    for y in 0..12 {
        let expected = if y % 4 == 0 { [0, 0, 0, a] } else { [0, 0, 0, 0] };
        for x in 0..8 {
            assert_eq!(s.pixel(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn full_intensity_adds_three_bright_lines() {
    let mut s = Surface::new(16, 64);
    let mut rng = seeded_rng(11);
    let report = apply_scanlines(&mut s, 1.0, &mut rng);
    assert_eq!(report.spacing, 2);
    assert_eq!(report.thickness, 2);
    assert_eq!(report.lines, 32);
    assert_eq!(report.distortion_lines, 3);

    // Dark lines leave r == 0; only distortion rows pick up a red component.
    let bright_rows = (0..64).filter(|&y| s.pixel(0, y)[0] > 0).count();
    assert!((1..=3).contains(&bright_rows));
}
