use super::*;
use crate::foundation::math::alpha_to_u8;
use crate::foundation::random::seeded_rng;

const ALWAYS: [Stage; 4] = [
    Stage::BaseFill,
    Stage::Scanlines,
    Stage::Wave,
    Stage::ColorShift,
];

#[test]
fn glitch_boundary_is_strict() {
    let mut s = Surface::new(32, 32);
    let mut rng = seeded_rng(1);

    let at = compose_frame(&mut s, 0.4, &mut rng);
    assert_eq!(at.stages.as_slice(), &ALWAYS);
    assert!(at.glitch.is_none());

    let above = compose_frame(&mut s, 0.4 + 1e-9, &mut rng);
    assert_eq!(&above.stages[..4], &ALWAYS);
    assert_eq!(above.stages.last(), Some(&Stage::Glitch));
    assert!(above.glitch.is_some());
}

#[test]
fn always_runs_first_four_stages() {
    let mut s = Surface::new(16, 16);
    let mut rng = seeded_rng(8);
    for i in 0..=20 {
        let intensity = f64::from(i) / 20.0;
        let r = compose_frame(&mut s, intensity, &mut rng);
        assert_eq!(&r.stages[..4], &ALWAYS);
        assert_eq!(r.glitch.is_some(), intensity > 0.4);
        assert_eq!(r.color_shifted, intensity >= 0.3);
    }
}

#[test]
fn zero_intensity_frame_is_base_fill_plus_flat_scanlines() {
    let mut s = Surface::new(200, 100);
    // Leftover pixels from an earlier frame must not survive.
    s.fill(Rgba8Premul::from_straight_rgba(255, 0, 0, 255));
    let mut rng = seeded_rng(21);
    let report = compose_frame(&mut s, 0.0, &mut rng);

    assert!(report.glitch.is_none());
    assert!(!report.color_shifted);
    assert_eq!(report.scanlines.distortion_lines, 0);
    assert_eq!(report.wave.max_row_shift, 0);
    assert_eq!(base_fill_color(0.0), Rgba8Premul::transparent());

    let line = [0, 0, 0, alpha_to_u8(0.3)];
    for y in 0..100 {
        let expected = if y % 4 == 0 { line } else { [0, 0, 0, 0] };
        for x in 0..200 {
            assert_eq!(s.pixel(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn out_of_range_intensity_is_clamped() {
    let mut s = Surface::new(8, 8);
    let mut rng = seeded_rng(2);
    assert_eq!(compose_frame(&mut s, 3.0, &mut rng).intensity, 1.0);
    assert_eq!(compose_frame(&mut s, -1.0, &mut rng).intensity, 0.0);
    assert_eq!(compose_frame(&mut s, f64::NAN, &mut rng).intensity, 0.0);
}

#[test]
fn same_seed_same_frame() {
    let mut a = Surface::new(48, 36);
    let mut b = Surface::new(48, 36);
    compose_frame(&mut a, 0.9, &mut seeded_rng(99));
    compose_frame(&mut b, 0.9, &mut seeded_rng(99));
    assert_eq!(a, b);
}
