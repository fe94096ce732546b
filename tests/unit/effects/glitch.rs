use super::*;
use crate::foundation::random::seeded_rng;

fn noisy(width: u32, height: u32) -> Surface {
    let mut s = Surface::new(width, height);
    for y in 0..height {
        for x in 0..width {
            s.set_pixel(x, y, [((x * 7 + y * 3) % 256) as u8, 40, 90, 255]);
        }
    }
    s
}

#[test]
fn event_count_and_block_offset_follow_intensity() {
    assert_eq!(glitch_event_count(0.41), 2);
    assert_eq!(glitch_event_count(0.65), 3);
    assert_eq!(glitch_event_count(1.0), 5);
    assert_eq!(block_offset(0.0), -15);
    assert_eq!(block_offset(0.5), 0);
    assert_eq!(block_offset(1.0), 15);
}

#[test]
fn events_per_pass_match_intensity_over_many_seeds() {
    for seed in 0..64 {
        for intensity in [0.45, 0.75, 1.0] {
            let mut s = noisy(40, 60);
            let mut rng = seeded_rng(seed);
            let report = apply_glitch(&mut s, intensity, &mut rng);
            assert_eq!(report.events(), glitch_event_count(intensity));
            assert!(report.flickers_drawn <= report.flickers);
        }
    }
}

#[test]
fn broken_screen_never_below_threshold() {
    for seed in 0..128 {
        let mut s = noisy(30, 50);
        let mut rng = seeded_rng(seed);
        assert!(!apply_glitch(&mut s, 0.8, &mut rng).broken_screen);
    }
}

#[test]
fn broken_screen_appears_sometimes_at_full_intensity() {
    let hits = (0..200)
        .filter(|&seed| {
            let mut s = noisy(30, 50);
            let mut rng = seeded_rng(seed);
            apply_glitch(&mut s, 1.0, &mut rng).broken_screen
        })
        .count();
    // Expected around 60 of 200; allow wide slack.
    assert!((20..=120).contains(&hits), "hits {hits}");
}

#[test]
fn glitch_keeps_dimensions_and_opaque_input_opaque() {
    let mut s = noisy(24, 36);
    let mut rng = seeded_rng(77);
    apply_glitch(&mut s, 1.0, &mut rng);
    assert_eq!((s.width(), s.height()), (24, 36));
    for y in 0..36 {
        for x in 0..24 {
            assert_eq!(s.pixel(x, y)[3], 255);
        }
    }
}

#[test]
fn tiny_surface_does_not_panic() {
    let mut s = noisy(1, 1);
    for seed in 0..32 {
        let mut rng = seeded_rng(seed);
        apply_glitch(&mut s, 1.0, &mut rng);
    }
}
