use super::*;

#[test]
fn pulse_is_periodic_and_bounded() {
    assert!((border_pulse(0.0) - 0.5).abs() < 1e-12);
    assert!((border_pulse(0.25) - 0.8).abs() < 1e-12);
    assert!((border_pulse(0.75) - 0.2).abs() < 1e-12);
    for i in 0..=100 {
        let p = f64::from(i) / 100.0;
        assert!((border_pulse(p) - border_pulse(p + 1.0)).abs() < 1e-9);
        assert!((0.2 - 1e-12..=0.8 + 1e-12).contains(&border_pulse(p)));
    }
}

#[test]
fn identical_inputs_give_identical_pixels() {
    let mut a = Surface::new(50, 30);
    let mut b = Surface::new(50, 30);
    draw_border(&mut a, 0.37);
    draw_border(&mut b, 0.37);
    assert_eq!(a, b);
}

#[test]
fn progress_and_progress_plus_one_render_the_same() {
    let mut a = Surface::new(40, 24);
    let mut b = Surface::new(40, 24);
    draw_border(&mut a, 0.1);
    draw_border(&mut b, 1.1);
    assert_eq!(a, b);
}

#[test]
fn interior_is_untouched() {
    let mut s = Surface::new(20, 20);
    draw_border(&mut s, 0.5);
    for y in 4..16 {
        for x in 4..16 {
            assert_eq!(s.pixel(x, y), [0, 0, 0, 0]);
        }
    }
}

#[test]
fn top_edge_is_blue_in_the_middle_and_dark_at_the_ends() {
    let mut s = Surface::new(100, 40);
    draw_border(&mut s, 0.25);
    // Column 50 is not a tick column (ticks cover x % 4 in {0, 1}) but row 2 is
    // inside the vertical tick band of neither side.
    let mid = s.pixel(50, 2);
    let near_left = s.pixel(6, 2);
    assert!(mid[2] > near_left[2]);
    assert!(mid[2] > mid[0]);
}

#[test]
fn ticks_darken_every_fourth_column() {
    let mut s = Surface::new(64, 32);
    draw_border(&mut s, 0.25);
    // Same gradient stop region, one pixel apart: tick column vs gap column.
    let tick = s.pixel(32, 1);
    let gap = s.pixel(34, 1);
    assert!(tick[2] < gap[2]);
    assert!(tick[3] >= gap[3]);
}

#[test]
fn one_pixel_surface_does_not_panic() {
    let mut s = Surface::new(1, 1);
    draw_border(&mut s, 0.3);
    assert!(s.pixel(0, 0)[3] > 0);
}
