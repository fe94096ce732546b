use super::*;

fn host() -> HeadlessHost {
    HeadlessHost::new(800.0, Rect::new(0.0, 0.0, 400.0, 300.0), 20.0)
}

#[test]
fn clock_advances_by_the_frame_interval() {
    let mut h = host().with_clock(1000.0);
    assert_eq!(h.now(), 1000.0);
    assert_eq!(h.next_frame(), 1020.0);
    assert_eq!(h.next_frame(), 1040.0);
    assert_eq!(h.now(), 1040.0);
}

#[test]
fn fps_constructor_rejects_nonsense_rates() {
    let mut h = HeadlessHost::at_fps(800.0, Rect::ZERO, 0.0);
    let t = h.next_frame();
    assert!((t - 1000.0 / 60.0).abs() < 1e-9);

    let mut h = HeadlessHost::at_fps(800.0, Rect::ZERO, 25.0);
    assert_eq!(h.next_frame(), 40.0);
}

#[test]
fn present_keeps_the_latest_frame() {
    let mut h = host();
    let mut s = Surface::new(4, 2);
    s.set_pixel(1, 1, [1, 2, 3, 255]);
    h.present(&s);
    s.set_pixel(1, 1, [9, 9, 9, 255]);
    h.present(&s);
    assert_eq!(h.last_frame().unwrap().pixel(1, 1), [9, 9, 9, 255]);
    assert_eq!(h.presented(), 2);

    h.present(&Surface::new(2, 2));
    assert_eq!(h.last_frame().unwrap().size(), SurfaceSize::clamped(2, 2));
}

#[test]
fn surface_allocation_can_be_refused() {
    let mut h = host().without_pixel_access();
    let err = h.create_surface(SurfaceSize::clamped(10, 10)).unwrap_err();
    assert!(matches!(err, GlitchswapError::UnsupportedSurface(_)));
    assert!(host().create_surface(SurfaceSize::clamped(10, 10)).is_ok());
}

#[test]
fn side_effects_are_recorded() {
    let mut h = host().with_content("<p>a</p>");
    h.replace_content("<p>b</p>");
    h.scroll_to(ScrollAnchor::new(0.0, 12.0));
    h.remove_overlay();
    assert_eq!(h.content(), "<p>b</p>");
    assert_eq!(h.scroll(), ScrollAnchor::new(0.0, 12.0));
    let events = h.take_events();
    assert_eq!(
        events,
        vec![
            HostEvent::Replaced("<p>b</p>".to_owned()),
            HostEvent::ScrolledTo(ScrollAnchor::new(0.0, 12.0)),
            HostEvent::OverlayRemoved,
        ]
    );
    assert!(h.events().is_empty());
}

#[test]
fn scroll_drift_applies_per_frame() {
    let mut h = host()
        .with_scroll(ScrollAnchor::new(0.0, 5.0))
        .with_scroll_drift(-2.0);
    h.next_frame();
    h.next_frame();
    assert_eq!(h.scroll_position().y, 1.0);
    h.set_scroll(ScrollAnchor::default());
    assert_eq!(h.scroll().y, 0.0);
}

#[test]
fn degenerate_intervals_still_advance_the_clock() {
    for interval in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let mut h = HeadlessHost::new(800.0, Rect::ZERO, interval);
        let t = h.next_frame();
        assert!((t - 1000.0 / 60.0).abs() < 1e-9, "interval {interval}");
    }
}

#[test]
fn zero_interval_session_still_completes() {
    use crate::foundation::random::seeded_rng;
    use crate::transition::config::TransitionConfig;
    use crate::transition::host::{BeginOutcome, begin_transition, run_transition};

    let mut h = HeadlessHost::new(1200.0, Rect::new(0.0, 0.0, 600.0, 400.0), 0.0);
    let cfg = TransitionConfig::default();
    let BeginOutcome::Animating(mut session) = begin_transition(
        &mut h,
        &cfg,
        String::new(),
        "<p>next</p>".to_owned(),
        seeded_rng(3),
    )
    .unwrap() else {
        panic!("expected an animated session");
    };
    let frames = run_transition(&mut h, &mut session);
    assert!(session.state().is_completed());
    // 800 ms at 60 Hz; float accumulation may add one frame
    assert!((48..=49).contains(&frames), "frames {frames}");
    assert_eq!(h.content(), "<p>next</p>");
}

#[test]
fn panel_scroll_requests_are_recorded() {
    let mut h = host();
    h.scroll_panel_into_view(100.0);
    assert_eq!(
        h.events(),
        &[HostEvent::PanelScrolledIntoView { delay_ms: 100.0 }]
    );
    assert_eq!(h.scroll(), ScrollAnchor::default());
}
