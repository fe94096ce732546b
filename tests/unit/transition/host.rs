use super::*;
use crate::foundation::random::{FxRng, seeded_rng};
use crate::transition::headless::{HeadlessHost, HostEvent};

fn host() -> HeadlessHost {
    HeadlessHost::new(1200.0, Rect::new(20.0, 60.0, 920.0, 660.0), 100.0)
        .with_content("<p>home</p>")
        .with_scroll(ScrollAnchor::new(0.0, 40.0))
}

fn animate(host: &mut HeadlessHost, cfg: &TransitionConfig) -> TransitionSession<FxRng> {
    let previous = host.content().to_owned();
    match begin_transition(host, cfg, previous, "<p>about</p>".to_owned(), seeded_rng(11)).unwrap()
    {
        BeginOutcome::Animating(session) => session,
        BeginOutcome::Replaced { reason } => panic!("unexpected fallback: {reason}"),
    }
}

#[test]
fn full_run_swaps_once_and_tears_down() {
    let cfg = TransitionConfig::default();
    let mut h = host();
    let mut session = animate(&mut h, &cfg);
    assert_eq!(h.content(), "<p>home</p>");

    let frames = run_transition(&mut h, &mut session);
    assert_eq!(frames, 8);
    assert_eq!(h.presented(), 8);
    assert_eq!(h.content(), "<p>about</p>");
    assert!(h.overlay().is_none());
    assert_eq!(session.previous_markup(), "<p>home</p>");

    let replaced: Vec<_> = h
        .events()
        .iter()
        .filter(|e| matches!(e, HostEvent::Replaced(_)))
        .collect();
    assert_eq!(replaced.len(), 1);

    let tail = &h.events()[h.events().len() - 2..];
    assert_eq!(
        tail,
        &[
            HostEvent::OverlayRemoved,
            HostEvent::ScrolledTo(ScrollAnchor::new(0.0, 40.0)),
        ]
    );
}

#[test]
fn each_frame_positions_before_presenting() {
    let cfg = TransitionConfig::default();
    let mut h = host();
    let mut session = animate(&mut h, &cfg);
    let state = drive_frame(&mut h, &mut session);
    assert_eq!(state, SessionState::Running { progress: 0.125 });
    assert!(matches!(h.events()[0], HostEvent::Positioned(_)));
    assert_eq!(h.events()[1], HostEvent::Presented { time: 100.0 });
    assert_eq!(h.events().len(), 2);
}

#[test]
fn swap_happens_on_the_midpoint_frame() {
    let cfg = TransitionConfig::default();
    let mut h = host();
    let mut session = animate(&mut h, &cfg);
    for _ in 0..3 {
        drive_frame(&mut h, &mut session);
    }
    assert_eq!(h.content(), "<p>home</p>");
    drive_frame(&mut h, &mut session);
    assert_eq!(h.content(), "<p>about</p>");
    assert!(session.content_updated());
}

#[test]
fn missing_pixel_access_replaces_instantly() {
    let cfg = TransitionConfig::default();
    let mut h = host().without_pixel_access();
    let outcome = begin_transition(
        &mut h,
        &cfg,
        "<p>home</p>".to_owned(),
        "<p>about</p>".to_owned(),
        seeded_rng(12),
    )
    .unwrap();
    let BeginOutcome::Replaced { reason } = outcome else {
        panic!("expected instant replacement");
    };
    assert!(matches!(reason, GlitchswapError::UnsupportedSurface(_)));
    assert_eq!(h.content(), "<p>about</p>");
    assert_eq!(
        h.events(),
        &[
            HostEvent::Replaced("<p>about</p>".to_owned()),
            HostEvent::ScrolledTo(ScrollAnchor::new(0.0, 40.0)),
        ]
    );
}

#[test]
fn invalid_config_leaves_the_page_alone() {
    let cfg = TransitionConfig {
        duration_ms: 0.0,
        ..TransitionConfig::default()
    };
    let mut h = host();
    let err = begin_transition(
        &mut h,
        &cfg,
        String::new(),
        "<p>about</p>".to_owned(),
        seeded_rng(13),
    )
    .err()
    .unwrap();
    assert!(matches!(err, GlitchswapError::Validation(_)));
    assert_eq!(h.content(), "<p>home</p>");
    assert!(h.events().is_empty());
}

#[test]
fn overlay_tracks_user_scrolling() {
    let cfg = TransitionConfig::default();
    let mut h = host().with_scroll_drift(10.0);
    let mut session = animate(&mut h, &cfg);
    drive_frame(&mut h, &mut session);
    drive_frame(&mut h, &mut session);
    let tops: Vec<f64> = h
        .events()
        .iter()
        .filter_map(|e| match e {
            HostEvent::Positioned(p) => Some(p.top),
            _ => None,
        })
        .collect();
    // panel top 60 + margin 6, minus accumulated drift
    assert_eq!(tops, vec![56.0, 46.0]);
}
