use rand::Rng;

use crate::foundation::core::{Rect, ScrollAnchor, SurfaceSize};
use crate::foundation::error::{GlitchswapError, GlitchswapResult};
use crate::surface::buffer::Surface;
use crate::transition::config::TransitionConfig;
use crate::transition::overlay::OverlayPlacement;
use crate::transition::session::{
    HostCommand, SessionState, TransitionRequest, TransitionSession,
};

/// The page a transition runs against: clock, geometry, and the side effects a session asks for.
///
/// Browsers map `next_frame` to the animation-frame callback; headless hosts advance a
/// virtual clock.
pub trait TransitionHost {
    /// Current host time in milliseconds.
    fn now(&self) -> f64;

    /// Wait for the next display frame and return its timestamp.
    fn next_frame(&mut self) -> f64;

    /// Viewport width in layout units.
    fn viewport_width(&self) -> f64;

    /// Bounding box of the content panel in viewport coordinates.
    fn panel_rect(&self) -> Rect;

    /// Current scroll offset.
    fn scroll_position(&self) -> ScrollAnchor;

    /// Allocate a drawing surface for the overlay.
    ///
    /// Return [`GlitchswapError::UnsupportedSurface`] when pixel access is unavailable;
    /// the transition then degrades to an instant swap.
    fn create_surface(&mut self, size: SurfaceSize) -> GlitchswapResult<Surface> {
        Ok(Surface::with_size(size))
    }

    /// Create the overlay on first call, then move/resize it.
    fn position_overlay(&mut self, placement: OverlayPlacement);

    /// Show `surface` in the overlay.
    fn present(&mut self, surface: &Surface);

    /// Replace the content panel's markup.
    fn replace_content(&mut self, markup: &str);

    /// Scroll the viewport to `anchor`.
    fn scroll_to(&mut self, anchor: ScrollAnchor);

    /// Destroy the overlay.
    fn remove_overlay(&mut self);

    /// Smoothly scroll the content panel into view once `delay_ms` has elapsed.
    ///
    /// Requested after a menu click in the narrow layout, where the menu sits below the panel.
    fn scroll_panel_into_view(&mut self, delay_ms: f64);
}

/// How a transition request was satisfied.
pub enum BeginOutcome<R> {
    /// A session is running; drive it with [`drive_frame`] or [`run_transition`].
    Animating(TransitionSession<R>),
    /// Content was replaced immediately without animation.
    Replaced {
        /// Why the animation was skipped.
        reason: GlitchswapError,
    },
}

/// Start a transition on `host`, or fall back to an instant swap when the host has no
/// pixel-addressable surface.
///
/// Other errors (invalid configuration) are returned and leave the page untouched.
#[tracing::instrument(skip_all, fields(viewport_width = tracing::field::Empty))]
pub fn begin_transition<H, R>(
    host: &mut H,
    cfg: &TransitionConfig,
    previous_markup: String,
    new_markup: String,
    rng: R,
) -> GlitchswapResult<BeginOutcome<R>>
where
    H: TransitionHost + ?Sized,
    R: Rng,
{
    let viewport_width = host.viewport_width();
    tracing::Span::current().record("viewport_width", viewport_width);

    let request = TransitionRequest {
        panel: host.panel_rect(),
        viewport_width,
        scroll: host.scroll_position(),
        previous_markup,
        new_markup,
    };
    let start_time = host.now();
    let anchor = request.scroll;
    let fallback_markup = request.new_markup.clone();

    let begun = TransitionSession::begin_with(cfg, request, start_time, rng, |size| {
        host.create_surface(size)
    });
    match begun {
        Ok(session) => Ok(BeginOutcome::Animating(session)),
        Err(reason @ GlitchswapError::UnsupportedSurface(_)) => {
            tracing::warn!(%reason, "transition unavailable, replacing content directly");
            host.replace_content(&fallback_markup);
            host.scroll_to(anchor);
            Ok(BeginOutcome::Replaced { reason })
        }
        Err(err) => Err(err),
    }
}

/// Wait for one host frame, step the session, and carry out its commands in order.
pub fn drive_frame<H, R>(host: &mut H, session: &mut TransitionSession<R>) -> SessionState
where
    H: TransitionHost + ?Sized,
    R: Rng,
{
    let now = host.next_frame();
    let scroll_y = host.scroll_position().y;
    let step = session.step(now, scroll_y);

    for cmd in step.commands {
        match cmd {
            HostCommand::PositionOverlay(placement) => host.position_overlay(placement),
            HostCommand::Present => host.present(session.surface()),
            HostCommand::ReplaceContent(markup) => host.replace_content(&markup),
            HostCommand::RestoreScroll(anchor) => host.scroll_to(anchor),
            HostCommand::RemoveOverlay => host.remove_overlay(),
        }
    }
    step.state
}

/// Drive `session` until it completes. Returns the number of frames drawn.
pub fn run_transition<H, R>(host: &mut H, session: &mut TransitionSession<R>) -> u64
where
    H: TransitionHost + ?Sized,
    R: Rng,
{
    while !drive_frame(host, session).is_completed() {}
    session.frames()
}

#[cfg(test)]
#[path = "../../tests/unit/transition/host.rs"]
mod tests;
