use rand::Rng;

use crate::effects::border::draw_border;
use crate::effects::compose::{FrameReport, compose_frame};
use crate::foundation::core::{Rect, ScrollAnchor, SurfaceSize};
use crate::foundation::error::{GlitchswapError, GlitchswapResult};
use crate::surface::buffer::Surface;
use crate::transition::config::TransitionConfig;
use crate::transition::overlay::{OverlayPlacement, OverlayRegion};
use crate::transition::timeline::{SWAP_PROGRESS, intensity, progress};

/// Everything a session needs to know about the page when it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRequest {
    /// Content panel bounding box in viewport coordinates.
    pub panel: Rect,
    /// Viewport width, selecting the wide or narrow layout.
    pub viewport_width: f64,
    /// Scroll offset to restore after the swap and at teardown.
    pub scroll: ScrollAnchor,
    /// Markup displayed before the swap. Kept for inspection only; never re-installed.
    pub previous_markup: String,
    /// Markup installed at the midpoint.
    pub new_markup: String,
}

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionState {
    /// Animating; frames remain.
    Running {
        /// Progress of the last drawn frame in `[0, 1)`.
        progress: f64,
    },
    /// Overlay removed; further steps do nothing.
    Completed,
}

impl SessionState {
    /// Whether the session has torn down.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Side effect the host must carry out, in the order emitted.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCommand {
    /// Move/size the overlay element.
    PositionOverlay(OverlayPlacement),
    /// Show the session surface in the overlay.
    Present,
    /// Replace the displayed content markup. Emitted exactly once per session.
    ReplaceContent(String),
    /// Scroll the viewport back to the anchor.
    RestoreScroll(ScrollAnchor),
    /// Destroy the overlay. Emitted exactly once, on the final frame.
    RemoveOverlay,
}

/// Result of advancing a session by one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStep {
    /// State after this step.
    pub state: SessionState,
    /// Progress of this frame.
    pub progress: f64,
    /// Effect intensity of this frame.
    pub intensity: f64,
    /// Side effects for the host, in order.
    pub commands: Vec<HostCommand>,
    /// Filter report for the drawn frame; `None` once the session has completed.
    pub report: Option<FrameReport>,
}

/// One content swap: an animation clock, an overlay surface, and a one-shot content latch.
///
/// Sessions never overlap on the same panel: callers must wait for the previous session's
/// `RemoveOverlay` before beginning another (see `nav::controller::NavController`).
pub struct TransitionSession<R> {
    duration: f64,
    start_time: f64,
    region: OverlayRegion,
    anchor: ScrollAnchor,
    surface: Surface,
    rng: R,
    previous_markup: String,
    pending_markup: Option<String>,
    content_updated: bool,
    state: SessionState,
    frames: u64,
}

impl<R: Rng> TransitionSession<R> {
    /// Start a session with an in-memory surface.
    pub fn begin(
        cfg: &TransitionConfig,
        request: TransitionRequest,
        start_time: f64,
        rng: R,
    ) -> GlitchswapResult<Self> {
        Self::begin_with(cfg, request, start_time, rng, |size| {
            Ok(Surface::with_size(size))
        })
    }

    /// Start a session, obtaining the drawing surface from `alloc`.
    ///
    /// `alloc` fails when the host has no pixel-addressable surface; the error is returned as-is.
    #[tracing::instrument(
        skip_all,
        fields(viewport_width = request.viewport_width, start_time)
    )]
    pub fn begin_with(
        cfg: &TransitionConfig,
        request: TransitionRequest,
        start_time: f64,
        rng: R,
        alloc: impl FnOnce(SurfaceSize) -> GlitchswapResult<Surface>,
    ) -> GlitchswapResult<Self> {
        cfg.validate()?;
        let region = OverlayRegion::compute(request.panel, request.viewport_width, cfg);
        let size = region.pixel_size();
        let surface = alloc(size)?;
        if surface.size() != size {
            return Err(GlitchswapError::validation(format!(
                "surface is {}x{}, overlay needs {}x{}",
                surface.width(),
                surface.height(),
                size.width,
                size.height
            )));
        }
        tracing::debug!(
            layout = ?region.layout,
            width = size.width,
            height = size.height,
            "transition session started"
        );

        Ok(Self {
            duration: cfg.duration_ms,
            start_time,
            region,
            anchor: request.scroll,
            surface,
            rng,
            previous_markup: request.previous_markup,
            pending_markup: Some(request.new_markup),
            content_updated: false,
            state: SessionState::Running { progress: 0.0 },
            frames: 0,
        })
    }

    /// Advance to host time `now` with the viewport currently scrolled to `scroll_y`.
    pub fn step(&mut self, now: f64, scroll_y: f64) -> FrameStep {
        if self.state.is_completed() {
            return FrameStep {
                state: SessionState::Completed,
                progress: 1.0,
                intensity: 0.0,
                commands: Vec::new(),
                report: None,
            };
        }

        let progress = progress(now - self.start_time, self.duration);
        let intensity = intensity(progress);
        let mut commands = Vec::with_capacity(5);

        commands.push(HostCommand::PositionOverlay(
            self.region.placement_at(scroll_y, self.anchor),
        ));

        self.surface.clear();
        let report = compose_frame(&mut self.surface, intensity, &mut self.rng);
        draw_border(&mut self.surface, progress);
        commands.push(HostCommand::Present);
        self.frames += 1;

        if progress >= SWAP_PROGRESS && !self.content_updated {
            if let Some(markup) = self.pending_markup.take() {
                commands.push(HostCommand::ReplaceContent(markup));
            }
            commands.push(HostCommand::RestoreScroll(self.anchor));
            self.content_updated = true;
            tracing::debug!(progress, frame = self.frames, "content swapped");
        }

        self.state = if progress >= 1.0 {
            commands.push(HostCommand::RemoveOverlay);
            commands.push(HostCommand::RestoreScroll(self.anchor));
            tracing::debug!(frames = self.frames, "transition session finished");
            SessionState::Completed
        } else {
            SessionState::Running { progress }
        };

        tracing::trace!(progress, intensity, "frame stepped");
        FrameStep {
            state: self.state,
            progress,
            intensity,
            commands,
            report: Some(report),
        }
    }
}

impl<R> TransitionSession<R> {
    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the new markup has been handed to the host.
    pub fn content_updated(&self) -> bool {
        self.content_updated
    }

    /// Most recently drawn frame.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Overlay region fixed at session start.
    pub fn region(&self) -> &OverlayRegion {
        &self.region
    }

    /// Scroll offset restored after the swap and at teardown.
    pub fn scroll_anchor(&self) -> ScrollAnchor {
        self.anchor
    }

    /// Host time the session started at.
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Markup displayed before the session.
    pub fn previous_markup(&self) -> &str {
        &self.previous_markup
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/session.rs"]
mod tests;
