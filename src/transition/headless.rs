use crate::foundation::core::{Rect, ScrollAnchor, SurfaceSize};
use crate::foundation::error::{GlitchswapError, GlitchswapResult};
use crate::surface::buffer::Surface;
use crate::transition::host::TransitionHost;
use crate::transition::overlay::OverlayPlacement;

const DEFAULT_FRAME_INTERVAL: f64 = 1000.0 / 60.0;

/// Side effect observed by a [`HeadlessHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// Overlay moved or resized.
    Positioned(OverlayPlacement),
    /// A frame was shown.
    Presented {
        /// Host clock when the frame was presented.
        time: f64,
    },
    /// Displayed markup replaced.
    Replaced(String),
    /// Viewport scrolled to an anchor.
    ScrolledTo(ScrollAnchor),
    /// Overlay destroyed.
    OverlayRemoved,
    /// Content panel brought into view after a narrow-layout menu click.
    PanelScrolledIntoView {
        /// Delay the host was asked to wait before scrolling.
        delay_ms: f64,
    },
}

/// In-memory host with a virtual clock advancing by a fixed frame interval.
///
/// Records every side effect and keeps a copy of the most recently presented frame.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    clock: f64,
    frame_interval: f64,
    viewport_width: f64,
    panel: Rect,
    scroll: ScrollAnchor,
    scroll_drift: f64,
    pixel_access: bool,
    content: String,
    overlay: Option<OverlayPlacement>,
    last_frame: Option<Surface>,
    events: Vec<HostEvent>,
}

impl HeadlessHost {
    /// Host with the clock at 0 advancing `frame_interval` ms per frame.
    ///
    /// Non-positive or non-finite intervals fall back to a 60 Hz display so the clock
    /// always moves forward.
    pub fn new(viewport_width: f64, panel: Rect, frame_interval: f64) -> Self {
        let frame_interval = if frame_interval.is_finite() && frame_interval > 0.0 {
            frame_interval
        } else {
            DEFAULT_FRAME_INTERVAL
        };
        Self {
            clock: 0.0,
            frame_interval,
            viewport_width,
            panel,
            scroll: ScrollAnchor::default(),
            scroll_drift: 0.0,
            pixel_access: true,
            content: String::new(),
            overlay: None,
            last_frame: None,
            events: Vec::new(),
        }
    }

    /// Host for a `fps` display. Non-positive or non-finite rates fall back to 60.
    pub fn at_fps(viewport_width: f64, panel: Rect, fps: f64) -> Self {
        let interval = if fps.is_finite() && fps > 0.0 {
            1000.0 / fps
        } else {
            DEFAULT_FRAME_INTERVAL
        };
        Self::new(viewport_width, panel, interval)
    }

    /// Initial displayed markup.
    pub fn with_content(mut self, markup: impl Into<String>) -> Self {
        self.content = markup.into();
        self
    }

    /// Initial scroll offset.
    pub fn with_scroll(mut self, anchor: ScrollAnchor) -> Self {
        self.scroll = anchor;
        self
    }

    /// Initial clock value.
    pub fn with_clock(mut self, start: f64) -> Self {
        self.clock = start;
        self
    }

    /// Simulate the user scrolling by `dy` every frame.
    pub fn with_scroll_drift(mut self, dy: f64) -> Self {
        self.scroll_drift = dy;
        self
    }

    /// Refuse surface allocation, as a page without pixel access would.
    pub fn without_pixel_access(mut self) -> Self {
        self.pixel_access = false;
        self
    }

    /// Currently displayed markup.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Current scroll offset.
    pub fn scroll(&self) -> ScrollAnchor {
        self.scroll
    }

    /// Scroll as the user would, without recording an event.
    pub fn set_scroll(&mut self, anchor: ScrollAnchor) {
        self.scroll = anchor;
    }

    /// Overlay placement while one is shown.
    pub fn overlay(&self) -> Option<OverlayPlacement> {
        self.overlay
    }

    /// Copy of the most recently presented surface.
    pub fn last_frame(&self) -> Option<&Surface> {
        self.last_frame.as_ref()
    }

    /// Side effects recorded so far, oldest first.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Drain the recorded side effects.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::Presented { .. }))
            .count()
    }
}

impl TransitionHost for HeadlessHost {
    fn now(&self) -> f64 {
        self.clock
    }

    fn next_frame(&mut self) -> f64 {
        self.clock += self.frame_interval;
        self.scroll.y += self.scroll_drift;
        self.clock
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn panel_rect(&self) -> Rect {
        self.panel
    }

    fn scroll_position(&self) -> ScrollAnchor {
        self.scroll
    }

    fn create_surface(&mut self, size: SurfaceSize) -> GlitchswapResult<Surface> {
        if !self.pixel_access {
            return Err(GlitchswapError::unsupported_surface(
                "headless host has pixel access disabled",
            ));
        }
        Ok(Surface::with_size(size))
    }

    fn position_overlay(&mut self, placement: OverlayPlacement) {
        self.overlay = Some(placement);
        self.events.push(HostEvent::Positioned(placement));
    }

    fn present(&mut self, surface: &Surface) {
        match &mut self.last_frame {
            Some(frame) if frame.size() == surface.size() => {
                frame.data_mut().copy_from_slice(surface.data());
            }
            slot => *slot = Some(surface.clone()),
        }
        self.events.push(HostEvent::Presented { time: self.clock });
    }

    fn replace_content(&mut self, markup: &str) {
        self.content = markup.to_owned();
        self.events.push(HostEvent::Replaced(markup.to_owned()));
    }

    fn scroll_to(&mut self, anchor: ScrollAnchor) {
        self.scroll = anchor;
        self.events.push(HostEvent::ScrolledTo(anchor));
    }

    fn remove_overlay(&mut self) {
        self.overlay = None;
        self.events.push(HostEvent::OverlayRemoved);
    }

    fn scroll_panel_into_view(&mut self, delay_ms: f64) {
        self.events.push(HostEvent::PanelScrolledIntoView { delay_ms });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/headless.rs"]
mod tests;
