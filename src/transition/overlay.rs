use crate::foundation::core::{Rect, ScrollAnchor, SurfaceSize};
use crate::transition::config::TransitionConfig;

/// Where the navigation menu sits relative to the content panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Menu beside the panel; the overlay gives up width.
    Wide,
    /// Menu below the panel; the overlay gives up height.
    Narrow,
}

impl Layout {
    /// Narrow at or below the configured breakpoint, wide above it.
    pub fn for_viewport(viewport_width: f64, cfg: &TransitionConfig) -> Self {
        if viewport_width <= cfg.narrow_breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Overlay rectangle in viewport layout units, fixed at session start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayRegion {
    /// Menu placement the region was computed for.
    pub layout: Layout,
    /// Left edge.
    pub left: f64,
    /// Top edge at the anchor scroll offset.
    pub top: f64,
    /// Width before clamping; may be non-positive for a panel that is not laid out yet.
    pub width: f64,
    /// Height before clamping; may be non-positive for a panel that is not laid out yet.
    pub height: f64,
}

impl OverlayRegion {
    /// Derive the overlay from the panel's bounding box, the margins and the menu exclusion.
    pub fn compute(panel: Rect, viewport_width: f64, cfg: &TransitionConfig) -> Self {
        let m = cfg.margins;
        let layout = Layout::for_viewport(viewport_width, cfg);
        let base_w = panel.width() - m.left - m.right;
        let base_h = panel.height() - m.top - m.bottom;
        let (width, height) = match layout {
            Layout::Wide => (base_w - cfg.wide_menu_width, base_h),
            Layout::Narrow => (base_w, base_h - cfg.narrow_menu_height),
        };
        Self {
            layout,
            left: panel.x0 + m.left,
            top: panel.y0 + m.top,
            width,
            height,
        }
    }

    /// Integer drawing-surface size, truncated and clamped to at least 1x1.
    pub fn pixel_size(&self) -> SurfaceSize {
        SurfaceSize::from_layout(self.width, self.height)
    }

    /// Overlay placement for the current scroll offset, tracking the panel as the page scrolls.
    pub fn placement_at(&self, scroll_y: f64, anchor: ScrollAnchor) -> OverlayPlacement {
        OverlayPlacement {
            left: self.left,
            top: self.top - (scroll_y - anchor.y),
            size: self.pixel_size(),
        }
    }
}

/// Where the host should show the overlay this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPlacement {
    /// Left edge in viewport coordinates.
    pub left: f64,
    /// Top edge in viewport coordinates.
    pub top: f64,
    /// Overlay (and surface) size in pixels.
    pub size: SurfaceSize,
}

#[cfg(test)]
#[path = "../../tests/unit/transition/overlay.rs"]
mod tests;
