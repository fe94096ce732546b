//! Glitchswap plays a short CRT-style glitch animation over a content panel while its markup is
//! replaced.
//!
//! The engine is host-agnostic: a [`TransitionSession`] is a state machine stepped with host
//! timestamps, returning [`HostCommand`]s to carry out. [`TransitionHost`] plus
//! [`begin_transition`] / [`drive_frame`] wire a session to a page, and [`NavController`] adds
//! menu-driven section loading with one session at a time.
//!
//! Frames are premultiplied RGBA8 [`Surface`]s built by [`compose_frame`] (base fill,
//! scanlines, wave distortion, color shift, glitch) and framed by [`draw_border`]. Filters take
//! any [`rand::Rng`]; use [`seeded_rng`] for reproducible output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod effects;
pub(crate) mod nav;
pub(crate) mod surface;
pub(crate) mod transition;

pub use crate::foundation::core::{Point, Rect, Rgba8Premul, ScrollAnchor, SurfaceSize, Vec2};
pub use crate::foundation::error::{GlitchswapError, GlitchswapResult};
pub use crate::foundation::random::{FxRng, seeded_rng, time_seeded_rng};

pub use crate::surface::buffer::Surface;
pub use crate::surface::composite::PremulRgba8;
pub use crate::surface::snapshot::Snapshot;

pub use crate::effects::backdrop::stepped_backdrop;
pub use crate::effects::border::{border_pulse, draw_border};
pub use crate::effects::color_shift::apply_color_shift;
pub use crate::effects::compose::{FrameReport, GLITCH_THRESHOLD, Stage, compose_frame};
pub use crate::effects::glitch::{GlitchKind, GlitchReport, apply_glitch};
pub use crate::effects::scanlines::{ScanlineReport, apply_scanlines};
pub use crate::effects::wave::{WaveParams, WaveReport, apply_wave_distortion};

pub use crate::transition::config::{Margins, TransitionConfig};
pub use crate::transition::headless::{HeadlessHost, HostEvent};
pub use crate::transition::host::{
    BeginOutcome, TransitionHost, begin_transition, drive_frame, run_transition,
};
pub use crate::transition::overlay::{Layout, OverlayPlacement, OverlayRegion};
pub use crate::transition::session::{
    FrameStep, HostCommand, SessionState, TransitionRequest, TransitionSession,
};
pub use crate::transition::timeline::{SWAP_PROGRESS, intensity, progress};

pub use crate::nav::config::{DEFAULT_ERROR_MARKUP, NavConfig};
pub use crate::nav::controller::NavController;
pub use crate::nav::loader::{ContentSource, DirContentSource, resolve_markup};
pub use crate::nav::menu::{MenuState, NavAction, NavKey};
