use rand::SeedableRng as _;

use crate::foundation::error::GlitchswapResult;
use crate::foundation::random::FxRng;
use crate::nav::config::NavConfig;
use crate::nav::loader::{ContentSource, resolve_markup};
use crate::nav::menu::{MenuState, NavAction, NavKey};
use crate::transition::host::{BeginOutcome, TransitionHost, begin_transition, drive_frame};
use crate::transition::overlay::Layout;
use crate::transition::session::{SessionState, TransitionSession};

/// Menu-driven page that swaps content through transitions, one session at a time.
///
/// Requests arriving while a session runs are queued; only the latest is kept and it
/// starts once the running session has removed its overlay.
pub struct NavController<S> {
    cfg: NavConfig,
    menu: MenuState,
    source: S,
    rng: FxRng,
    active: Option<TransitionSession<FxRng>>,
    pending: Option<String>,
    displayed: String,
}

impl<S: ContentSource> NavController<S> {
    /// Validate `cfg` and build an idle controller. Nothing is loaded until
    /// [`start`](Self::start) or a request.
    pub fn new(cfg: NavConfig, source: S, rng: FxRng) -> GlitchswapResult<Self> {
        cfg.validate()?;
        let menu = MenuState::new(cfg.sections.clone(), &cfg.initial_section);
        Ok(Self {
            cfg,
            menu,
            source,
            rng,
            active: None,
            pending: None,
            displayed: String::new(),
        })
    }

    /// Load the initial section.
    pub fn start<H: TransitionHost + ?Sized>(&mut self, host: &mut H) -> GlitchswapResult<()> {
        let initial = self.cfg.initial_section.clone();
        self.request_section(host, &initial)
    }

    /// Transition to `section` now, or queue it behind the running session.
    pub fn request_section<H: TransitionHost + ?Sized>(
        &mut self,
        host: &mut H,
        section: &str,
    ) -> GlitchswapResult<()> {
        if self.active.is_some() {
            if let Some(replaced) = self.pending.replace(section.to_owned()) {
                tracing::debug!(section, replaced = %replaced, "queued request superseded");
            } else {
                tracing::debug!(section, "request queued behind running transition");
            }
            return Ok(());
        }
        self.begin(host, section)
    }

    /// Route a menu click.
    ///
    /// In the narrow layout the host is also asked to bring the content panel into view,
    /// since the menu sits below it.
    pub fn click<H: TransitionHost + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
    ) -> GlitchswapResult<()> {
        let action = self.menu.click(index);
        self.dispatch(host, action)?;
        if Layout::for_viewport(host.viewport_width(), &self.cfg.transition) == Layout::Narrow {
            host.scroll_panel_into_view(self.cfg.panel_scroll_delay_ms);
        }
        Ok(())
    }

    /// Route a key press.
    pub fn handle_key<H: TransitionHost + ?Sized>(
        &mut self,
        host: &mut H,
        key: NavKey,
    ) -> GlitchswapResult<()> {
        let action = self.menu.handle_key(key);
        self.dispatch(host, action)
    }

    /// Advance the running session by one host frame and start a queued request after teardown.
    ///
    /// Returns `true` while a session is still running.
    pub fn tick<H: TransitionHost + ?Sized>(&mut self, host: &mut H) -> GlitchswapResult<bool> {
        let Some(session) = self.active.as_mut() else {
            return Ok(false);
        };
        if let SessionState::Running { .. } = drive_frame(host, session) {
            return Ok(true);
        }
        self.active = None;
        if let Some(next) = self.pending.take() {
            self.begin(host, &next)?;
        }
        Ok(self.active.is_some())
    }

    /// Tick until no session is running or queued. Returns the number of frames driven.
    pub fn run_until_idle<H: TransitionHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> GlitchswapResult<u64> {
        let mut frames = 0;
        while self.active.is_some() {
            self.tick(host)?;
            frames += 1;
        }
        Ok(frames)
    }

    fn dispatch<H: TransitionHost + ?Sized>(
        &mut self,
        host: &mut H,
        action: Option<NavAction>,
    ) -> GlitchswapResult<()> {
        match action {
            Some(NavAction::Load(section)) => self.request_section(host, &section),
            None => Ok(()),
        }
    }

    fn begin<H: TransitionHost + ?Sized>(
        &mut self,
        host: &mut H,
        section: &str,
    ) -> GlitchswapResult<()> {
        let markup = resolve_markup(&mut self.source, section, &self.cfg.error_markup);
        let previous = std::mem::replace(&mut self.displayed, markup.clone());
        let rng = FxRng::from_rng(&mut self.rng);
        match begin_transition(host, &self.cfg.transition, previous, markup, rng)? {
            BeginOutcome::Animating(session) => {
                tracing::debug!(section, "section transition started");
                self.active = Some(session);
            }
            BeginOutcome::Replaced { .. } => {}
        }
        Ok(())
    }
}

impl<S> NavController<S> {
    /// Configuration in use.
    pub fn config(&self) -> &NavConfig {
        &self.cfg
    }

    /// Menu state, for drawing the cursor and active marker.
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Mutable menu state, for hover tracking.
    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    /// Whether a transition session is running.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Section waiting for the running session to finish.
    pub fn pending_section(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Markup most recently handed to the host, including error markup.
    pub fn displayed_markup(&self) -> &str {
        &self.displayed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/controller.rs"]
mod tests;
