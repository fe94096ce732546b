use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{GlitchswapError, GlitchswapResult};
use crate::transition::config::TransitionConfig;

/// Markup shown in place of a section that could not be loaded.
pub const DEFAULT_ERROR_MARKUP: &str = "<p>Error loading content. Please try again.</p>";

/// Menu layout and content location for a [`NavController`](crate::NavController).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Section ids in menu order.
    pub sections: Vec<String>,
    /// Section loaded at startup and marked active.
    pub initial_section: String,
    /// Directory holding one `<section>.html` fragment per section.
    pub content_dir: PathBuf,
    /// Markup displayed when a section fails to load.
    pub error_markup: String,
    /// Delay before scrolling the panel into view after a narrow-layout menu click.
    pub panel_scroll_delay_ms: f64,
    /// Settings for the transition played on every swap.
    pub transition: TransitionConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sections: ["home", "about", "projects", "contact"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            initial_section: "home".to_owned(),
            content_dir: PathBuf::from("content"),
            error_markup: DEFAULT_ERROR_MARKUP.to_owned(),
            panel_scroll_delay_ms: 100.0,
            transition: TransitionConfig::default(),
        }
    }
}

impl NavConfig {
    /// Check section ids and the nested transition settings.
    pub fn validate(&self) -> GlitchswapResult<()> {
        if self.sections.is_empty() {
            return Err(GlitchswapError::validation("sections must not be empty"));
        }
        for (i, s) in self.sections.iter().enumerate() {
            if s.is_empty() {
                return Err(GlitchswapError::validation(format!(
                    "section {i} has an empty id"
                )));
            }
            if self.sections[..i].contains(s) {
                return Err(GlitchswapError::validation(format!(
                    "duplicate section id '{s}'"
                )));
            }
        }
        if self.section_index(&self.initial_section).is_none() {
            return Err(GlitchswapError::validation(format!(
                "initial_section '{}' is not a menu section",
                self.initial_section
            )));
        }
        if !(self.panel_scroll_delay_ms.is_finite() && self.panel_scroll_delay_ms >= 0.0) {
            return Err(GlitchswapError::validation(
                "panel_scroll_delay_ms must be finite and >= 0",
            ));
        }
        self.transition.validate()
    }

    /// Menu position of `section`.
    pub fn section_index(&self, section: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == section)
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> GlitchswapResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| GlitchswapError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> GlitchswapResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read nav config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/config.rs"]
mod tests;
