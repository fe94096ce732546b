use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{GlitchswapError, GlitchswapResult};

/// Insets applied to the content panel's bounding box. Negative values grow the region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margins {
    /// Inset from the panel's top edge.
    pub top: f64,
    /// Inset from the panel's right edge.
    pub right: f64,
    /// Inset from the panel's bottom edge.
    pub bottom: f64,
    /// Inset from the panel's left edge.
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 6.0,
            right: -5.0,
            bottom: 6.0,
            left: 8.0,
        }
    }
}

/// Timing and overlay geometry for transition sessions.
///
/// The menu exclusions assume a fixed-size navigation menu: beside the panel on wide layouts,
/// below it on narrow ones.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Session length in host time units (milliseconds in a browser).
    pub duration_ms: f64,
    /// Insets from the panel box to the overlay.
    pub margins: Margins,
    /// Width removed from the overlay on wide layouts.
    pub wide_menu_width: f64,
    /// Height removed from the overlay on narrow layouts.
    pub narrow_menu_height: f64,
    /// Viewports at most this wide use the narrow layout.
    pub narrow_breakpoint: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            margins: Margins::default(),
            wide_menu_width: 185.0,
            narrow_menu_height: 140.0,
            narrow_breakpoint: 600.0,
        }
    }
}

impl TransitionConfig {
    /// Reject non-finite values, a non-positive duration or breakpoint, and negative menu sizes.
    pub fn validate(&self) -> GlitchswapResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(GlitchswapError::validation(
                "duration_ms must be finite and > 0",
            ));
        }
        let m = self.margins;
        if ![m.top, m.right, m.bottom, m.left]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(GlitchswapError::validation("margins must be finite"));
        }
        for (name, v) in [
            ("wide_menu_width", self.wide_menu_width),
            ("narrow_menu_height", self.narrow_menu_height),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(GlitchswapError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !self.narrow_breakpoint.is_finite() || self.narrow_breakpoint <= 0.0 {
            return Err(GlitchswapError::validation(
                "narrow_breakpoint must be finite and > 0",
            ));
        }
        Ok(())
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
            .with_context(|| format!("read transition config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/config.rs"]
mod tests;
