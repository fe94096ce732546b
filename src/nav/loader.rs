use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::GlitchswapError;

/// Supplies the markup for a menu section.
pub trait ContentSource {
    /// Fetch the markup for `section`.
    fn fetch(&mut self, section: &str) -> anyhow::Result<String>;
}

impl<F> ContentSource for F
where
    F: FnMut(&str) -> anyhow::Result<String>,
{
    fn fetch(&mut self, section: &str) -> anyhow::Result<String> {
        self(section)
    }
}

/// Reads `<root>/<section>.html`.
#[derive(Clone, Debug)]
pub struct DirContentSource {
    root: PathBuf,
}

impl DirContentSource {
    /// Source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the fragments.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fragment path for `section`. Ids that could escape the root are refused.
    pub fn path_for(&self, section: &str) -> anyhow::Result<PathBuf> {
        let plain = !section.is_empty()
            && section != "."
            && section != ".."
            && !section.contains(['/', '\\', '\0']);
        if !plain {
            return Err(GlitchswapError::content(format!("invalid section id '{section}'")).into());
        }
        Ok(self.root.join(format!("{section}.html")))
    }
}

impl ContentSource for DirContentSource {
    fn fetch(&mut self, section: &str) -> anyhow::Result<String> {
        let path = self.path_for(section)?;
        std::fs::read_to_string(&path)
            .with_context(|| format!("read section '{section}' from '{}'", path.display()))
    }
}

/// Markup for `section`, or `error_markup` when the source fails.
///
/// Failures are logged and never surface to the caller, so a transition always runs.
pub fn resolve_markup<S>(source: &mut S, section: &str, error_markup: &str) -> String
where
    S: ContentSource + ?Sized,
{
    match source.fetch(section) {
        Ok(markup) => markup,
        Err(err) => {
            let detail = format!("{err:#}");
            tracing::error!(section, error = %detail, "error loading content");
            error_markup.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/loader.rs"]
mod tests;
