pub(crate) mod config;
pub(crate) mod headless;
pub(crate) mod host;
pub(crate) mod overlay;
pub(crate) mod session;
pub(crate) mod timeline;
