pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod loader;
pub(crate) mod menu;
