//! filedeck - a tiled file browser for a projection server
//!
//! The window is a tree of tiles: leaf panes showing one file or
//! directory each, and splits dividing their rectangle among children.
//! Pane content comes from a projection server over HTTP; each pane
//! tracks which projection of its file it is showing.

pub mod app;
pub mod cli;
pub mod debug;
pub mod input;
pub mod loader;
pub mod registry;
pub mod tile;
pub mod ui;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
