//! Configuration system for the filedeck tiling file browser.
//!
//! This crate provides configuration loading, saving, and default values
//! for the application. It includes:
//!
//! - The main [`Config`] type with TOML persistence
//! - Shared identifier and enum types used across crates ([`PaneId`],
//!   [`LogLevel`])
//! - Typed error variants for config I/O ([`ConfigError`])

pub mod config;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{LogLevel, PaneId};
