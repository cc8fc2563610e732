//! Command-line interface
//!
//! Flags override the config file for the current run only; nothing is
//! written back.

use clap::Parser;
use log::LevelFilter;

use filedeck_config::Config;

/// filedeck - tiled file browser for a projection server
#[derive(Parser, Debug)]
#[command(name = "filedeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Projection server base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Path the first pane opens at (overrides config)
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,
}

impl Cli {
    /// Fold CLI overrides into a loaded config
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(path) = &self.path {
            config.start_path = path.clone();
        }
        config
    }
}
