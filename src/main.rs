// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

use filedeck::app::FiledeckApp;
use filedeck::cli::Cli;
use filedeck::debug;
use filedeck_config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.apply_to(Config::load()?);
    debug::init(cli.log_level, config.log_level.into());

    log::info!("starting filedeck {}", filedeck::VERSION);
    log::info!("server: {}", config.server_url);

    // Shared runtime for document fetches
    let runtime = Arc::new(Runtime::new()?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("filedeck")
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    let app_runtime = Arc::clone(&runtime);
    let result = eframe::run_native(
        "filedeck",
        options,
        Box::new(move |cc| Ok(Box::new(FiledeckApp::new(cc, config, app_runtime)?))),
    );

    // Drop the runtime explicitly so tokio worker threads shut down before
    // main returns, with a timeout in case a fetch hangs.
    log::info!("event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    result.map_err(|e| anyhow::anyhow!("event loop error: {e}"))
}
