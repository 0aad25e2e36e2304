// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! folio - media slideshow and portfolio viewer
//!
//! A cross-platform desktop application that shows project portfolios of
//! images and videos one item at a time.

mod app;
mod config;
mod io;
mod models;
mod navigator;
mod ui;
mod util;
mod viewer;

use anyhow::Result;
use app::FolioApp;
use clap::Parser;
use config::{Cli, ViewerConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the verbosity flag
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let path = match cli.source_path() {
        Some(path) => path,
        None => match rfd::FileDialog::new()
            .set_title("Open portfolio")
            .add_filter("Lists", &["json", "yaml", "yml"])
            .pick_file()
        {
            Some(path) => path,
            None => {
                log::info!("No list selected, exiting");
                return Ok(());
            }
        },
    };
    let config = ViewerConfig::new(&path, &cli);
    log::info!("Opening {}", path.display());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title("folio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "folio",
        options,
        Box::new(|_cc| Ok(Box::new(FolioApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
