mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::CatalogApp;

#[derive(Parser, Debug)]
#[command(about = "Browse, search and revise the problem catalog")]
struct Args {
    /// Overrides the backend address from catalog.toml and the environment.
    #[arg(long)]
    backend_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let settings = load_settings().with_backend_url(args.backend_url);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    // Detached: the worker stops once the app drops its command sender.
    let _worker = backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Problem List")
            .with_inner_size([1100.0, 640.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Problem List",
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogApp::new(cmd_tx, ui_rx)))),
    )
}
