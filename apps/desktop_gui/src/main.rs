use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use client_core::{load_dataset, load_settings, GeminiProfileFetcher, Locale, ProfileFetcher};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::{theme, DesktopGuiApp, StartupConfig};

const APP_TITLE: &str = "Executive Summary";

#[derive(Debug, Parser)]
#[command(name = "exec-summary-gui", about = "Browse executive success stories")]
struct Args {
    /// Settings file; defaults to ./exec_summary.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON file replacing the built-in category directory.
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Interface language (th or en). Overrides the settings file.
    #[arg(long)]
    locale: Option<Locale>,
    /// Font file with Thai glyphs.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;
    let dataset = Arc::new(load_dataset(args.dataset.as_deref())?);
    let fetcher: Arc<dyn ProfileFetcher> = Arc::new(
        GeminiProfileFetcher::from_settings(&settings)
            .context("invalid generation backend settings")?,
    );
    tracing::info!(
        model = %settings.model,
        categories = dataset.len(),
        "starting desktop gui"
    );

    let config = StartupConfig {
        locale: args.locale.unwrap_or(settings.locale),
        font: args.font,
        dataset,
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let _worker = runtime::launch(cmd_rx, ui_tx, fetcher);

    let year = chrono::Local::now().year();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1180.0, 820.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(theme::visuals());
            match theme::install_fonts(&cc.egui_ctx, config.font.as_deref()) {
                Some(path) => tracing::info!(font = %path, "loaded Thai fallback font"),
                None => tracing::warn!("no Thai-capable font found; Thai text may not render"),
            }
            Ok(Box::new(DesktopGuiApp::new(cmd_tx, ui_rx, config, year)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui failed: {err}"))
}
