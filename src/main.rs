#![allow(non_snake_case)]

mod app;
mod bindings;
mod components;
pub mod context;
mod pages;
mod scheduler;
mod scroll_sync;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use webfolio_core::SiteConfig;

/// Settings resolved from the command line, set once before launch
static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Everything the page needs from outside the window
#[derive(Clone, Debug)]
pub struct AppSettings {
    pub config: SiteConfig,
    /// Root that asset paths such as `assets/cv.pdf` are resolved against
    pub assets_dir: PathBuf,
    /// Where "Download CV" saves its file
    pub downloads_dir: PathBuf,
}

/// Get the launch settings (defaults if launched without `main`)
pub fn get_settings() -> AppSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| AppSettings {
        config: SiteConfig::default(),
        assets_dir: PathBuf::from("."),
        downloads_dir: default_downloads_dir(),
    })
}

fn default_downloads_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// WebFolio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "webfolio-desktop")]
#[command(about = "WebFolio - Personal portfolio page")]
struct Args {
    /// JSON site file (owner profile, hero titles, timings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory that asset paths are resolved against
    #[arg(short, long, default_value = ".")]
    assets_dir: PathBuf,

    /// Directory the CV download is saved into
    #[arg(short, long)]
    downloads_dir: Option<PathBuf>,

    /// Override the testimonial autoplay interval in milliseconds
    #[arg(long)]
    autoplay_ms: Option<u64>,
}

fn resolve_settings(args: Args) -> anyhow::Result<AppSettings> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load site config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(ms) = args.autoplay_ms {
        config.carousel.interval_ms = ms;
    }
    config.validate().context("invalid site config")?;

    Ok(AppSettings {
        config,
        assets_dir: args.assets_dir,
        downloads_dir: args.downloads_dir.unwrap_or_else(default_downloads_dir),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("webfolio=info,webfolio_core=info")),
        )
        .init();

    let settings = resolve_settings(Args::parse())?;

    let title = format!("{} - Portfolio", settings.config.owner.name);
    tracing::info!(
        "Starting '{}' with assets dir {:?}, downloads to {:?}",
        title,
        settings.assets_dir,
        settings.downloads_dir
    );

    // Store settings globally
    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
