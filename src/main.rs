#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gamestore_core::{logging, ConfigSource, StoreConfig};

/// Store configuration, resolved once before launch
static STORE_CONFIG: OnceLock<StoreConfig> = OnceLock::new();

/// Get the store configuration (resolved at startup, or built-in defaults)
pub fn get_store_config() -> StoreConfig {
    STORE_CONFIG.get().cloned().unwrap_or_default()
}

/// GameStore - game currency and item shop
#[derive(Parser, Debug)]
#[command(name = "gamestore-desktop")]
#[command(about = "GameStore - game currency and item shop")]
struct Args {
    /// Store config file (default: <config dir>/gamestore/store.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    let (config, source) = match StoreConfig::resolve(args.config.as_deref()) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("Failed to load store config, using defaults: {}", e);
            (StoreConfig::default(), ConfigSource::BuiltIn)
        }
    };

    let title = config.store_name.clone();
    tracing::info!("Starting '{}' with config from {}", title, source);

    let _ = STORE_CONFIG.set(config);

    let window_width = 1200.0;
    let window_height = 900.0;

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);
}
