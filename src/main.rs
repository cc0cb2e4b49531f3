#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use anyhow::{ensure, Result};
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Largest accepted window edge, in logical pixels
const MAX_WINDOW_EDGE: u32 = 10_000;

/// Card Flip - Interactive credit card preview
#[derive(Parser, Debug)]
#[command(name = "cardflip-desktop")]
#[command(about = "Card Flip - a credit card preview that follows its form")]
struct Args {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Window title
    #[arg(long, default_value = "Card Flip")]
    title: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn validate(&self) -> Result<()> {
        for (edge, value) in [("width", self.width), ("height", self.height)] {
            ensure!(
                (1..=MAX_WINDOW_EDGE).contains(&value),
                "window {} must be between 1 and {}, got {}",
                edge,
                MAX_WINDOW_EDGE,
                value
            );
        }
        Ok(())
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    args.validate()?;

    tracing::info!(
        width = args.width,
        height = args.height,
        "Starting '{}'",
        args.title
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(LogicalSize::new(args.width as f64, args.height as f64))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
