#![allow(non_snake_case)]

mod app;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Essential UI - form component showcase
#[derive(Parser, Debug)]
#[command(name = "essential-ui-desktop")]
#[command(about = "Essential UI - reusable form and typography components")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "Essential UI")]
    title: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_filter: String,
}

impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.width > 0.0 && self.height > 0.0,
            "window size must be positive, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    args.validate()?;

    tracing::info!("Starting '{}' at {}x{}", args.title, args.width, args.height);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let args = Args::parse_from(["essential-ui-desktop"]);
        assert_eq!(args.title, "Essential UI");
        assert_eq!(args.log_filter, "info");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_size() {
        let args = Args::parse_from(["essential-ui-desktop", "--width", "0"]);
        assert!(args.validate().is_err());
    }
}
