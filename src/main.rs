mod app;
mod chart;
mod components;
mod config;
mod map;
mod query;
mod units;
mod view;
mod view_model;
mod weather;

use app::DashboardApp;
use config::Config;
use iced::{Application, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("{error}");
            std::process::exit(2);
        }
    };

    DashboardApp::run(Settings::with_flags(config))
}
