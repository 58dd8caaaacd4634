use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::{io, path::PathBuf, time::Duration};
use waybar_weather_core::{
    Config, OpenWeatherProvider, SavedResponse, WeatherProvider, emit, render,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "waybar-weather",
    version,
    about = "Print OpenWeatherMap conditions as Waybar custom-module JSON"
)]
pub struct Cli {
    /// Config file to use instead of
    /// $XDG_CONFIG_HOME/waybar/modules/custom-weather-openweathermap.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Render a saved one-call response instead of querying the API.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        log::debug!("loaded config with {} icon glyphs", config.icons.len());

        let provider: Box<dyn WeatherProvider> = match self.input {
            Some(path) => Box::new(SavedResponse::new(path)),
            None => Box::new(OpenWeatherProvider::new(
                &config,
                Duration::from_secs(self.timeout),
            )?),
        };

        let snapshot = provider.fetch().await?;
        let output = render(&snapshot, &config.icons, &Local)?;

        emit(&output, io::stdout().lock()).context("Failed to write output to stdout")?;

        Ok(())
    }
}
