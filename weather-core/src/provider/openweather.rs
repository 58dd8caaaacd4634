use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::OneCall,
};

use super::{WeatherProvider, decode};

/// https://openweathermap.org/api/one-call-api
pub const ONECALL_URL: &str = "https://api.openweathermap.org/data/2.5/onecall";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One-call client for a single configured location.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    lang: String,
    lat: f64,
    lon: f64,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(WeatherError::Network)?;

        Ok(Self {
            api_key: config.api_key.clone(),
            lang: config.lang.clone(),
            lat: config.lat,
            lon: config.lon,
            endpoint: ONECALL_URL.to_string(),
            http,
        })
    }

    /// Point the client at a different base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn query(&self) -> [(&'static str, String); 4] {
        [
            ("appid", self.api_key.clone()),
            ("lang", self.lang.clone()),
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
        ]
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self) -> Result<OneCall> {
        log::debug!("GET {} (lat={}, lon={}, lang={})", self.endpoint, self.lat, self.lon, self.lang);

        let res = self
            .http
            .get(&self.endpoint)
            .query(&self.query())
            .send()
            .await
            .map_err(WeatherError::Network)?;

        // Non-2xx bodies are still decoded; OpenWeatherMap error bodies
        // fail to decode and the status ends up in the error message.
        let status = res.status();
        if !status.is_success() {
            log::warn!("OpenWeatherMap answered with HTTP {status}");
        }

        let body = res.bytes().await.map_err(WeatherError::Network)?;
        log::debug!("received {} bytes", body.len());

        decode(&body, Some(status.as_u16()))
    }
}
