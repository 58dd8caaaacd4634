use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::{Result, WeatherError},
    model::OneCall,
};

pub mod file;
pub mod openweather;

pub use file::SavedResponse;
pub use openweather::OpenWeatherProvider;

/// A source of one-call snapshots.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self) -> Result<OneCall>;
}

/// Decode a one-call body. `status` is only used to enrich the error.
pub fn decode(body: &[u8], status: Option<u16>) -> Result<OneCall> {
    serde_json::from_slice(body).map_err(|source| WeatherError::Decode { status, source })
}
