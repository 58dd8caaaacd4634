use async_trait::async_trait;
use std::path::PathBuf;

use crate::{
    error::{Result, WeatherError},
    model::OneCall,
};

use super::{WeatherProvider, decode};

/// Replays a one-call response previously saved to disk.
#[derive(Debug, Clone)]
pub struct SavedResponse {
    path: PathBuf,
}

impl SavedResponse {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WeatherProvider for SavedResponse {
    async fn fetch(&self) -> Result<OneCall> {
        log::debug!("reading one-call response from {}", self.path.display());

        let body = tokio::fs::read(&self.path).await.map_err(|source| WeatherError::Io {
            path: self.path.clone(),
            source,
        })?;

        decode(&body, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_saved_body() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"current":{{"dt":0,"temp":273.15,"feels_like":273.15,"humidity":50,"uvi":0,
                "wind_speed":0,"wind_deg":0,"weather":[{{"icon":"01n","description":"clear sky"}}]}},
                "hourly":[],"daily":[]}}"#
        )
        .unwrap();

        let snapshot = SavedResponse::new(file.path()).fetch().await.expect("must decode");
        assert_eq!(snapshot.current.condition.icon, "01n");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SavedResponse::new(dir.path().join("missing.json")).fetch().await.unwrap_err();

        assert!(matches!(err, WeatherError::Io { .. }));
    }
}
