use serde::Deserialize;
use std::{
    collections::HashMap,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Result, WeatherError};

/// Location of the config file relative to `$XDG_CONFIG_HOME`.
pub const CONFIG_RELATIVE_PATH: &str = "waybar/modules/custom-weather-openweathermap.toml";

/// Mapping from OpenWeatherMap icon codes (`"01d"`, `"10n"`, ...) to display glyphs.
///
/// Example TOML:
/// [icons]
/// "01d" = "☀"
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct IconMap(HashMap<String, String>);

impl IconMap {
    /// Glyph for `code`, or `IconLookup` if the config has no entry for it.
    pub fn glyph(&self, code: &str) -> Result<&str> {
        self.0
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| WeatherError::IconLookup { code: code.to_owned() })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IconMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Settings for one run, loaded once in `main` and borrowed by every stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub lang: String,
    pub lat: f64,
    pub lon: f64,
    pub icons: IconMap,
}

// On-disk shape. Every field is optional here so that a missing key is
// reported by name instead of as a generic TOML error.
#[derive(Debug, Deserialize)]
struct RawConfig {
    general: Option<RawGeneral>,
    location: Option<RawLocation>,
    icons: Option<IconMap>,
}

#[derive(Debug, Deserialize)]
struct RawGeneral {
    apikey: Option<String>,
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl Config {
    /// Load from the default location under `$XDG_CONFIG_HOME`.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load and validate the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| WeatherError::ConfigMissing {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents).map_err(|e| WeatherError::ConfigMissing {
            reason: format!("failed to parse {}: {e}", path.display()),
        })?;

        let missing = |key| WeatherError::ConfigIncomplete { path: path.to_path_buf(), key };

        let general = raw.general.ok_or_else(|| missing("general"))?;
        let location = raw.location.ok_or_else(|| missing("location"))?;

        Ok(Self {
            api_key: general.apikey.ok_or_else(|| missing("general.apikey"))?,
            lang: general.lang.ok_or_else(|| missing("general.lang"))?,
            lat: location.lat.ok_or_else(|| missing("location.lat"))?,
            lon: location.lon.ok_or_else(|| missing("location.lon"))?,
            icons: raw.icons.ok_or_else(|| missing("icons"))?,
        })
    }

    /// Path to the config file, derived from `$XDG_CONFIG_HOME`.
    pub fn config_file_path() -> Result<PathBuf> {
        config_file_path_from(std::env::var_os("XDG_CONFIG_HOME"))
    }
}

fn config_file_path_from(base: Option<OsString>) -> Result<PathBuf> {
    match base {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir).join(CONFIG_RELATIVE_PATH)),
        _ => Err(WeatherError::ConfigMissing {
            reason: "XDG_CONFIG_HOME is not set".to_string(),
        }),
    }
}
