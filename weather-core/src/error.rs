use std::path::PathBuf;

use thiserror::Error;

/// Every way a single `load → fetch → render → emit` pass can fail.
///
/// None of these are recovered from; the binary reports them on stderr
/// and exits non-zero without writing anything to stdout.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("config file unavailable: {reason}")]
    ConfigMissing { reason: String },

    #[error("config file {} is missing required key `{key}`", .path.display())]
    ConfigIncomplete { path: PathBuf, key: &'static str },

    #[error("request to OpenWeatherMap failed")]
    Network(#[source] reqwest::Error),

    #[error("failed to decode one-call response{}", status_suffix(.status))]
    Decode {
        status: Option<u16>,
        #[source]
        source: serde_json::Error,
    },

    #[error("no icon configured for condition code `{code}`")]
    IconLookup { code: String },

    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    match *status {
        Some(code) if !(200..300).contains(&code) => format!(" (HTTP status {code})"),
        _ => String::new(),
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
