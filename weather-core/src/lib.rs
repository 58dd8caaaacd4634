//! Core library for the `waybar-weather` module.
//!
//! This crate defines:
//! - Configuration loading (API key, location, icon glyphs)
//! - The OpenWeatherMap one-call client and response model
//! - Formatting and rendering of the Waybar `text`/`tooltip` pair
//!
//! It is used by `waybar-weather`, but the renderer is plain data in, strings out,
//! so it can be driven from any snapshot source.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod output;
pub mod provider;
pub mod render;

pub use config::{Config, IconMap};
pub use error::{Result, WeatherError};
pub use model::{OneCall, RenderOutput};
pub use output::emit;
pub use provider::{OpenWeatherProvider, SavedResponse, WeatherProvider};
pub use render::render;
