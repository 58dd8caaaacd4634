//! Pure conversions from raw API fields to display tokens.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::error::{Result, WeatherError};

const CARDINAL: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const KELVIN_OFFSET: f64 = 273.15;

/// 16-point compass heading for a wind direction in degrees.
///
/// Each sector is 22.5° wide and centred on its heading, so 11.25° is
/// already `NNE`.
pub fn wind_direction(degrees: f64) -> &'static str {
    let sector = (degrees / 22.5 + 0.5).floor() as i64;
    CARDINAL[sector.rem_euclid(16) as usize]
}

/// Kelvin to whole degrees Celsius (truncated), left-justified to 4 chars.
pub fn temperature(kelvin: f64) -> String {
    let celsius = (kelvin - KELVIN_OFFSET) as i64;
    let token = format!("{celsius}°");
    format!("{token:<4}")
}

/// Wind speed in m/s rounded to an integer, ties to even.
pub fn wind_speed(mps: f64) -> i64 {
    mps.round_ties_even() as i64
}

fn localize<Tz: TimeZone>(ts: i64, tz: &Tz) -> Result<DateTime<Tz>> {
    DateTime::from_timestamp(ts, 0)
        .map(|utc| utc.with_timezone(tz))
        .ok_or(WeatherError::InvalidTimestamp(ts))
}

fn strftime<Tz>(ts: i64, tz: &Tz, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Ok(localize(ts, tz)?.format(pattern).to_string())
}

/// `HH:MM:SS`, used for the current observation and the footer.
pub fn clock<Tz>(ts: i64, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    strftime(ts, tz, "%H:%M:%S")
}

/// `HH:MM`, used for hourly rows.
pub fn hour_minute<Tz>(ts: i64, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    strftime(ts, tz, "%H:%M")
}

/// Abbreviated weekday, used as the daily header.
pub fn weekday<Tz>(ts: i64, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    strftime(ts, tz, "%a")
}

/// `HH:MM Wkd`, used for alert ranges.
pub fn alert_time<Tz>(ts: i64, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    strftime(ts, tz, "%H:%M %a")
}
