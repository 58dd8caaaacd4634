//! Builds the Waybar `text` and `tooltip` strings from a one-call snapshot.
//!
//! The tooltip is assembled as a flat list of lines, one block at a time
//! (current, hourly, daily, alerts, footer), and joined once at the end.
//! Headers use Pango markup since that is what Waybar renders.

use chrono::TimeZone;
use std::fmt::Display;

use crate::{
    config::IconMap,
    error::Result,
    format,
    model::{Alert, Current, Daily, Hourly, OneCall, RenderOutput},
};

/// Appended to `text` while any alert is active.
pub const ALERT_SUFFIX: &str = " ⚠️ ";

/// Hourly entries shown in the tooltip: +3h, +6h, +9h and +12h.
pub fn forecast_hours<T>(hours: &[T]) -> impl Iterator<Item = &T> {
    hours.iter().skip(3).step_by(3).take(4)
}

/// Daily entries shown in the tooltip: the three days after today.
pub fn forecast_days<T>(days: &[T]) -> impl Iterator<Item = &T> {
    days.iter().skip(1).take(3)
}

/// Render `snapshot`, formatting every timestamp in `tz`.
pub fn render<Tz>(snapshot: &OneCall, icons: &IconMap, tz: &Tz) -> Result<RenderOutput>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let current = &snapshot.current;
    let alerts = snapshot.alerts();

    let mut text = format!(
        "{} {}",
        icons.glyph(&current.condition.icon)?,
        format::temperature(current.temp)
    );
    if !alerts.is_empty() {
        text.push_str(ALERT_SUFFIX);
    }

    let mut lines = current_block(current, icons)?;
    lines.extend(hourly_block(&snapshot.hourly, icons, tz)?);
    lines.extend(daily_block(&snapshot.daily, icons, tz)?);
    lines.extend(alerts_block(alerts, tz)?);
    lines.push(footer(current, tz)?);

    log::debug!(
        "rendered {} tooltip lines ({} hourly, {} daily, {} alerts in snapshot)",
        lines.len(),
        snapshot.hourly.len(),
        snapshot.daily.len(),
        alerts.len()
    );

    Ok(RenderOutput { text, tooltip: lines.join("\n").trim().to_string() })
}

fn wind_line(degrees: f64, speed: f64) -> String {
    format!(
        "Wind:  {:<3} {} m/s",
        format::wind_direction(degrees),
        format::wind_speed(speed)
    )
}

fn current_block(current: &Current, icons: &IconMap) -> Result<Vec<String>> {
    let condition = &current.condition;

    Ok(vec![
        "<b>Now</b>".to_string(),
        "---".to_string(),
        String::new(),
        format!("{} ({})", icons.glyph(&condition.icon)?, condition.description),
        String::new(),
        wind_line(current.wind_deg, current.wind_speed),
        format!("Feels: {}", format::temperature(current.feels_like)),
        format!("Humid: {}%", current.humidity),
        format!("UV:    {}", current.uvi),
        String::new(),
    ])
}

fn hourly_block<Tz>(hours: &[Hourly], icons: &IconMap, tz: &Tz) -> Result<Vec<String>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = forecast_hours(hours)
        .map(|hour| -> Result<String> {
            Ok(format!(
                "{} | {:^4} | {} ({})",
                format::hour_minute(hour.dt, tz)?,
                format::temperature(hour.temp),
                icons.glyph(&hour.condition.icon)?,
                hour.condition.description
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    lines.push(String::new());
    Ok(lines)
}

fn daily_block<Tz>(days: &[Daily], icons: &IconMap, tz: &Tz) -> Result<Vec<String>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = Vec::new();

    for day in forecast_days(days) {
        lines.extend([
            format!("<b>{}</b>", format::weekday(day.dt, tz)?),
            "---".to_string(),
            String::new(),
            format!("{} ({})", icons.glyph(&day.condition.icon)?, day.condition.description),
            String::new(),
            wind_line(day.wind_deg, day.wind_speed),
            format!(
                "Temp:  {} to {}",
                format::temperature(day.temp.min),
                format::temperature(day.temp.max)
            ),
            format!("Humid: {}%", day.humidity),
            format!("UV:    {}", day.uvi),
            String::new(),
        ]);
    }

    Ok(lines)
}

fn alerts_block<Tz>(alerts: &[Alert], tz: &Tz) -> Result<Vec<String>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if alerts.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines = vec!["<b>Alerts</b>".to_string(), "---".to_string(), String::new()];

    for alert in alerts {
        lines.extend([
            format!(
                "<i>{}</i> - <i>{}</i>",
                format::alert_time(alert.start, tz)?,
                format::alert_time(alert.end, tz)?
            ),
            "-".to_string(),
            String::new(),
            alert.description.clone(),
            String::new(),
        ]);
    }

    Ok(lines)
}

fn footer<Tz>(current: &Current, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Ok(format!("<small>last update: {}</small>", format::clock(current.dt, tz)?))
}
