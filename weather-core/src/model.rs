use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Decoded one-call response. Fields the renderer does not use are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OneCall {
    pub current: Current,
    pub hourly: Vec<Hourly>,
    pub daily: Vec<Daily>,
    #[serde(default)]
    pub alerts: Option<Vec<Alert>>,
}

impl OneCall {
    /// Alerts in API order; empty when the response carried none.
    pub fn alerts(&self) -> &[Alert] {
        self.alerts.as_deref().unwrap_or_default()
    }
}

/// The `weather[0]` entry of a record.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    /// Kept as the raw JSON number so it prints exactly as the API sent it.
    pub uvi: Number,
    pub wind_speed: f64,
    pub wind_deg: f64,
    #[serde(rename = "weather", deserialize_with = "first_condition")]
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hourly {
    pub dt: i64,
    pub temp: f64,
    #[serde(rename = "weather", deserialize_with = "first_condition")]
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTemp {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Daily {
    pub dt: i64,
    pub temp: DailyTemp,
    pub humidity: u32,
    pub uvi: Number,
    pub wind_speed: f64,
    pub wind_deg: f64,
    #[serde(rename = "weather", deserialize_with = "first_condition")]
    pub condition: Condition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    pub start: i64,
    pub end: i64,
    pub description: String,
}

/// What the status bar receives: always-visible text plus hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutput {
    pub text: String,
    pub tooltip: String,
}

fn first_condition<'de, D>(deserializer: D) -> Result<Condition, D::Error>
where
    D: Deserializer<'de>,
{
    let conditions = Vec::<Condition>::deserialize(deserializer)?;
    conditions
        .into_iter()
        .next()
        .ok_or_else(|| serde::de::Error::custom("`weather` array is empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current() -> serde_json::Value {
        json!({
            "dt": 1_700_000_000,
            "temp": 280.4,
            "feels_like": 278.9,
            "humidity": 81,
            "uvi": 0.27,
            "wind_speed": 4.6,
            "wind_deg": 250,
            "weather": [
                { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" },
                { "id": 701, "main": "Mist", "description": "mist", "icon": "50d" }
            ]
        })
    }

    #[test]
    fn decodes_without_alerts() {
        let body = json!({ "current": current(), "hourly": [], "daily": [] });
        let parsed: OneCall = serde_json::from_value(body).expect("must decode");

        assert_eq!(parsed.current.condition.icon, "10d");
        assert_eq!(parsed.current.condition.description, "light rain");
        assert_eq!(parsed.current.uvi.to_string(), "0.27");
        assert!(parsed.alerts.is_none());
        assert!(parsed.alerts().is_empty());
    }

    #[test]
    fn empty_weather_array_is_rejected() {
        let mut cur = current();
        cur["weather"] = json!([]);
        let body = json!({ "current": cur, "hourly": [], "daily": [] });

        let err = serde_json::from_value::<OneCall>(body).unwrap_err();
        assert!(err.to_string().contains("`weather` array is empty"));
    }

    #[test]
    fn missing_current_is_rejected() {
        let body = json!({ "cod": 401, "message": "Invalid API key." });
        assert!(serde_json::from_value::<OneCall>(body).is_err());
    }

    #[test]
    fn decodes_alerts() {
        let body = json!({
            "current": current(),
            "hourly": [],
            "daily": [],
            "alerts": [{
                "sender_name": "DWD",
                "event": "frost",
                "start": 1_700_000_000,
                "end": 1_700_036_000,
                "description": "There is a risk of frost."
            }]
        });
        let parsed: OneCall = serde_json::from_value(body).expect("must decode");

        assert_eq!(parsed.alerts().len(), 1);
        assert_eq!(parsed.alerts()[0].event.as_deref(), Some("frost"));
    }
}
