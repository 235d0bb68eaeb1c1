//! OpenWeatherMap current conditions.

use serde::Deserialize;
use tracing::debug;

use crate::config::{ChatConfig, ServiceKind};
use crate::error::{ParleyError, Result};
use crate::provider::http::get_json;

use super::Endpoint;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    endpoint: Endpoint,
}

impl WeatherClient {
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            endpoint: Endpoint::from_config(config, ServiceKind::Weather),
        }
    }

    /// Current conditions for `city` in metric units, as one line of text.
    pub async fn current(&self, city: &str) -> Result<String> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/data/2.5/weather");

        let data = get_json(&url, &[("q", city), ("appid", api_key), ("units", "metric")]).await?;
        debug!(city, payload = %data, "weather response");

        let report: WeatherReport = serde_json::from_value(data)
            .map_err(|e| ParleyError::malformed(self.endpoint.name(), e.to_string()))?;
        let description = report
            .weather
            .first()
            .map(|w| w.description.as_str())
            .ok_or_else(|| ParleyError::malformed(self.endpoint.name(), "empty `weather` list"))?;

        Ok(format!(
            "Current weather in {city}: {}°C, {description}",
            report.main.temp
        ))
    }
}

#[derive(Deserialize)]
struct WeatherReport {
    main: MainReadings,
    weather: Vec<Condition>,
}

#[derive(Deserialize)]
struct MainReadings {
    // Kept as a JSON number so integral readings print without a decimal point.
    temp: serde_json::Number,
}

#[derive(Deserialize)]
struct Condition {
    description: String,
}
