use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::http;
use crate::types::{CurrentConditions, Place, TemperatureUnit, WeatherCondition, WeatherError};

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    weather_code: i32,
}

/// Current-conditions client for the Open-Meteo forecast API
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    unit: TemperatureUnit,
}

impl WeatherProvider {
    pub fn new(
        base_url: &str,
        unit: TemperatureUnit,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        Ok(Self {
            client: Arc::new(http::build_client(timeout)?),
            base_url: http::trim_base(base_url),
            unit,
        })
    }

    /// Fetch current temperature and condition at `place`.
    #[instrument(skip(self), fields(place = %place.name), level = "debug")]
    pub async fn current(&self, place: &Place) -> Result<CurrentConditions, WeatherError> {
        let mut url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=temperature_2m,weather_code",
            self.base_url, place.latitude, place.longitude,
        );
        if let Some(unit) = self.unit.query_value() {
            url.push_str(&format!("&temperature_unit={}", unit));
        }

        let response = self.client.get(&url).send().await?;
        let body: ForecastResponse = http::decode(response).await?;

        let current = body
            .current
            .ok_or_else(|| WeatherError::Parse("response has no current block".to_string()))?;

        Ok(CurrentConditions {
            temperature: current.temperature_2m,
            weather_code: current.weather_code,
            condition: WeatherCondition::from_wmo_code(current.weather_code),
        })
    }
}
