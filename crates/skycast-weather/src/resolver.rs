use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use crate::geocode::{GeocodingClient, DEFAULT_GEOCODING_URL};
use crate::provider::{WeatherProvider, DEFAULT_FORECAST_URL};
use crate::types::{TemperatureUnit, WeatherError, WeatherQueryResult};

/// Turns a city name into the data the screen shows.
///
/// All-or-nothing: either every field is resolved or an error is returned.
/// Implementations never retry.
#[async_trait]
pub trait WeatherResolver: Send + Sync {
    async fn resolve(&self, city_name: &str) -> Result<WeatherQueryResult, WeatherError>;
}

/// Endpoints and request options for [`OpenMeteoResolver`]
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub unit: TemperatureUnit,
    pub timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            unit: TemperatureUnit::Auto,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Geocodes the name, then fetches current conditions for the match.
#[derive(Debug, Clone)]
pub struct OpenMeteoResolver {
    geocoder: GeocodingClient,
    provider: WeatherProvider,
}

impl OpenMeteoResolver {
    pub fn new(settings: &ResolverSettings) -> Result<Self, WeatherError> {
        Ok(Self {
            geocoder: GeocodingClient::new(&settings.geocoding_url, settings.timeout)?,
            provider: WeatherProvider::new(&settings.forecast_url, settings.unit, settings.timeout)?,
        })
    }
}

#[async_trait]
impl WeatherResolver for OpenMeteoResolver {
    #[instrument(skip(self), level = "info")]
    async fn resolve(&self, city_name: &str) -> Result<WeatherQueryResult, WeatherError> {
        let place = self.geocoder.search(city_name).await?;
        let current = self.provider.current(&place).await?;

        tracing::info!(
            "{}: {} (WMO {}) at {}",
            place.name,
            current.condition.description(),
            current.weather_code,
            current.temperature
        );

        Ok(WeatherQueryResult {
            location: place.name,
            weather: current.condition.description().to_string(),
            temperature: current.temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn resolver(server: &MockServer) -> OpenMeteoResolver {
        OpenMeteoResolver::new(&ResolverSettings {
            geocoding_url: server.uri(),
            forecast_url: server.uri(),
            unit: TemperatureUnit::Auto,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_san_francisco() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("name", "San Francisco"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{
                    "name": "San Francisco",
                    "latitude": 37.77493,
                    "longitude": -122.41942,
                    "country": "United States"
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "37.77493"))
            .and(query_param("longitude", "-122.41942"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": { "temperature_2m": 18.4, "weather_code": 0 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = resolver(&mock_server).resolve("San Francisco").await.unwrap();

        assert_eq!(
            result,
            WeatherQueryResult {
                location: "San Francisco".to_string(),
                weather: "Clear".to_string(),
                temperature: 18.4,
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_uses_canonical_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{ "name": "München", "latitude": 48.13743, "longitude": 11.57549 }]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": { "temperature_2m": -1.5, "weather_code": 1234 }
            })))
            .mount(&mock_server)
            .await;

        let result = resolver(&mock_server).resolve("munich").await.unwrap();

        assert_eq!(result.location, "München");
        assert_eq!(result.weather, "Unknown");
        assert_eq!(result.temperature, -1.5);
    }

    #[tokio::test]
    async fn test_geocoding_miss_skips_forecast() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = resolver(&mock_server).resolve("Zzznotacity").await;

        assert!(matches!(result, Err(WeatherError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_forecast_failure_fails_whole_lookup() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{ "name": "Paris", "latitude": 48.85341, "longitude": 2.3488 }]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = resolver(&mock_server).resolve("Paris").await;

        assert!(matches!(result, Err(WeatherError::Status { status: 500, .. })));
    }
}
