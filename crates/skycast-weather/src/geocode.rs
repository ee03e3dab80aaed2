//! Forward geocoding: turn a free-text place name into coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::http;
use crate::types::{Place, WeatherError};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl From<SearchResult> for Place {
    fn from(r: SearchResult) -> Self {
        Self {
            name: r.name,
            latitude: r.latitude,
            longitude: r.longitude,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WeatherError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: http::trim_base(base_url),
        })
    }

    /// Look up the best match for `name`. The name is sent as typed.
    #[instrument(skip(self), level = "debug")]
    pub async fn search(&self, name: &str) -> Result<Place, WeatherError> {
        let url = format!(
            "{}/v1/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(name),
        );

        let response = self.client.get(&url).send().await?;
        let body: SearchResponse = http::decode(response).await?;

        let place: Place = body
            .results
            .and_then(|results| results.into_iter().next())
            .map(Place::from)
            .ok_or_else(|| WeatherError::NotFound(name.to_string()))?;

        tracing::debug!(
            "Geocoded '{}' to {} ({}, {})",
            name,
            place.name,
            place.latitude,
            place.longitude
        );
        Ok(place)
    }
}
