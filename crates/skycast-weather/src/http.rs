use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::types::WeatherError;

const USER_AGENT: &str = concat!("Skycast/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client(timeout: Duration) -> Result<Client, WeatherError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Reject non-2xx responses, then decode the body as `T`.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, WeatherError> {
    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
}

pub(crate) fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
