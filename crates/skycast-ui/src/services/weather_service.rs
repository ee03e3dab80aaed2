//! Weather backend: async lookups by city name.
//! All network work runs off the UI thread; results sent via mpsc.

use std::sync::Arc;

use skycast_core::{NetworkError, ReqwestErrorExt};
use skycast_weather::{WeatherQueryResult, WeatherResolver};
use tokio::runtime::Handle;

/// Error type for weather operations
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherError {
    NotFound(String),
    Network(String),
    Timeout,
    Server { status: u16, message: String },
    InvalidResponse(String),
    NotInitialized,
}

impl std::fmt::Display for WeatherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherError::NotFound(s) => write!(f, "No place named '{}'", s),
            WeatherError::Network(s) => write!(f, "Weather error: {}", s),
            WeatherError::Timeout => write!(f, "Weather request timed out"),
            WeatherError::Server { status, message } => {
                write!(f, "Weather service returned {}: {}", status, message)
            }
            WeatherError::InvalidResponse(s) => write!(f, "Unexpected weather response: {}", s),
            WeatherError::NotInitialized => write!(f, "Weather service not initialized"),
        }
    }
}

impl std::error::Error for WeatherError {}

impl From<skycast_weather::WeatherError> for WeatherError {
    fn from(e: skycast_weather::WeatherError) -> Self {
        use skycast_weather::WeatherError as Lookup;

        match e {
            Lookup::NotFound(name) => WeatherError::NotFound(name),
            Lookup::Status { status, url } => WeatherError::Server {
                status,
                message: url,
            },
            Lookup::Parse(s) => WeatherError::InvalidResponse(s),
            Lookup::Network(e) => match e.into_network_error() {
                NetworkError::Timeout => WeatherError::Timeout,
                NetworkError::ServerError { status, message } => {
                    WeatherError::Server { status, message }
                }
                NetworkError::InvalidResponse(s) => WeatherError::InvalidResponse(s),
                NetworkError::ConnectionFailed(s) => WeatherError::Network(s),
            },
        }
    }
}

/// Messages sent from async operations back to the UI thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of looking up one city. `generation` identifies the request.
    FetchDone {
        generation: u64,
        result: Result<WeatherQueryResult, WeatherError>,
    },
}

/// Request a lookup for `city_name` on `runtime`.
/// Sends `FetchDone` on the channel when complete, including when there is no runtime.
pub fn request_fetch(
    tx: &std::sync::mpsc::Sender<WeatherServiceMessage>,
    runtime: Option<Handle>,
    resolver: Arc<dyn WeatherResolver>,
    generation: u64,
    city_name: String,
) {
    let tx = tx.clone();
    let runtime = match runtime {
        Some(r) => r,
        None => {
            let _ = tx.send(WeatherServiceMessage::FetchDone {
                generation,
                result: Err(WeatherError::NotInitialized),
            });
            return;
        }
    };

    runtime.spawn(async move {
        let result = resolver
            .resolve(&city_name)
            .await
            .map_err(WeatherError::from);
        if let Err(e) = &result {
            tracing::debug!("Lookup #{} for '{}' failed: {}", generation, city_name, e);
        }
        let _ = tx.send(WeatherServiceMessage::FetchDone { generation, result });
    });
}
