//! Error taxonomy shared by the Skycast crates.
//!
//! Each family carries a `user_message()` for display; the `Display` impls
//! keep the technical detail for logs.

use thiserror::Error;

/// Any failure that reaches the application boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("{0}")]
    Other(anyhow::Error),
}

impl AppError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Recovers the typed config error from an `anyhow` chain when there is one.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<ConfigError>() {
            Ok(config) => AppError::Config(config),
            Err(other) => AppError::Other(other),
        }
    }
}

/// Transport-level failures talking to the weather provider.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to reach the weather service. Check your internet connection."
            }
            NetworkError::Timeout => "The weather service took too long to answer.",
            NetworkError::ServerError { .. } => "The weather service rejected the request.",
            NetworkError::InvalidResponse(_) => "The weather service sent data we could not read.",
        }
    }
}

/// Problems with `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Some settings in config.toml are invalid.",
            ConfigError::ParseError(_) => "config.toml could not be read as TOML.",
        }
    }
}

/// Lookup failures that are about the answer, not the transport.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The provider answered with a non-success status
    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::LocationNotFound(_) => "No city by that name. Try another search.",
            WeatherError::ApiError(_) => "The weather service is having trouble right now.",
            WeatherError::ServiceUnavailable => "Weather lookups are not running.",
        }
    }
}

/// Classifies a reqwest failure into a [`NetworkError`].
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
