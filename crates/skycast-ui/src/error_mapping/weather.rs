use crate::services::weather_service::WeatherError as UiWeatherError;
use skycast_core::{AppError, NetworkError, WeatherError};

impl From<UiWeatherError> for AppError {
    fn from(e: UiWeatherError) -> Self {
        match e {
            UiWeatherError::NotFound(s) => AppError::Weather(WeatherError::LocationNotFound(s)),
            UiWeatherError::Network(s) => AppError::Network(NetworkError::ConnectionFailed(s)),
            UiWeatherError::Timeout => AppError::Network(NetworkError::Timeout),
            UiWeatherError::Server { status, message } => {
                AppError::Weather(WeatherError::ApiError(format!("{}: {}", status, message)))
            }
            UiWeatherError::InvalidResponse(s) => {
                AppError::Network(NetworkError::InvalidResponse(s))
            }
            UiWeatherError::NotInitialized => AppError::Weather(WeatherError::ServiceUnavailable),
        }
    }
}
