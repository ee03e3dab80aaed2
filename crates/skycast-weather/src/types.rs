use serde::{Deserialize, Serialize};

/// Temperature unit requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Auto,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value for the forecast API's `temperature_unit` parameter.
    /// `None` keeps the provider default.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Celsius => Some("celsius"),
            Self::Fahrenheit => Some("fahrenheit"),
        }
    }
}

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    Showers,
    Sleet,
    Snow,
    Thunderstorm,
    Hail,
    #[default]
    Unknown,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 13] = [
        Self::Clear,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Fog,
        Self::Drizzle,
        Self::Rain,
        Self::HeavyRain,
        Self::Showers,
        Self::Sleet,
        Self::Snow,
        Self::Thunderstorm,
        Self::Hail,
        Self::Unknown,
    ];

    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::Sleet, // Freezing drizzle
            61 | 63 => Self::Rain,
            65 => Self::HeavyRain,
            66 | 67 => Self::Sleet, // Freezing rain
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            80..=82 => Self::Showers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::Hail,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label shown to the user
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::Showers => "Showers",
            Self::Sleet => "Sleet",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Hail => "Hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Inverse of [`WeatherCondition::description`]
    pub fn from_description(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.description() == label)
    }
}

/// A geocoding match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at a coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// In whatever unit the provider answered with
    pub temperature: f64,
    pub weather_code: i32,
    pub condition: WeatherCondition,
}

/// Outcome of resolving a city name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherQueryResult {
    pub location: String,
    pub weather: String,
    pub temperature: f64,
}

/// Weather lookup errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("No place matches '{0}'")]
    NotFound(String),
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Parse error: {0}")]
    Parse(String),
}
