//! Background art for a condition label.

use serde::{Deserialize, Serialize};

use crate::types::WeatherCondition;

/// Label used before any weather has loaded.
pub const ICON_LABEL: &str = "Icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAsset {
    Icon,
    Clear,
    LightCloud,
    HeavyCloud,
    LightRain,
    HeavyRain,
    Showers,
    Sleet,
    Snow,
    Thunder,
    Hail,
}

impl ImageAsset {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Icon => "assets/icon.png",
            Self::Clear => "assets/clear.png",
            Self::LightCloud => "assets/light-cloud.png",
            Self::HeavyCloud => "assets/heavy-cloud.png",
            Self::LightRain => "assets/light-rain.png",
            Self::HeavyRain => "assets/heavy-rain.png",
            Self::Showers => "assets/showers.png",
            Self::Sleet => "assets/sleet.png",
            Self::Snow => "assets/snow.png",
            Self::Thunder => "assets/thunder.png",
            Self::Hail => "assets/hail.png",
        }
    }

    pub fn for_condition(condition: WeatherCondition) -> Self {
        match condition {
            WeatherCondition::Clear => Self::Clear,
            WeatherCondition::PartlyCloudy => Self::LightCloud,
            WeatherCondition::Cloudy | WeatherCondition::Fog => Self::HeavyCloud,
            WeatherCondition::Drizzle | WeatherCondition::Rain => Self::LightRain,
            WeatherCondition::HeavyRain => Self::HeavyRain,
            WeatherCondition::Showers => Self::Showers,
            WeatherCondition::Sleet => Self::Sleet,
            WeatherCondition::Snow => Self::Snow,
            WeatherCondition::Thunderstorm => Self::Thunder,
            WeatherCondition::Hail => Self::Hail,
            WeatherCondition::Unknown => Self::Icon,
        }
    }
}

/// Pick the background for a condition label.
///
/// Total: the empty sentinel, [`ICON_LABEL`] and any unrecognised label all
/// fall back to [`ImageAsset::Icon`].
pub fn image_for(label: &str) -> ImageAsset {
    if label.is_empty() || label == ICON_LABEL {
        return ImageAsset::Icon;
    }
    WeatherCondition::from_description(label)
        .map(ImageAsset::for_condition)
        .unwrap_or(ImageAsset::Icon)
}
