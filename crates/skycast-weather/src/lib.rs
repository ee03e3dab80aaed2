//! Weather lookup for Skycast
//!
//! Resolves a free-text city name to current conditions via the Open-Meteo
//! geocoding and forecast APIs, and maps condition labels to background art.

mod http;

pub mod types;
pub mod geocode;
pub mod imagery;
pub mod provider;
pub mod resolver;

pub use types::*;
pub use geocode::GeocodingClient;
pub use imagery::{image_for, ImageAsset};
pub use provider::WeatherProvider;
pub use resolver::{OpenMeteoResolver, ResolverSettings, WeatherResolver};
