//! Everything the screen shows, as one plain struct.

use serde::{Deserialize, Serialize};
use skycast_weather::WeatherQueryResult;

/// What is currently on screen.
///
/// Empty `location`/`weather_condition` mean nothing has loaded yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub location: String,
    pub weather_condition: String,
    pub temperature: f64,
    pub is_loading: bool,
    pub has_error: bool,
}

impl DisplayState {
    /// A request was dispatched. The error flag is cleared first.
    pub(crate) fn begin_request(&mut self) {
        self.has_error = false;
        self.is_loading = true;
    }

    pub(crate) fn apply_success(&mut self, result: WeatherQueryResult) {
        self.location = result.location;
        self.weather_condition = result.weather;
        self.temperature = result.temperature;
        self.is_loading = false;
    }

    /// Display fields are left as they were; they are hidden while `has_error`.
    pub(crate) fn apply_failure(&mut self) {
        self.is_loading = false;
        self.has_error = true;
    }
}
