//! Derives what to draw from a [`DisplayState`].

use std::fmt;

use skycast_weather::{image_for, ImageAsset};

use crate::models::display_state::DisplayState;

pub const ERROR_MESSAGE: &str = "Could not load weather, please try a different city.";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Loading,
    Error(&'static str),
    Weather {
        location: String,
        condition: String,
        temperature: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub background: ImageAsset,
    pub body: ViewBody,
    /// Search input hint; `None` while the input is hidden during loading
    pub placeholder: Option<String>,
}

/// Build the view for `state`.
pub fn render(state: &DisplayState, placeholder: &str) -> View {
    let body = if state.is_loading {
        ViewBody::Loading
    } else if state.has_error {
        ViewBody::Error(ERROR_MESSAGE)
    } else {
        ViewBody::Weather {
            location: state.location.clone(),
            condition: state.weather_condition.clone(),
            temperature: format_temperature(state.temperature),
        }
    };

    View {
        background: image_for(&state.weather_condition),
        placeholder: (!state.is_loading).then(|| placeholder.to_string()),
        body,
    }
}

/// Whole degrees, halves rounded up (-2.5 shows as -2).
pub fn format_temperature(temperature: f64) -> String {
    if temperature.is_nan() {
        return "NaN°".to_string();
    }
    if temperature.is_infinite() {
        let sign = if temperature < 0.0 { "-" } else { "" };
        return format!("{}Infinity°", sign);
    }

    // Adding 0.5 before flooring is off for values just below one half.
    let floor = temperature.floor();
    let rounded = if temperature - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    format!("{}°", rounded as i64)
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.background.path())?;
        match &self.body {
            ViewBody::Loading => writeln!(f, "Loading...")?,
            ViewBody::Error(message) => writeln!(f, "{}", message)?,
            ViewBody::Weather {
                location,
                condition,
                temperature,
            } => {
                writeln!(f, "{}", location)?;
                writeln!(f, "{}", condition)?;
                writeln!(f, "{}", temperature)?;
            }
        }
        if let Some(placeholder) = &self.placeholder {
            write!(f, "{} > ", placeholder)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HINT: &str = "Search any city";

    fn loaded(location: &str, condition: &str, temperature: f64) -> DisplayState {
        DisplayState {
            location: location.to_string(),
            weather_condition: condition.to_string(),
            temperature,
            is_loading: false,
            has_error: false,
        }
    }

    #[test]
    fn shows_weather_when_loaded() {
        let view = render(&loaded("San Francisco", "Clear", 18.4), HINT);

        assert_eq!(
            view.body,
            ViewBody::Weather {
                location: "San Francisco".to_string(),
                condition: "Clear".to_string(),
                temperature: "18°".to_string(),
            }
        );
        assert_eq!(view.background, ImageAsset::Clear);
        assert_eq!(view.placeholder.as_deref(), Some(HINT));
    }

    #[test]
    fn shows_fixed_message_on_error() {
        let mut state = loaded("San Francisco", "Clear", 18.4);
        state.has_error = true;

        let view = render(&state, HINT);

        assert_eq!(view.body, ViewBody::Error(ERROR_MESSAGE));
        // Input stays available for another try
        assert!(view.placeholder.is_some());
        assert!(!view.to_string().contains("San Francisco"));
    }

    #[test]
    fn hides_input_while_loading() {
        let mut state = DisplayState::default();
        state.is_loading = true;

        let view = render(&state, HINT);

        assert_eq!(view.body, ViewBody::Loading);
        assert_eq!(view.placeholder, None);
    }

    #[test]
    fn empty_condition_uses_icon_background() {
        let view = render(&DisplayState::default(), HINT);
        assert_eq!(view.background, ImageAsset::Icon);
    }

    #[test]
    fn temperature_rounding() {
        assert_eq!(format_temperature(18.4), "18°");
        assert_eq!(format_temperature(18.5), "19°");
        assert_eq!(format_temperature(-2.5), "-2°");
        assert_eq!(format_temperature(-2.6), "-3°");
        assert_eq!(format_temperature(-0.4), "0°");
        assert_eq!(format_temperature(0.0), "0°");
        assert_eq!(format_temperature(0.49999999999999994), "0°");
        assert_eq!(format_temperature(-0.5), "0°");
    }

    #[test]
    fn non_finite_temperatures_are_spelled_out() {
        assert_eq!(format_temperature(f64::NAN), "NaN°");
        assert_eq!(format_temperature(f64::INFINITY), "Infinity°");
        assert_eq!(format_temperature(f64::NEG_INFINITY), "-Infinity°");
    }

    #[test]
    fn text_rendering_lists_fields_in_order() {
        let text = render(&loaded("Tokyo", "Rain", 21.3), HINT).to_string();

        assert_eq!(
            text,
            "[assets/light-rain.png]\nTokyo\nRain\n21°\nSearch any city > "
        );
    }
}
