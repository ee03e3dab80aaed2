//! Turns submitted city names into [`DisplayState`] transitions.
//!
//! The controller is owned by one thread. Lookups run on the tokio runtime
//! and report back over an mpsc channel; results are applied only when that
//! thread calls [`QueryController::poll_channel`] or
//! [`QueryController::wait_for_message`], so state changes never interleave.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use skycast_core::{AppError, Config};
use skycast_weather::{OpenMeteoResolver, ResolverSettings, TemperatureUnit, WeatherResolver};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::bridge;
use crate::models::display_state::DisplayState;
use crate::services::{request_weather_fetch, WeatherServiceMessage};

#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// City looked up by [`QueryController::start`]
    pub default_city: String,
    /// Ignore completions from superseded lookups
    pub discard_stale_results: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            default_city: "San Francisco".to_string(),
            discard_stale_results: true,
        }
    }
}

pub struct QueryController {
    state: DisplayState,
    /// Generation of the most recently dispatched lookup; 0 before the first
    generation: u64,
    options: ControllerOptions,
    resolver: Arc<dyn WeatherResolver>,
    runtime: Option<Handle>,
    tx: Sender<WeatherServiceMessage>,
    rx: Receiver<WeatherServiceMessage>,
    notifier: watch::Sender<DisplayState>,
}

impl QueryController {
    /// `runtime` of `None` falls back to the shared runtime in [`bridge`].
    pub fn new(
        resolver: Arc<dyn WeatherResolver>,
        runtime: Option<Handle>,
        options: ControllerOptions,
    ) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        let (notifier, _) = watch::channel(DisplayState::default());

        Self {
            state: DisplayState::default(),
            generation: 0,
            options,
            resolver,
            runtime,
            tx,
            rx,
            notifier,
        }
    }

    /// Build a controller backed by Open-Meteo using the loaded config.
    pub fn from_config(config: &Config, runtime: Option<Handle>) -> Result<Self> {
        let weather = &config.weather;
        let settings = ResolverSettings {
            geocoding_url: weather.geocoding_url.clone(),
            forecast_url: weather.forecast_url.clone(),
            unit: match weather.temperature_unit {
                skycast_core::TemperatureUnit::Auto => TemperatureUnit::Auto,
                skycast_core::TemperatureUnit::Celsius => TemperatureUnit::Celsius,
                skycast_core::TemperatureUnit::Fahrenheit => TemperatureUnit::Fahrenheit,
            },
            timeout: Duration::from_secs(weather.request_timeout_secs),
        };
        let resolver =
            OpenMeteoResolver::new(&settings).context("Failed to create weather resolver")?;

        Ok(Self::new(
            Arc::new(resolver),
            runtime,
            ControllerOptions {
                default_city: weather.default_city.clone(),
                discard_stale_results: weather.discard_stale_results,
            },
        ))
    }

    /// Issue the startup lookup for the default city.
    pub fn start(&mut self) -> bool {
        let city = self.options.default_city.clone();
        tracing::info!("Loading weather for default city '{}'", city);
        self.submit_location_query(&city)
    }

    /// Begin a lookup for `city_name`.
    ///
    /// Blank input is ignored. Returns whether a lookup was dispatched.
    pub fn submit_location_query(&mut self, city_name: &str) -> bool {
        if city_name.trim().is_empty() {
            tracing::debug!("Ignoring blank location query");
            return false;
        }

        self.generation += 1;
        self.state.begin_request();
        self.notify();

        tracing::info!("Lookup #{} for '{}'", self.generation, city_name);
        let runtime = self.runtime.clone().or_else(bridge::get_runtime);
        request_weather_fetch(
            &self.tx,
            runtime,
            self.resolver.clone(),
            self.generation,
            city_name.to_string(),
        );
        true
    }

    /// Apply every completed lookup without blocking.
    /// Returns whether the display state changed.
    pub fn poll_channel(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.rx.try_recv() {
            changed |= self.handle_message(msg);
        }
        changed
    }

    /// Block up to `timeout` for one completed lookup and apply it.
    /// Returns whether a completion was received, even if it was discarded as stale.
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.handle_message(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Receive a fresh copy of the state after every transition.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.notifier.subscribe()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn handle_message(&mut self, msg: WeatherServiceMessage) -> bool {
        match msg {
            WeatherServiceMessage::FetchDone { generation, result } => {
                if self.options.discard_stale_results && generation != self.generation {
                    tracing::debug!(
                        "Discarding lookup #{} (latest is #{})",
                        generation,
                        self.generation
                    );
                    return false;
                }

                match result {
                    Ok(data) => {
                        tracing::info!(
                            "Lookup #{} resolved to {} ({})",
                            generation,
                            data.location,
                            data.weather
                        );
                        self.state.apply_success(data);
                    }
                    Err(e) => {
                        let app_error = AppError::from(e);
                        tracing::warn!(
                            "Lookup #{} failed: {} ({})",
                            generation,
                            app_error,
                            app_error.user_message()
                        );
                        self.state.apply_failure();
                    }
                }
                self.notify();
                true
            }
        }
    }

    fn notify(&self) {
        self.notifier.send_replace(self.state.clone());
    }
}
