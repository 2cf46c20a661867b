//! Shared application state.
//!
//! The weather widget is the only writer. Views read the current theme and
//! report, or subscribe to theme changes.

use crate::theme::WeatherTheme;
use crate::weather::{WeatherReport, WeatherStatus};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;

#[derive(Debug, Default)]
pub struct AppState {
    weather: WeatherStatus,
    theme: WeatherTheme,
    subscribers: Vec<Sender<WeatherTheme>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new widget status.
    ///
    /// The theme changes only when fresh weather arrives; a failed lookup
    /// keeps whatever theme was active. Subscribers are notified on every
    /// `Ready` publish and disconnected receivers are dropped.
    pub fn publish(&mut self, status: WeatherStatus) {
        if let WeatherStatus::Ready(report) = &status {
            self.theme = report.theme();
            let theme = self.theme;
            self.subscribers.retain(|tx| tx.send(theme).is_ok());
            debug!(
                "Published theme {} to {} subscribers",
                theme,
                self.subscribers.len()
            );
        }
        self.weather = status;
    }

    /// Receives every theme published after this call.
    pub fn subscribe(&mut self) -> Receiver<WeatherTheme> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn theme(&self) -> WeatherTheme {
        self.theme
    }

    pub fn weather(&self) -> &WeatherStatus {
        &self.weather
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        self.weather.report()
    }
}
