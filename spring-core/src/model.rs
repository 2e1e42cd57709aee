use serde::{Deserialize, Serialize};

use crate::error::{Result, SpringError};

/// Current conditions for one city, flattened out of the provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub sunrise_unix_seconds: i64,
    pub sunset_unix_seconds: i64,

    /// Label of the first condition the provider reported, e.g. "Clear".
    /// `None` when the provider sent no conditions at all.
    pub primary_condition: Option<String>,
}

impl WeatherSnapshot {
    /// Saturates instead of overflowing on absurd provider timestamps.
    pub fn day_length_seconds(&self) -> i64 {
        self.sunset_unix_seconds.saturating_sub(self.sunrise_unix_seconds)
    }
}

/// Body of a Slack-style incoming webhook message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub text: String,
}

impl NotificationMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Announcement for a city where spring has arrived.
    pub fn springtime_in(city: &str) -> Self {
        Self::new(format!("It's springtime in {city}!"))
    }

    /// JSON value sent as the `payload` form field.
    pub fn to_payload(&self) -> Result<String> {
        serde_json::to_string(self).map_err(SpringError::Encode)
    }
}

/// How a run ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotificationSent,
    NotSpringYet,
}

impl Outcome {
    /// The single status line printed on stdout.
    pub fn status_line(&self) -> &'static str {
        match self {
            Outcome::NotificationSent => "Notification sent to Slack!",
            Outcome::NotSpringYet => "It's not spring yet.",
        }
    }
}
