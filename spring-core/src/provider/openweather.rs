use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::{Result, SpringError, truncate_body},
    model::WeatherSnapshot,
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
    location: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("location", &self.location)
            .finish()
    }
}

impl OpenWeatherProvider {
    /// `location` is the provider's `q` value, e.g. "Oslo,no".
    pub fn new(base_url: String, api_key: String, location: String, http: Client) -> Self {
        Self {
            base_url,
            api_key,
            location,
            http,
        }
    }

    #[instrument(skip(self), fields(location = %self.location))]
    async fn fetch_current(&self) -> Result<String> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", self.location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|source| SpringError::Request {
                context: "Failed to send request to OpenWeather (current weather)",
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| SpringError::Request {
            context: "Failed to read OpenWeather current response body",
            source,
        })?;

        debug!(%status, bytes = body.len(), "OpenWeather responded");

        if !status.is_success() {
            return Err(SpringError::Status {
                context: "OpenWeather current request",
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

// Only the fields the spring check reads. Everything else in the payload is
// ignored. Anything missing or `null` falls back to zero / empty.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    temp: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    main: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    main: Option<OwMain>,
    sys: Option<OwSys>,
    weather: Option<Vec<OwWeather>>,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(parsed: OwCurrentResponse) -> Self {
        let main = parsed.main.unwrap_or_default();
        let sys = parsed.sys.unwrap_or_default();
        let primary_condition = parsed
            .weather
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|w| w.main);

        WeatherSnapshot {
            temperature_celsius: main.temp.unwrap_or_default(),
            sunrise_unix_seconds: sys.sunrise.unwrap_or_default(),
            sunset_unix_seconds: sys.sunset.unwrap_or_default(),
            primary_condition,
        }
    }
}

/// Parse a `/data/2.5/weather` response body.
pub fn parse_current(body: &str) -> Result<WeatherSnapshot> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(SpringError::Parse)?;
    Ok(parsed.into())
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherSnapshot> {
        let body = self.fetch_current().await?;
        parse_current(&body)
    }
}
