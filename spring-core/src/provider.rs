use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    Config, WeatherSnapshot,
    error::{Result, SpringError},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

const USER_AGENT: &str = concat!("spring-check/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for the configured city.
    async fn current_weather(&self) -> Result<WeatherSnapshot>;
}

/// HTTP client shared by the provider and the notifier for one run.
///
/// Every request gets the configured whole-request timeout instead of the
/// transport default.
pub fn http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.http_timeout)
        .build()
        .map_err(|source| SpringError::Request {
            context: "Failed to build HTTP client",
            source,
        })
}

/// Construct the weather provider described by `config`.
pub fn provider_from_config(config: &Config, http: Client) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(
        config.base_url.clone(),
        config.api_key.clone(),
        config.location_query(),
        http,
    ))
}
