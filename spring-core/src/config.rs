use std::time::Duration;

use crate::error::{Result, SpringError};

pub const API_KEY_VAR: &str = "OPENWEATHERMAP_API_KEY";
pub const WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";
pub const CITY_VAR: &str = "SPRING_CITY";
pub const COUNTRY_CODE_VAR: &str = "SPRING_COUNTRY_CODE";
pub const BASE_URL_VAR: &str = "OPENWEATHERMAP_BASE_URL";
pub const TIMEOUT_VAR: &str = "SPRING_HTTP_TIMEOUT_SECS";

pub const DEFAULT_CITY: &str = "Oslo";
pub const DEFAULT_COUNTRY_CODE: &str = "no";
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything a single run needs, read once from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,

    /// Captured up front but only demanded when a notification goes out,
    /// see [`Config::require_webhook_url`].
    pub webhook_url: Option<String>,

    pub city: String,
    pub country_code: String,

    /// Provider host without a trailing slash, e.g. "http://api.openweathermap.org".
    pub base_url: String,

    pub http_timeout: Duration,
}

impl Config {
    /// Build the configuration from the real process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset. Fails if the API key is missing or
    /// the timeout is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(SpringError::MissingConfig { var: API_KEY_VAR })?;

        let http_timeout = match get(TIMEOUT_VAR) {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let base_url = get(BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            webhook_url: get(WEBHOOK_URL_VAR),
            city: get(CITY_VAR).unwrap_or_else(|| DEFAULT_CITY.to_string()),
            country_code: get(COUNTRY_CODE_VAR).unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string()),
            base_url,
            http_timeout,
        })
    }

    /// Webhook destination, or a configuration error if it was never set.
    pub fn require_webhook_url(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or(SpringError::MissingConfig { var: WEBHOOK_URL_VAR })
    }

    /// The `q` parameter the provider expects, e.g. "Oslo,no".
    pub fn location_query(&self) -> String {
        format!("{},{}", self.city, self.country_code)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.parse().map_err(|_| SpringError::InvalidConfig {
        var: TIMEOUT_VAR,
        reason: format!("expected a whole number of seconds, got '{raw}'"),
    })?;

    if secs == 0 {
        return Err(SpringError::InvalidConfig {
            var: TIMEOUT_VAR,
            reason: "timeout must be at least one second".to_string(),
        });
    }

    Ok(Duration::from_secs(secs))
}
