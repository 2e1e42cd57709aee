//! Core library for the spring weather check.
//!
//! This crate defines:
//! - Configuration read from the process environment
//! - The OpenWeather provider and the Slack webhook notifier
//! - The spring predicate and the fetch → evaluate → notify pipeline
//!
//! It is used by `spring-cli`, but the pieces can be driven on their own,
//! e.g. with a fake provider in tests.

pub mod config;
pub mod error;
pub mod model;
pub mod notifier;
pub mod pipeline;
pub mod provider;
pub mod season;

pub use config::Config;
pub use error::{Result, SpringError};
pub use model::{NotificationMessage, Outcome, WeatherSnapshot};
pub use notifier::{Notifier, SlackNotifier};
pub use provider::{OpenWeatherProvider, WeatherProvider, http_client, provider_from_config};
pub use season::{SpringCheck, is_spring};
