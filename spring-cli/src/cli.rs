use anyhow::Context;
use chrono::Utc;
use tracing::info;

use spring_core::{Config, Outcome, SlackNotifier, http_client, pipeline, provider_from_config};

/// One complete spring check: read configuration, fetch, evaluate, notify.
///
/// Configuration is read before any network call, so a missing API key never
/// reaches the provider.
pub async fn run() -> anyhow::Result<Outcome> {
    let config = Config::from_env().context("Invalid configuration")?;
    info!(
        city = %config.city,
        country = %config.country_code,
        timeout_s = config.http_timeout.as_secs(),
        "checking for spring"
    );

    let http = http_client(&config)?;
    let provider = provider_from_config(&config, http.clone());
    let notifier = SlackNotifier::new(http);

    let outcome = pipeline::run(&config, provider.as_ref(), &notifier, Utc::now())
        .await
        .with_context(|| format!("Spring check for {} failed", config.city))?;

    Ok(outcome)
}
