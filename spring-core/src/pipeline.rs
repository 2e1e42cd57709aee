//! fetch → evaluate → notify, one step after the other.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{
    Config,
    error::Result,
    model::{NotificationMessage, Outcome},
    notifier::Notifier,
    provider::WeatherProvider,
    season::SpringCheck,
};

/// Run one spring check against the given provider and notifier.
///
/// The webhook URL is only looked up once the predicate holds, so a missing
/// webhook is not an error on a cloudy day.
pub async fn run(
    config: &Config,
    provider: &dyn WeatherProvider,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<Outcome> {
    let snapshot = provider.current_weather().await?;

    if snapshot.primary_condition.is_none() {
        warn!(city = %config.city, "provider returned no weather conditions; treating as not clear");
    }

    let check = SpringCheck::evaluate(&snapshot, now);
    info!(
        city = %config.city,
        temperature_c = snapshot.temperature_celsius,
        condition = snapshot.primary_condition.as_deref().unwrap_or("<none>"),
        day_length_s = snapshot.day_length_seconds(),
        is_clear = check.is_clear,
        is_warm = check.is_warm,
        is_long_day = check.is_long_day,
        is_daytime = check.is_daytime,
        "evaluated spring conditions"
    );

    if !check.is_spring() {
        return Ok(Outcome::NotSpringYet);
    }

    let webhook_url = config.require_webhook_url()?;
    let message = NotificationMessage::springtime_in(&config.city);
    notifier.notify(webhook_url, &message).await?;

    info!(city = %config.city, "spring notification delivered");
    Ok(Outcome::NotificationSent)
}
