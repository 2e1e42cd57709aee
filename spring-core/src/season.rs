//! The spring predicate.
//!
//! Pure functions only: the caller samples the clock once and passes it in.

use chrono::{DateTime, Utc};

use crate::model::WeatherSnapshot;

/// Condition label that counts as clear sky.
pub const CLEAR_LABEL: &str = "Clear";

/// Warm means strictly above this, in °C.
pub const WARM_THRESHOLD_CELSIUS: f64 = 10.0;

/// Twelve hours. Day length must be strictly longer.
pub const MIN_DAY_LENGTH_SECONDS: i64 = 12 * 60 * 60;

/// Each term of the spring predicate, evaluated separately so callers can
/// report which ones failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpringCheck {
    pub is_clear: bool,
    pub is_warm: bool,
    pub is_long_day: bool,
    pub is_daytime: bool,
}

impl SpringCheck {
    pub fn evaluate(snapshot: &WeatherSnapshot, now: DateTime<Utc>) -> Self {
        let now = now.timestamp();

        Self {
            // An absent condition list is treated as "not clear".
            is_clear: snapshot.primary_condition.as_deref() == Some(CLEAR_LABEL),
            is_warm: snapshot.temperature_celsius > WARM_THRESHOLD_CELSIUS,
            is_long_day: snapshot.day_length_seconds() > MIN_DAY_LENGTH_SECONDS,
            is_daytime: snapshot.sunrise_unix_seconds < now && now < snapshot.sunset_unix_seconds,
        }
    }

    pub fn is_spring(&self) -> bool {
        self.is_clear && self.is_warm && self.is_long_day && self.is_daytime
    }
}

/// `true` when it is clear, warm, the day is longer than twelve hours and
/// `now` falls strictly between sunrise and sunset.
pub fn is_spring(snapshot: &WeatherSnapshot, now: DateTime<Utc>) -> bool {
    SpringCheck::evaluate(snapshot, now).is_spring()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SUNRISE: i64 = 1_700_000_000;
    const SUNSET: i64 = 1_700_050_000;
    const MIDDAY: i64 = 1_700_020_000;

    fn at(ts: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(ts, 0).single().expect("valid timestamp")
    }

    fn spring_day() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_celsius: 15.0,
            sunrise_unix_seconds: SUNRISE,
            sunset_unix_seconds: SUNSET,
            primary_condition: Some("Clear".to_string()),
        }
    }

    #[test]
    fn clear_warm_long_day_at_midday_is_spring() {
        assert!(is_spring(&spring_day(), at(MIDDAY)));
    }

    #[test]
    fn clouds_are_not_spring() {
        let snapshot = WeatherSnapshot {
            primary_condition: Some("Clouds".to_string()),
            ..spring_day()
        };

        let check = SpringCheck::evaluate(&snapshot, at(MIDDAY));
        assert!(!check.is_clear);
        assert!(check.is_warm && check.is_long_day && check.is_daytime);
        assert!(!check.is_spring());
    }

    #[test]
    fn label_match_is_case_sensitive() {
        let snapshot = WeatherSnapshot {
            primary_condition: Some("clear".to_string()),
            ..spring_day()
        };

        assert!(!is_spring(&snapshot, at(MIDDAY)));
    }

    #[test]
    fn missing_condition_fails_closed() {
        let snapshot = WeatherSnapshot {
            primary_condition: None,
            ..spring_day()
        };

        assert!(!is_spring(&snapshot, at(MIDDAY)));
    }

    #[test]
    fn exactly_ten_degrees_is_not_warm() {
        let snapshot = WeatherSnapshot {
            temperature_celsius: 10.0,
            ..spring_day()
        };

        assert!(!is_spring(&snapshot, at(MIDDAY)));

        let snapshot = WeatherSnapshot {
            temperature_celsius: 10.01,
            ..spring_day()
        };
        assert!(is_spring(&snapshot, at(MIDDAY)));
    }

    #[test]
    fn exactly_twelve_hours_is_not_long_enough() {
        let snapshot = WeatherSnapshot {
            sunset_unix_seconds: SUNRISE + MIN_DAY_LENGTH_SECONDS,
            ..spring_day()
        };
        assert!(!is_spring(&snapshot, at(MIDDAY)));

        let snapshot = WeatherSnapshot {
            sunset_unix_seconds: SUNRISE + MIN_DAY_LENGTH_SECONDS + 1,
            ..spring_day()
        };
        assert!(is_spring(&snapshot, at(MIDDAY)));
    }

    #[test]
    fn daylight_window_is_open_at_both_ends() {
        let snapshot = spring_day();

        assert!(!is_spring(&snapshot, at(SUNRISE)));
        assert!(!is_spring(&snapshot, at(SUNSET)));
        assert!(is_spring(&snapshot, at(SUNRISE + 1)));
        assert!(is_spring(&snapshot, at(SUNSET - 1)));
    }

    #[test]
    fn night_is_not_spring() {
        let snapshot = spring_day();

        assert!(!is_spring(&snapshot, at(SUNRISE - 3600)));
        assert!(!is_spring(&snapshot, at(SUNSET + 3600)));
    }

    #[test]
    fn result_only_depends_on_inputs() {
        let snapshot = spring_day();
        let first = SpringCheck::evaluate(&snapshot, at(MIDDAY));

        for _ in 0..10 {
            assert_eq!(SpringCheck::evaluate(&snapshot, at(MIDDAY)), first);
        }
    }

    #[test]
    fn extreme_sunrise_and_sunset_do_not_overflow() {
        let snapshot = WeatherSnapshot {
            sunrise_unix_seconds: -9_000_000_000_000_000_000,
            sunset_unix_seconds: 9_000_000_000_000_000_000,
            ..spring_day()
        };

        let check = SpringCheck::evaluate(&snapshot, at(MIDDAY));
        assert!(check.is_long_day);
        assert!(check.is_daytime);
        assert!(check.is_spring());

        let reversed = WeatherSnapshot {
            sunrise_unix_seconds: i64::MAX,
            sunset_unix_seconds: i64::MIN,
            ..spring_day()
        };
        assert!(!is_spring(&reversed, at(MIDDAY)));
    }

    #[test]
    fn zeroed_snapshot_is_not_spring() {
        let snapshot = WeatherSnapshot {
            temperature_celsius: 0.0,
            sunrise_unix_seconds: 0,
            sunset_unix_seconds: 0,
            primary_condition: None,
        };

        let check = SpringCheck::evaluate(&snapshot, at(MIDDAY));
        assert_eq!(
            check,
            SpringCheck {
                is_clear: false,
                is_warm: false,
                is_long_day: false,
                is_daytime: false,
            }
        );
    }
}
