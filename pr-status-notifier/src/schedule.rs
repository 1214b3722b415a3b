//! Recurring runs driven by a cron expression.

use crate::config::ConfigError;
use crate::notification::NotificationSink;
use crate::provider::PullRequestProvider;
use crate::runner::{Runner, RunnerError};
use crate::summary::RunSummary;
use chrono::{DateTime, Utc};
use cron::Schedule;
use std::str::FromStr;
use tracing::{error, info, warn};

/// Parses a cron expression.
///
/// Accepts the five-field crontab form (minute precision) as well as the
/// six- and seven-field forms with seconds (and years).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSchedule`] if the expression doesn't parse.
pub fn parse_schedule(expression: &str) -> Result<Schedule, ConfigError> {
    let expression = expression.trim();
    let normalized = if expression.split_whitespace().count() == 5 {
        format!("0 {expression}")
    } else {
        expression.to_string()
    };

    Schedule::from_str(&normalized).map_err(|e| ConfigError::InvalidSchedule {
        expression: expression.to_string(),
        source: e,
    })
}

/// Returns the first fire time strictly after `after`.
#[must_use]
pub fn next_fire_after(schedule: &Schedule, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    schedule.after(&after).next()
}

/// Runs `runner` at every fire time of `schedule` until it has none left.
///
/// A failed run is logged and the next fire time is awaited; a fire time
/// reached while a run is still in progress is skipped.
pub async fn run_on_schedule<P, S, F>(runner: &Runner<P, S>, schedule: &Schedule, mut on_complete: F)
where
    P: PullRequestProvider + Sync,
    S: NotificationSink + Sync,
    F: FnMut(&RunSummary),
{
    loop {
        let now = Utc::now();
        let Some(next) = next_fire_after(schedule, now) else {
            warn!("Schedule has no upcoming fire times, stopping");
            return;
        };

        info!(next = %next, "Waiting for next scheduled run");
        tokio::time::sleep((next - now).to_std().unwrap_or_default()).await;

        match runner.run_once().await {
            Ok(summary) => on_complete(&summary),
            Err(RunnerError::AlreadyRunning) => warn!("Previous run still in progress, skipping"),
            Err(e) => error!(error = %e, "Scheduled run failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_crontab_form() {
        let schedule = parse_schedule("30 9 * * Mon-Fri").unwrap();
        // Saturday
        let after = Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 0).unwrap();

        assert_eq!(
            next_fire_after(&schedule, after),
            Some(Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn accepts_form_with_seconds() {
        let schedule = parse_schedule("15 0 * * * *").unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 0).unwrap();

        assert_eq!(
            next_fire_after(&schedule, after),
            Some(Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 15).unwrap())
        );
    }

    #[test]
    fn next_fire_is_strictly_after() {
        let schedule = parse_schedule("0 * * * *").unwrap();
        let on_the_hour = Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 0).unwrap();

        assert_eq!(
            next_fire_after(&schedule, on_the_hour),
            Some(Utc.with_ymd_and_hms(2024, 6, 8, 13, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_schedule("not a schedule"),
            Err(ConfigError::InvalidSchedule { .. })
        ));
    }
}
