//! Notifier settings.

use super::ConfigError;
use crate::schedule::parse_schedule;
use cron::Schedule;
use serde::Deserialize;
use url::Url;

/// Settings as read from a config file or the command line.
///
/// Every field is optional here; [`NotifierConfig::validate`] checks that
/// the required ones are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NotifierConfig {
    /// Organization whose pull requests are scanned.
    pub organization: Option<String>,

    /// Chat channel messages are addressed to.
    pub channel: Option<String>,

    /// Incoming webhook messages are posted to.
    pub webhook_url: Option<String>,

    /// Tracker base URL, ticket identifiers are appended to it.
    pub tracker_url: Option<String>,

    /// Cron expression for recurring runs (optional).
    pub schedule: Option<String>,

    /// GitHub API base URL (optional, for GitHub Enterprise).
    pub github_api_url: Option<String>,
}

/// Validated settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub organization: String,
    pub channel: String,
    pub webhook_url: Url,
    pub tracker_url: String,
    pub schedule: Option<Schedule>,
    pub github_api_url: Option<Url>,
}

impl NotifierConfig {
    /// Overlays `overrides` on top of `self`; values present in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: NotifierConfig) -> Self {
        Self {
            organization: overrides.organization.or(self.organization),
            channel: overrides.channel.or(self.channel),
            webhook_url: overrides.webhook_url.or(self.webhook_url),
            tracker_url: overrides.tracker_url.or(self.tracker_url),
            schedule: overrides.schedule.or(self.schedule),
            github_api_url: overrides.github_api_url.or(self.github_api_url),
        }
    }

    /// Checks required values and parses URLs and the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] for absent or blank required
    /// settings, [`ConfigError::ValidationError`] for malformed URLs and
    /// [`ConfigError::InvalidSchedule`] for a bad cron expression.
    pub fn validate(self) -> Result<Settings, ConfigError> {
        let organization = required("organization", self.organization)?;
        let channel = required("channel", self.channel)?;
        let webhook_url = parse_url("webhook-url", &required("webhook-url", self.webhook_url)?)?;
        let tracker_url = required("tracker-url", self.tracker_url)?;
        parse_url("tracker-url", &tracker_url)?;

        let schedule = optional(self.schedule)
            .map(|expression| parse_schedule(&expression))
            .transpose()?;
        let github_api_url = optional(self.github_api_url)
            .map(|url| parse_url("github-api-url", &url))
            .transpose()?;

        Ok(Settings {
            organization,
            channel,
            webhook_url,
            tracker_url,
            schedule,
            github_api_url,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    optional(value).ok_or(ConfigError::MissingValue { field })
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::ValidationError {
        field,
        message: format!("'{value}' is not a valid URL: {e}"),
    })
}
