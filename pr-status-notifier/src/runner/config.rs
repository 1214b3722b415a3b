//! Runner configuration.

/// Settings the orchestrator needs for every run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Channel messages are addressed to.
    channel: String,
    /// Tracker base URL ticket identifiers are appended to.
    tracker_url: String,
    /// Whether messages are printed instead of posted.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(channel: impl Into<String>, tracker_url: impl Into<String>, dry_run: bool) -> Self {
        Self {
            channel: channel.into(),
            tracker_url: tracker_url.into(),
            dry_run,
        }
    }

    /// Returns the target channel.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns the tracker base URL.
    pub fn tracker_url(&self) -> &str {
        &self.tracker_url
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
