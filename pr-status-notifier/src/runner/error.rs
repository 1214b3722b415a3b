//! Runner error types.

/// Errors that can occur while running the notifier.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Listing or enrichment failed.
    #[error(transparent)]
    Provider(#[from] crate::provider::ProviderError),

    /// Delivering a notification failed.
    #[error(transparent)]
    Notify(#[from] crate::notification::NotifyError),

    /// A run was triggered while another was still in progress.
    #[error("A run is already in progress")]
    AlreadyRunning,
}
