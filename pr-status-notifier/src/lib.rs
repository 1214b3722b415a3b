#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod classify;
pub mod config;
pub mod enrichment;
pub mod notification;
pub mod provider;
pub mod records;
pub mod runner;
pub mod schedule;
pub mod summary;
pub mod tickets;

pub use classify::{classify, Classification, StatusColor, STALE_AFTER_DAYS};
pub use config::{load_config, ConfigError, NotifierConfig, Settings};
pub use enrichment::{EnrichmentFetcher, ProfileCache};
pub use notification::{
    format_footer, format_message, Attachment, ChannelMessage, DryRunSink, NotificationSink,
    NotifyError, WebhookSink,
};
pub use provider::{GitHubProvider, ProviderError, PullRequestProvider};
pub use records::{
    Comment, ParseError, PullRequestDetail, PullRequestSummary, Review, UserProfile,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use schedule::{next_fire_after, parse_schedule, run_on_schedule};
pub use summary::{ProcessingResult, RunSummary};
pub use tickets::{extract_ticket_link, TicketLink};
