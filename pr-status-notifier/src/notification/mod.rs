//! Channel message formatting and delivery.

mod error;
mod message;
mod sink;

pub use error::NotifyError;
pub use message::{format_footer, format_message, Attachment, ChannelMessage};
pub use sink::{DryRunSink, NotificationSink, WebhookSink};
