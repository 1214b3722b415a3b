//! Notification sinks.

use super::{ChannelMessage, NotifyError};
use std::future::Future;
use tracing::{debug, info};
use url::Url;

/// Destination for formatted channel messages.
pub trait NotificationSink {
    /// Delivers one message.
    fn send(&self, message: &ChannelMessage) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Posts messages as JSON to an incoming chat webhook.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    url: Url,
}

impl WebhookSink {
    /// Creates a sink posting to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: Url) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pr-status-notifier/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url })
    }
}

impl NotificationSink for WebhookSink {
    async fn send(&self, message: &ChannelMessage) -> Result<(), NotifyError> {
        debug!(channel = %message.channel, "Posting message to webhook");
        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Prints messages instead of posting them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSink;

impl NotificationSink for DryRunSink {
    async fn send(&self, message: &ChannelMessage) -> Result<(), NotifyError> {
        let payload = serde_json::to_string_pretty(message)?;
        info!(channel = %message.channel, "[DRY RUN] Would post message");
        println!("{payload}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn message() -> ChannelMessage {
        ChannelMessage {
            channel: "#reviews".to_string(),
            attachments: vec![],
        }
    }

    /// Answers a single request with `status_line` and `body`, returning the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let url = Url::parse(&format!("http://{address}/services/T0/B0/X")).unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request
        });
        (url, handle)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = stream.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&request);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(request).unwrap()
    }

    #[tokio::test]
    async fn webhook_posts_json_and_accepts_success() {
        let (url, server) = serve_once("200 OK", "ok").await;
        let sink = WebhookSink::new(url).unwrap();

        sink.send(&message()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /services/T0/B0/X HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/json"));
        assert!(request.ends_with(r##"{"channel":"#reviews","attachments":[]}"##));
    }

    #[tokio::test]
    async fn webhook_rejection_carries_status_and_body() {
        let (url, server) = serve_once("404 Not Found", "channel_not_found").await;
        let sink = WebhookSink::new(url).unwrap();

        let result = sink.send(&message()).await;

        assert!(matches!(
            result,
            Err(NotifyError::Rejected { status: 404, ref body }) if body == "channel_not_found"
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn dry_run_accepts_messages() {
        assert!(DryRunSink.send(&message()).await.is_ok());
    }
}
