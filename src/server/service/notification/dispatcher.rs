//! Outbound delivery of stored notifications.
//!
//! With a webhook configured, every notification is POSTed as JSON to that URL and any
//! non-2xx response counts as a failed delivery. Without one, messages are only written
//! to the log, which is what development and tests use.

use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::{model::notification::NotificationChannel, server::model::notification::Notification};

#[derive(Clone, Debug)]
enum Transport {
    Webhook { client: Client, url: Url },
    Log,
}

/// Hands notifications to the configured transport.
#[derive(Clone, Debug)]
pub struct NotificationDispatcher {
    transport: Transport,
}

#[derive(Serialize)]
struct DeliveryRequest<'a> {
    notification_id: i32,
    channel: NotificationChannel,
    recipient: &'a str,
    subject: Option<&'a str>,
    body: &'a str,
    reservation_id: Option<i32>,
}

impl NotificationDispatcher {
    /// Delivers through an HTTP webhook.
    pub fn webhook(client: Client, url: Url) -> Self {
        Self {
            transport: Transport::Webhook { client, url },
        }
    }

    /// Logs messages instead of delivering them.
    pub fn log_only() -> Self {
        Self {
            transport: Transport::Log,
        }
    }

    /// Delivers one notification.
    ///
    /// # Returns
    /// - `Ok(())` - Delivered, or logged when no webhook is configured
    /// - `Err(reqwest::Error)` - Webhook unreachable or answered with an error status
    pub async fn dispatch(&self, notification: &Notification) -> Result<(), reqwest::Error> {
        match &self.transport {
            Transport::Webhook { client, url } => {
                client
                    .post(url.clone())
                    .json(&DeliveryRequest {
                        notification_id: notification.id,
                        channel: notification.channel,
                        recipient: &notification.recipient,
                        subject: notification.subject.as_deref(),
                        body: &notification.body,
                        reservation_id: notification.reservation_id,
                    })
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(())
            }
            Transport::Log => {
                tracing::info!(
                    notification_id = notification.id,
                    channel = %notification.channel,
                    recipient = %notification.recipient,
                    subject = notification.subject.as_deref().unwrap_or(""),
                    "{}",
                    notification.body
                );

                Ok(())
            }
        }
    }
}
