pub mod dispatcher;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notification::{Notification, NotificationSearchParams, OutgoingMessage},
        Page,
    },
    service::notification::dispatcher::NotificationDispatcher,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    dispatcher: &'a NotificationDispatcher,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, dispatcher: &'a NotificationDispatcher) -> Self {
        Self { db, dispatcher }
    }

    /// Stores a message as pending, dispatches it and records the outcome
    ///
    /// Delivery problems end up in the notification's `Failed` status and `error`
    /// text; only database errors are returned.
    pub async fn send(&self, message: OutgoingMessage) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo.create(message).await?;

        let notification = match self.dispatcher.dispatch(&notification).await {
            Ok(()) => repo.mark_sent(notification.id).await?,
            Err(e) => {
                tracing::warn!(
                    "Failed to deliver notification {} to {}: {}",
                    notification.id,
                    notification.recipient,
                    e
                );
                repo.mark_failed(notification.id, e.to_string()).await?
            }
        };

        Ok(notification)
    }

    /// Sends a message on behalf of another operation, never failing the caller
    pub async fn send_quietly(&self, message: OutgoingMessage) {
        let channel = message.channel;
        let recipient = message.recipient.clone();

        if let Err(e) = self.send(message).await {
            tracing::warn!(
                "Could not record {} notification to {}: {}",
                channel,
                recipient,
                e
            );
        }
    }

    /// Gets a notification by ID
    pub async fn get(&self, id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Lists notifications, newest first
    pub async fn list(
        &self,
        params: &NotificationSearchParams,
    ) -> Result<Page<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_paginated(params)
            .await?)
    }
}
