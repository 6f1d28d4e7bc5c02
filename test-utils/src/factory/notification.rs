//! Notification factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating stored notifications. Defaults to a pending e-mail.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    channel: String,
    recipient: String,
    subject: Option<String>,
    body: String,
    reservation_id: Option<i32>,
    status: String,
}

impl<'a> NotificationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            channel: "Email".to_string(),
            recipient: format!("customer{}@example.de", id),
            subject: Some(format!("Notification {}", id)),
            body: "Test notification body".to_string(),
            reservation_id: None,
            status: "Pending".to_string(),
        }
    }

    /// Switches to an SMS to the given phone number.
    pub fn sms(mut self, phone: impl Into<String>) -> Self {
        self.channel = "Sms".to_string();
        self.recipient = phone.into();
        self.subject = None;
        self
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn reservation_id(mut self, reservation_id: i32) -> Self {
        self.reservation_id = Some(reservation_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        let sent_at = (self.status == "Sent").then(Utc::now);

        entity::notification::ActiveModel {
            channel: ActiveValue::Set(self.channel),
            recipient: ActiveValue::Set(self.recipient),
            subject: ActiveValue::Set(self.subject),
            body: ActiveValue::Set(self.body),
            reservation_id: ActiveValue::Set(self.reservation_id),
            status: ActiveValue::Set(self.status),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            sent_at: ActiveValue::Set(sent_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending e-mail notification.
pub async fn create_notification(
    db: &DatabaseConnection,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db).build().await
}
