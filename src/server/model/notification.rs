//! Notification domain model and send parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::notification::{
        NotificationChannel, NotificationDto, NotificationQuery, NotificationStatus,
        PaginatedNotificationsDto, SendEmailDto, SendSmsDto,
    },
    server::{
        error::domain::DomainError,
        model::{
            clamp_per_page, parse_column,
            value::{required_text, Email, PhoneNumber},
            Page,
        },
    },
};

pub const MAX_SMS_LENGTH: usize = 160;

const MAX_SUBJECT_LENGTH: usize = 200;
const MAX_EMAIL_BODY_LENGTH: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub channel: NotificationChannel,
    pub recipient: String,
    pub subject: Option<String>,
    pub body: String,
    pub reservation_id: Option<i32>,
    pub status: NotificationStatus,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, DbErr> {
        Ok(Self {
            channel: parse_column("notification.channel", &entity.channel)?,
            status: parse_column("notification.status", &entity.status)?,
            id: entity.id,
            recipient: entity.recipient,
            subject: entity.subject,
            body: entity.body,
            reservation_id: entity.reservation_id,
            error: entity.error,
            created_at: entity.created_at,
            sent_at: entity.sent_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            channel: self.channel,
            recipient: self.recipient,
            subject: self.subject,
            body: self.body,
            reservation_id: self.reservation_id,
            status: self.status,
            error: self.error,
            created_at: self.created_at,
            sent_at: self.sent_at,
        }
    }
}

/// A validated message waiting to be stored and dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub channel: NotificationChannel,
    pub recipient: String,
    pub subject: Option<String>,
    pub body: String,
    pub reservation_id: Option<i32>,
}

impl OutgoingMessage {
    pub fn email(
        recipient: &str,
        subject: &str,
        body: &str,
        reservation_id: Option<i32>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            channel: NotificationChannel::Email,
            recipient: Email::parse(recipient)?.into_inner(),
            subject: Some(required_text("Subject", subject, MAX_SUBJECT_LENGTH)?),
            body: required_text("Body", body, MAX_EMAIL_BODY_LENGTH)?,
            reservation_id,
        })
    }

    pub fn sms(recipient: &str, body: &str, reservation_id: Option<i32>) -> Result<Self, DomainError> {
        Ok(Self {
            channel: NotificationChannel::Sms,
            recipient: PhoneNumber::parse(recipient)?.into_inner(),
            subject: None,
            body: required_text("SMS body", body, MAX_SMS_LENGTH)?,
            reservation_id,
        })
    }

    pub fn from_email_dto(dto: SendEmailDto) -> Result<Self, DomainError> {
        Self::email(&dto.recipient, &dto.subject, &dto.body, dto.reservation_id)
    }

    pub fn from_sms_dto(dto: SendSmsDto) -> Result<Self, DomainError> {
        Self::sms(&dto.recipient, &dto.body, dto.reservation_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationSearchParams {
    pub recipient: Option<String>,
    pub reservation_id: Option<i32>,
    pub page: u64,
    pub per_page: u64,
}

impl NotificationSearchParams {
    pub fn from_query(query: NotificationQuery) -> Self {
        Self {
            recipient: query
                .recipient
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            reservation_id: query.reservation_id,
            page: query.page,
            per_page: clamp_per_page(query.per_page),
        }
    }
}

impl Page<Notification> {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self.items.into_iter().map(Notification::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
