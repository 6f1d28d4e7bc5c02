use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::string_enum;

string_enum! {
    pub enum NotificationChannel { Email, Sms }
}

string_enum! {
    pub enum NotificationStatus { Pending, Sent, Failed }
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct NotificationDto {
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

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SendEmailDto {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub reservation_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SendSmsDto {
    pub recipient: String,
    pub body: String,
    pub reservation_id: Option<i32>,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct NotificationQuery {
    pub recipient: Option<String>,
    pub reservation_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "crate::model::api::default_per_page")]
    pub per_page: u64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaginatedNotificationsDto {
    pub notifications: Vec<NotificationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
