use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::notification::NotificationStatus,
    server::model::{
        notification::{Notification, NotificationSearchParams, OutgoingMessage},
        Page,
    },
};

pub struct NotificationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores an outgoing message with status `Pending`
    pub async fn create(&self, message: OutgoingMessage) -> Result<Notification, DbErr> {
        let notification = entity::notification::ActiveModel {
            channel: ActiveValue::Set(message.channel.to_string()),
            recipient: ActiveValue::Set(message.recipient),
            subject: ActiveValue::Set(message.subject),
            body: ActiveValue::Set(message.body),
            reservation_id: ActiveValue::Set(message.reservation_id),
            status: ActiveValue::Set(NotificationStatus::Pending.to_string()),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            sent_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Notification::from_entity(notification)
    }

    /// Gets a notification by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
            .map(Notification::from_entity)
            .transpose()
    }

    /// Gets notifications, newest first
    pub async fn get_paginated(
        &self,
        params: &NotificationSearchParams,
    ) -> Result<Page<Notification>, DbErr> {
        use entity::notification::Column;

        let mut query = entity::prelude::Notification::find();
        if let Some(recipient) = &params.recipient {
            query = query.filter(Column::Recipient.eq(recipient.as_str()));
        }
        if let Some(reservation_id) = params.reservation_id {
            query = query.filter(Column::ReservationId.eq(reservation_id));
        }

        let paginator = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator
            .fetch_page(params.page)
            .await?
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(notifications, total, params.page, params.per_page))
    }

    /// Marks a notification as delivered
    pub async fn mark_sent(&self, id: i32) -> Result<Notification, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.status = ActiveValue::Set(NotificationStatus::Sent.to_string());
        active_model.sent_at = ActiveValue::Set(Some(Utc::now()));
        active_model.error = ActiveValue::Set(None);

        Notification::from_entity(active_model.update(self.db).await?)
    }

    /// Marks a notification as failed with the delivery error
    pub async fn mark_failed(&self, id: i32, error: String) -> Result<Notification, DbErr> {
        let mut active_model = self.find_model(id).await?.into_active_model();

        active_model.status = ActiveValue::Set(NotificationStatus::Failed.to_string());
        active_model.error = ActiveValue::Set(Some(error));

        Notification::from_entity(active_model.update(self.db).await?)
    }

    async fn find_model(&self, id: i32) -> Result<entity::notification::Model, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Notification with id {} not found",
                id
            )))
    }
}
