//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool
//! and the notification dispatcher used by every bounded context.

use sea_orm::DatabaseConnection;

use crate::server::service::notification::dispatcher::NotificationDispatcher;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `NotificationDispatcher` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Outbound delivery for e-mail and SMS notifications.
    pub dispatcher: NotificationDispatcher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, dispatcher: NotificationDispatcher) -> Self {
        Self { db, dispatcher }
    }
}
