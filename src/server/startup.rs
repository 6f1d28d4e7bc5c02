use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::notification::dispatcher::NotificationDispatcher,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Builds the HTTP client used for outbound notification delivery.
///
/// Redirects are disabled so a misconfigured webhook cannot bounce requests to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()?;

    Ok(client)
}

pub fn setup_notification_dispatcher(config: &Config) -> Result<NotificationDispatcher, AppError> {
    let client = setup_reqwest_client()?;

    match &config.notification_webhook_url {
        Some(url) => {
            tracing::info!("Notifications are delivered to webhook {}", url);
            Ok(NotificationDispatcher::webhook(client, url.clone()))
        }
        None => {
            tracing::warn!("NOTIFICATION_WEBHOOK_URL not set, notifications are only logged");
            Ok(NotificationDispatcher::log_only())
        }
    }
}

/// Builds the CORS layer allowing the configured portal origins.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|url| {
            HeaderValue::from_str(url.origin().ascii_serialization().as_str()).map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "ALLOWED_ORIGINS".to_string(),
                    reason: e.to_string(),
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

/// Wraps the router in per-IP rate limiting.
///
/// Requires the router to be served with `into_make_service_with_connect_info` so the
/// peer address is available to the key extractor.
pub fn apply_rate_limit(router: Router, config: &Config) -> Result<Router, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_per_second)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "RATE_LIMIT_PER_SECOND".to_string(),
            reason: "rate limit values must be greater than zero".to_string(),
        })?;

    Ok(router.layer(GovernorLayer::new(governor_config)))
}
