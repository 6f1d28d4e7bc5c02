use super::*;

/// Tests marking a notification as sent.
///
/// Expected: Ok with status Sent and sent_at set
#[tokio::test]
async fn marks_sent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notification = factory::create_notification(db).await?;

    let repo = NotificationRepository::new(db);
    let sent = repo.mark_sent(notification.id).await?;

    assert_eq!(sent.status, NotificationStatus::Sent);
    assert!(sent.sent_at.is_some());
    assert!(sent.error.is_none());

    Ok(())
}

/// Tests marking a notification as failed.
///
/// Expected: Ok with status Failed and error text stored
#[tokio::test]
async fn marks_failed_with_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notification = factory::create_notification(db).await?;

    let repo = NotificationRepository::new(db);
    let failed = repo
        .mark_failed(notification.id, "connection refused".to_string())
        .await?;

    assert_eq!(failed.status, NotificationStatus::Failed);
    assert_eq!(failed.error.as_deref(), Some("connection refused"));
    assert!(failed.sent_at.is_none());

    Ok(())
}
