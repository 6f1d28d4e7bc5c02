use super::*;

/// Tests storing an outgoing SMS.
///
/// Expected: Ok with pending notification without subject
#[tokio::test]
async fn stores_pending_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = OutgoingMessage::sms("0151 23456789", "Your car is ready", Some(7)).unwrap();

    let repo = NotificationRepository::new(db);
    let notification = repo.create(message).await?;

    assert_eq!(notification.channel, NotificationChannel::Sms);
    assert_eq!(notification.recipient, "+4915123456789");
    assert_eq!(notification.status, NotificationStatus::Pending);
    assert_eq!(notification.reservation_id, Some(7));
    assert!(notification.subject.is_none());
    assert!(notification.sent_at.is_none());

    Ok(())
}
