use super::*;

/// Tests filtering notifications by recipient and reservation.
///
/// Expected: Ok with matching notifications, newest first
#[tokio::test]
async fn filters_by_recipient_and_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::notification::NotificationFactory::new(db)
        .recipient("max@example.de")
        .reservation_id(1)
        .build()
        .await?;
    let second = factory::notification::NotificationFactory::new(db)
        .recipient("max@example.de")
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db)
        .sms("+4915123456789")
        .reservation_id(1)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let params = NotificationSearchParams {
        page: 0,
        per_page: 10,
        ..Default::default()
    };

    let for_max = repo
        .get_paginated(&NotificationSearchParams {
            recipient: Some("max@example.de".to_string()),
            ..params.clone()
        })
        .await?;
    let ids: Vec<_> = for_max.items.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let for_reservation = repo
        .get_paginated(&NotificationSearchParams {
            reservation_id: Some(1),
            ..params
        })
        .await?;
    assert_eq!(for_reservation.total, 2);

    Ok(())
}
