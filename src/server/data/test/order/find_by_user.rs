use super::*;
use chrono::{Duration, Utc};

/// Tests listing a user's orders.
///
/// Expected: newest first, each order with its own items, other users excluded
#[tokio::test]
async fn lists_own_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;

    let (older, _) = factory::order::OrderFactory::new(db, user.id)
        .item(&book, 1)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let (newer, _) = factory::order::OrderFactory::new(db, user.id)
        .item(&book, 2)
        .item(&book, 3)
        .build()
        .await?;
    factory::create_order(db, other.id, &book).await?;

    let orders = OrderRepository::new(db).find_by_user(user.id).await?;

    assert_eq!(
        orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert_eq!(orders[0].items.len(), 2);
    assert_eq!(orders[1].items.len(), 1);

    Ok(())
}

/// Expected: an empty list for a user without orders
#[tokio::test]
async fn returns_empty_for_user_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    assert!(OrderRepository::new(db).find_by_user(user.id).await?.is_empty());

    Ok(())
}
