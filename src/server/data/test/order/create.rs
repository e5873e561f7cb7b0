use super::*;

/// Tests inserting an order with two lines.
///
/// Expected: Ok(Order) whose items keep insertion order and snapshot values
#[tokio::test]
async fn creates_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_book(db).await?;
    let second = factory::create_book(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(
            user.id,
            35.0,
            vec![
                NewOrderItem {
                    book_id: first.id,
                    title: first.title.clone(),
                    quantity: 1,
                    unit_price: 15.0,
                    line_total: 15.0,
                },
                NewOrderItem {
                    book_id: second.id,
                    title: second.title.clone(),
                    quantity: 2,
                    unit_price: 10.0,
                    line_total: 20.0,
                },
            ],
        )
        .await?;

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.total_price, 35.0);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].book_id, Some(first.id));
    assert_eq!(order.items[1].line_total, 20.0);

    let found = repo.find_by_id(order.id).await?;
    assert_eq!(found, Some(order));

    Ok(())
}
