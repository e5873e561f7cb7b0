use super::*;

/// Expected: the amount is added to the stored quantity
#[tokio::test]
async fn adds_to_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let row = factory::create_cart_item(db, user.id, book.id, 2).await?;

    let updated = CartItemRepository::new(db)
        .add_quantity(row.id, user.id, 3, 10)
        .await?
        .unwrap();

    assert_eq!(updated.quantity, 5);

    Ok(())
}

/// Expected: Ok(None) and no change when the sum would exceed the maximum; reaching it
/// exactly is allowed
#[tokio::test]
async fn stops_at_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let row = factory::create_cart_item(db, user.id, book.id, 4).await?;

    let repo = CartItemRepository::new(db);
    assert!(repo.add_quantity(row.id, user.id, 2, 5).await?.is_none());
    assert_eq!(repo.find_owned(row.id, user.id).await?.unwrap().quantity, 4);

    let updated = repo.add_quantity(row.id, user.id, 1, 5).await?.unwrap();
    assert_eq!(updated.quantity, 5);

    Ok(())
}

/// Expected: Ok(None) and no change for a row owned by someone else
#[tokio::test]
async fn ignores_other_users_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let row = factory::create_cart_item(db, owner.id, book.id, 1).await?;

    let repo = CartItemRepository::new(db);
    assert!(repo.add_quantity(row.id, intruder.id, 1, 10).await?.is_none());
    assert_eq!(repo.find_owned(row.id, owner.id).await?.unwrap().quantity, 1);

    Ok(())
}
