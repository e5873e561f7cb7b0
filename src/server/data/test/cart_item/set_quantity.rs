use super::*;

/// Expected: the quantity is replaced, not added to
#[tokio::test]
async fn replaces_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let row = factory::create_cart_item(db, user.id, book.id, 3).await?;

    let updated = CartItemRepository::new(db)
        .set_quantity(row.id, user.id, 2)
        .await?
        .unwrap();

    assert_eq!(updated.quantity, 2);

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
    let row = factory::create_cart_item(db, owner.id, book.id, 3).await?;

    let repo = CartItemRepository::new(db);
    assert!(repo.set_quantity(row.id, intruder.id, 9).await?.is_none());
    assert_eq!(repo.find_owned(row.id, owner.id).await?.unwrap().quantity, 3);

    Ok(())
}
