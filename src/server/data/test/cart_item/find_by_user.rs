use super::*;

/// Expected: only the requesting user's rows, oldest first
#[tokio::test]
async fn returns_only_own_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_book(db).await?;
    let second = factory::create_book(db).await?;

    factory::create_cart_item(db, user.id, first.id, 1).await?;
    factory::create_cart_item(db, other.id, first.id, 5).await?;
    factory::create_cart_item(db, user.id, second.id, 2).await?;

    let items = CartItemRepository::new(db).find_by_user(user.id).await?;

    assert_eq!(
        items.iter().map(|i| (i.book_id, i.quantity)).collect::<Vec<_>>(),
        vec![(first.id, 1), (second.id, 2)]
    );

    Ok(())
}

/// Expected: Ok(None) when looking up another user's row by id
#[tokio::test]
async fn find_owned_hides_other_users_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let row = factory::create_cart_item(db, owner.id, book.id, 1).await?;

    let repo = CartItemRepository::new(db);

    assert!(repo.find_owned(row.id, intruder.id).await?.is_none());
    assert!(repo.find_owned(row.id, owner.id).await?.is_some());

    Ok(())
}
