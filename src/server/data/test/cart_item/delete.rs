use super::*;

/// Expected: Ok(false) for another user's row, Ok(true) for the owner
#[tokio::test]
async fn delete_owned_respects_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let row = factory::create_cart_item(db, owner.id, book.id, 1).await?;

    let repo = CartItemRepository::new(db);

    assert!(!repo.delete_owned(row.id, intruder.id).await?);
    assert!(repo.delete_owned(row.id, owner.id).await?);
    assert!(repo.find_by_user(owner.id).await?.is_empty());

    Ok(())
}

/// Expected: only the caller's rows are removed and counted
#[tokio::test]
async fn clears_only_own_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_book(db).await?;
    let second = factory::create_book(db).await?;
    factory::create_cart_item(db, user.id, first.id, 1).await?;
    factory::create_cart_item(db, user.id, second.id, 1).await?;
    factory::create_cart_item(db, other.id, first.id, 1).await?;

    let repo = CartItemRepository::new(db);
    let deleted = repo.delete_all_for_user(user.id).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.find_by_user(other.id).await?.len(), 1);

    Ok(())
}
