use super::*;

/// Expected: Ok(CartItem) joined with the book's title and price
#[tokio::test]
async fn creates_row_with_book_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::book::BookFactory::new(db)
        .title("Persuasion")
        .price(8.0)
        .build()
        .await?;

    let item = CartItemRepository::new(db).create(user.id, book.id, 2).await?;

    assert_eq!(item.book_id, book.id);
    assert_eq!(item.title, "Persuasion");
    assert_eq!(item.unit_price, 8.0);
    assert_eq!(item.quantity, 2);

    Ok(())
}

/// Tests the unique index on (user, book).
///
/// Expected: Err(DbErr) for a second row of the same book
#[tokio::test]
async fn rejects_second_row_for_same_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;

    let repo = CartItemRepository::new(db);
    repo.create(user.id, book.id, 1).await?;

    assert!(repo.create(user.id, book.id, 1).await.is_err());

    Ok(())
}
