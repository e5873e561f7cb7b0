use super::*;

/// Tests deleting a book that has cart rows, reviews and order items.
///
/// Verifies that cart rows and reviews are removed with the book while order items keep
/// their snapshot with a null book id.
///
/// Expected: Ok(Some(Book)), dependent rows handled by the foreign keys
#[tokio::test]
async fn deletes_book_and_detaches_order_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    factory::create_cart_item(db, user.id, book.id, 1).await?;
    factory::create_review(db, book.id, user.id, 4).await?;
    let (_, items) = factory::create_order(db, user.id, &book).await?;

    let deleted = BookRepository::new(db).delete(book.id).await?;

    assert_eq!(deleted.map(|b| b.id), Some(book.id));
    assert!(entity::prelude::Book::find_by_id(book.id).one(db).await?.is_none());
    assert!(entity::prelude::CartItem::find().all(db).await?.is_empty());
    assert!(entity::prelude::Review::find().all(db).await?.is_empty());

    let item = entity::prelude::OrderItem::find_by_id(items[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(item.book_id, None);
    assert_eq!(item.title, book.title);

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BookRepository::new(db).delete(42).await?.is_none());

    Ok(())
}
