use super::*;

/// Expected: every review of the book is removed, others are kept
#[tokio::test]
async fn deletes_all_reviews_of_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let other_book = factory::create_book(db).await?;
    factory::create_review(db, book.id, user.id, 3).await?;
    factory::create_review(db, book.id, user.id, 4).await?;
    factory::create_review(db, other_book.id, user.id, 5).await?;

    let repo = ReviewRepository::new(db);
    let deleted = repo.delete_by_book(book.id).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_by_book(book.id).await?.is_empty());
    assert_eq!(repo.find_by_book(other_book.id).await?.len(), 1);

    Ok(())
}
