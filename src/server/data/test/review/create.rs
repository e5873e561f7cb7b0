use super::*;

/// Expected: the created review is listed first for its book
#[tokio::test]
async fn creates_and_lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::create_book(db).await?;
    let other_book = factory::create_book(db).await?;
    factory::create_review(db, book.id, user.id, 3).await?;
    factory::create_review(db, other_book.id, user.id, 1).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(
            book.id,
            user.id,
            CreateReviewParams {
                rating: 5,
                comment: "Loved it".to_string(),
            },
        )
        .await?;

    let reviews = repo.find_by_book(book.id).await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0], review);

    Ok(())
}
