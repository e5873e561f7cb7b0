use super::*;

/// Tests that only supplied fields change.
///
/// Expected: Ok(Some(Book)) with the new price and the old title
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db)
        .title("Emma")
        .price(5.0)
        .build()
        .await?;

    let updated = BookRepository::new(db)
        .update(
            book.id,
            UpdateBookParams {
                price: Some(7.5),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Emma");
    assert_eq!(updated.price, 7.5);
    assert!(updated.updated_at >= book.updated_at);

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookRepository::new(db)
        .update(
            999,
            UpdateBookParams {
                stock: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
