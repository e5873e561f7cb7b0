use super::*;

/// Expected: Ok(true) and the new stock stored when the observed value matches
#[tokio::test]
async fn updates_when_stock_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::create_book_with_stock(db, 5).await?;

    let repo = BookRepository::new(db);
    assert!(repo.compare_and_set_stock(book.id, 5, 3).await?);
    assert_eq!(repo.find_by_id(book.id).await?.unwrap().stock, 3);

    Ok(())
}

/// Tests a lost race: the stock changed between read and write.
///
/// Expected: Ok(false) and the stock left untouched
#[tokio::test]
async fn skips_when_stock_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::create_book_with_stock(db, 5).await?;

    let repo = BookRepository::new(db);
    assert!(!repo.compare_and_set_stock(book.id, 4, 2).await?);
    assert_eq!(repo.find_by_id(book.id).await?.unwrap().stock, 5);

    Ok(())
}
