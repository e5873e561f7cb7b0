use super::*;

/// Tests inserting a book.
///
/// Expected: Ok(Book) with matching timestamps
#[tokio::test]
async fn creates_book() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let book = repo
        .create(CreateBookParams {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Desert planet".to_string(),
            genre: "Science Fiction".to_string(),
            price: 9.99,
            stock: 3,
        })
        .await?;

    assert_eq!(book.title, "Dune");
    assert_eq!(book.stock, 3);
    assert_eq!(book.created_at, book.updated_at);
    assert!(repo.exists(book.id).await?);

    Ok(())
}
