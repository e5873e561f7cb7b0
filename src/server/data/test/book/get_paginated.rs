use super::*;
use chrono::{Duration, Utc};

/// Tests default ordering and page offsets.
///
/// Creates five books with increasing timestamps and reads them two at a time, newest
/// first.
///
/// Expected: page 1 holds the 3rd and 4th newest books, total is 5
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now() - Duration::hours(1);
    let mut ids = Vec::new();
    for i in 0..5 {
        let book = factory::book::BookFactory::new(db)
            .created_at(start + Duration::minutes(i))
            .build()
            .await?;
        ids.push(book.id);
    }

    let (books, total) = BookRepository::new(db)
        .get_paginated(&BookListParams {
            page: 1,
            limit: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(
        books.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );

    Ok(())
}

/// Tests case-insensitive search across title, author and genre.
///
/// Expected: only matching books, total counts matches only
#[tokio::test]
async fn searches_title_author_and_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_title = factory::book::BookFactory::new(db)
        .title("The Hobbit")
        .build()
        .await?;
    let by_author = factory::book::BookFactory::new(db)
        .author("Hobbes")
        .build()
        .await?;
    let by_genre = factory::book::BookFactory::new(db)
        .genre("hobby crafts")
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .title("Unrelated")
        .build()
        .await?;

    let (books, total) = BookRepository::new(db)
        .get_paginated(&BookListParams {
            search: Some("HOBB".to_string()),
            sort_by: BookSortField::Title,
            sort_order: SortDirection::Asc,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    let mut ids: Vec<i32> = books.iter().map(|b| b.id).collect();
    ids.sort();
    let mut expected = vec![by_title.id, by_author.id, by_genre.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests sorting by price in both directions.
///
/// Expected: ascending then descending price order
#[tokio::test]
async fn sorts_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [20.0, 5.0, 12.5] {
        factory::book::BookFactory::new(db).price(price).build().await?;
    }

    let repo = BookRepository::new(db);
    let (asc, _) = repo
        .get_paginated(&BookListParams {
            sort_by: BookSortField::Price,
            sort_order: SortDirection::Asc,
            ..Default::default()
        })
        .await?;
    let (desc, _) = repo
        .get_paginated(&BookListParams {
            sort_by: BookSortField::Price,
            sort_order: SortDirection::Desc,
            ..Default::default()
        })
        .await?;

    assert_eq!(
        asc.iter().map(|b| b.price).collect::<Vec<_>>(),
        vec![5.0, 12.5, 20.0]
    );
    assert_eq!(
        desc.iter().map(|b| b.price).collect::<Vec<_>>(),
        vec![20.0, 12.5, 5.0]
    );

    Ok(())
}

/// Expected: an empty page past the end still reports the total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_book(db).await?;

    let (books, total) = BookRepository::new(db)
        .get_paginated(&BookListParams {
            page: 3,
            ..Default::default()
        })
        .await?;

    assert!(books.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests that `%` and `_` in a search term are matched literally.
///
/// Expected: only the book whose title contains the character is returned
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db).title("Dune").build().await?;
    let underscored = factory::book::BookFactory::new(db)
        .title("snake_case for beginners")
        .build()
        .await?;
    let percent = factory::book::BookFactory::new(db)
        .title("100% Rust")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    for (term, expected) in [("_", underscored.id), ("%", percent.id)] {
        let (books, total) = repo
            .get_paginated(&BookListParams {
                search: Some(term.to_string()),
                ..Default::default()
            })
            .await?;

        assert_eq!(total, 1, "search {:?}", term);
        assert_eq!(books[0].id, expected);
    }

    Ok(())
}

/// Tests case folding beyond ASCII.
///
/// Expected: an uppercase accented term finds the lowercase stored author
#[tokio::test]
async fn folds_non_ascii_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db)
        .author("émile zola")
        .build()
        .await?;
    factory::create_book(db).await?;

    let (books, total) = BookRepository::new(db)
        .get_paginated(&BookListParams {
            search: Some("ÉMILE".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(books[0].id, book.id);

    Ok(())
}

/// Tests that search follows a renamed title.
///
/// Expected: the new title matches, the old one no longer does
#[tokio::test]
async fn search_follows_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db)
        .title("Working Title")
        .build()
        .await?;

    let repo = BookRepository::new(db);
    repo.update(
        book.id,
        UpdateBookParams {
            title: Some("Final Title".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let search = |term: &str| BookListParams {
        search: Some(term.to_string()),
        ..Default::default()
    };
    let (_, old_total) = repo.get_paginated(&search("working")).await?;
    let (_, new_total) = repo.get_paginated(&search("final")).await?;

    assert_eq!(old_total, 0);
    assert_eq!(new_total, 1);

    Ok(())
}
