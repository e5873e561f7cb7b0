use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::cart::{AddCartItemParams, AddedCartItem, UpdateCartItemParams},
    service::cart::CartService,
};

/// Tests adding the same book twice.
///
/// Expected: first call creates the row, second increments it
#[tokio::test]
async fn adds_then_increments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::book::create_book_with_stock(db, 5).await?;

    let service = CartService::new(db);
    let first = service
        .add(
            user.id,
            AddCartItemParams {
                book_id: book.id,
                quantity: 2,
            },
        )
        .await?;
    let second = service
        .add(
            user.id,
            AddCartItemParams {
                book_id: book.id,
                quantity: 3,
            },
        )
        .await?;

    assert!(matches!(first, AddedCartItem::Created(ref item) if item.quantity == 2));
    assert!(matches!(second, AddedCartItem::Updated(ref item) if item.quantity == 5));
    assert_eq!(service.get_cart(user.id).await?.len(), 1);

    Ok(())
}

/// Tests adding more copies than are in stock.
///
/// Expected: Err(AppError::BadRequest) and no row created
#[tokio::test]
async fn rejects_quantity_above_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::book::create_book_with_stock(db, 2).await?;

    let result = CartService::new(db)
        .add(
            user.id,
            AddCartItemParams {
                book_id: book.id,
                quantity: 3,
            },
        )
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, "The quantity of book exceeds the available stock")
        }
        other => panic!("expected bad request, got {:?}", other),
    }
    assert!(entity::prelude::CartItem::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that the existing quantity counts toward the stock limit.
///
/// Expected: Err(AppError::BadRequest) and the row left unchanged
#[tokio::test]
async fn rejects_increment_above_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::book::create_book_with_stock(db, 3).await?;
    let row = factory::create_cart_item(db, user.id, book.id, 2).await?;

    let result = CartService::new(db)
        .add(
            user.id,
            AddCartItemParams {
                book_id: book.id,
                quantity: 2,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = entity::prelude::CartItem::find_by_id(row.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.quantity, 2);

    Ok(())
}

/// Expected: Err(AppError::NotFound) for an unknown book
#[tokio::test]
async fn rejects_unknown_book() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = CartService::new(db)
        .add(
            user.id,
            AddCartItemParams {
                book_id: 999,
                quantity: 1,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests updating a row's quantity.
///
/// Expected: quantity replaced for the owner, NotFound for anyone else
#[tokio::test]
async fn update_replaces_quantity_for_owner_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let book = factory::book::create_book_with_stock(db, 10).await?;
    let row = factory::create_cart_item(db, owner.id, book.id, 4).await?;

    let service = CartService::new(db);

    let updated = service
        .update(owner.id, row.id, UpdateCartItemParams { quantity: 1 })
        .await?;
    assert_eq!(updated.quantity, 1);

    let result = service
        .update(intruder.id, row.id, UpdateCartItemParams { quantity: 2 })
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: Err(AppError::BadRequest) when the new quantity exceeds stock
#[tokio::test]
async fn update_rejects_quantity_above_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let book = factory::book::create_book_with_stock(db, 2).await?;
    let row = factory::create_cart_item(db, user.id, book.id, 1).await?;

    let result = CartService::new(db)
        .update(user.id, row.id, UpdateCartItemParams { quantity: 3 })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: remove fails for another user's row; clear counts removed rows
#[tokio::test]
async fn remove_and_clear() -> Result<(), AppError> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_book(db).await?;
    let second = factory::create_book(db).await?;
    let row = factory::create_cart_item(db, user.id, first.id, 1).await?;
    factory::create_cart_item(db, user.id, second.id, 1).await?;

    let service = CartService::new(db);

    assert!(matches!(
        service.remove(other.id, row.id).await,
        Err(AppError::NotFound(_))
    ));
    service.remove(user.id, row.id).await?;
    assert_eq!(service.clear(user.id).await?, 1);
    assert!(service.get_cart(user.id).await?.is_empty());

    Ok(())
}

/// Tests first-time adds of the same book racing each other on a file-backed database.
///
/// Expected: every add succeeds and the user ends up with a single row holding the sum
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_adds_share_one_row() -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    const ADDS: i32 = 8;

    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("store.db").display());
    let db = sea_orm::Database::connect(url.as_str()).await?;
    Migrator::up(&db, None).await?;

    let user = factory::create_user(&db).await?;
    let book = factory::book::create_book_with_stock(&db, 100).await?;

    let mut handles = Vec::new();
    for _ in 0..ADDS {
        let db = db.clone();
        let (user_id, book_id) = (user.id, book.id);
        handles.push(tokio::spawn(async move {
            CartService::new(&db)
                .add(
                    user_id,
                    AddCartItemParams {
                        book_id,
                        quantity: 1,
                    },
                )
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let rows = entity::prelude::CartItem::find().all(&db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, ADDS);

    Ok(())
}

/// Tests concurrent increments of an existing row against a small stock.
///
/// Expected: the row never exceeds the stock and each rejected add is a 400
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_increments_stay_within_stock() -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    const STOCK: i32 = 3;

    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("store.db").display());
    let db = sea_orm::Database::connect(url.as_str()).await?;
    Migrator::up(&db, None).await?;

    let user = factory::create_user(&db).await?;
    let book = factory::book::create_book_with_stock(&db, STOCK).await?;
    factory::create_cart_item(&db, user.id, book.id, 1).await?;

    let mut handles = Vec::new();
    for _ in 0..6 {
        let db = db.clone();
        let (user_id, book_id) = (user.id, book.id);
        handles.push(tokio::spawn(async move {
            CartService::new(&db)
                .add(
                    user_id,
                    AddCartItemParams {
                        book_id,
                        quantity: 1,
                    },
                )
                .await
        }));
    }

    let mut added = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => added += 1,
            Err(e) => assert!(matches!(e, AppError::BadRequest(_))),
        }
    }

    let rows = entity::prelude::CartItem::find().all(&db).await?;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].quantity <= STOCK);
    assert_eq!(rows[0].quantity, 1 + added);

    Ok(())
}
