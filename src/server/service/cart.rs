//! Cart service for business logic.
//!
//! Enforces stock limits on the caller's resulting quantity and keeps every operation
//! scoped to the caller's own rows.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{book::BookRepository, cart_item::CartItemRepository},
    error::AppError,
    model::cart::{AddCartItemParams, AddedCartItem, CartItem, UpdateCartItemParams},
};

const EXCEEDS_STOCK: &str = "The quantity of book exceeds the available stock";

fn cart_item_not_found() -> AppError {
    AppError::NotFound("Cart item not found".to_string())
}

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_cart(&self, user_id: i32) -> Result<Vec<CartItem>, AppError> {
        let items = CartItemRepository::new(self.db).find_by_user(user_id).await?;
        Ok(items)
    }

    /// Adds copies of a book to the caller's cart.
    ///
    /// Increments the existing row for the book if there is one, otherwise inserts a new
    /// row. The resulting quantity must not exceed the book's current stock. The increment
    /// is a single bounded update, so concurrent adds can neither lose copies nor push the
    /// row past the stock.
    ///
    /// # Returns
    /// - `Ok(AddedCartItem::Created)` - A new row was inserted
    /// - `Ok(AddedCartItem::Updated)` - The existing row was incremented
    /// - `Err(AppError::NotFound)` - Unknown book
    /// - `Err(AppError::BadRequest)` - Resulting quantity exceeds stock; nothing changed
    pub async fn add(
        &self,
        user_id: i32,
        params: AddCartItemParams,
    ) -> Result<AddedCartItem, AppError> {
        let cart_repo = CartItemRepository::new(self.db);

        let book = BookRepository::new(self.db)
            .find_by_id(params.book_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        let existing = cart_repo
            .find_by_user_and_book(user_id, params.book_id)
            .await?;
        let current = existing.as_ref().map_or(0, |item| item.quantity);
        let requested = current.saturating_add(params.quantity);

        if requested > book.stock {
            return Err(AppError::BadRequest(EXCEEDS_STOCK.to_string()));
        }

        let item = match existing {
            Some(item) => item,
            None => match cart_repo
                .create(user_id, params.book_id, params.quantity)
                .await
            {
                Ok(created) => return Ok(AddedCartItem::Created(created)),
                // A concurrent add created the row first; increment it instead
                Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    cart_repo
                        .find_by_user_and_book(user_id, params.book_id)
                        .await?
                        .ok_or_else(cart_item_not_found)?
                }
                Err(e) => return Err(e.into()),
            },
        };

        let updated = cart_repo
            .add_quantity(item.id, user_id, params.quantity, book.stock)
            .await?
            .ok_or_else(|| AppError::BadRequest(EXCEEDS_STOCK.to_string()))?;

        Ok(AddedCartItem::Updated(updated))
    }

    /// Replaces the quantity of one of the caller's rows.
    ///
    /// # Returns
    /// - `Ok(CartItem)` - The updated row
    /// - `Err(AppError::NotFound)` - No such row for this caller
    /// - `Err(AppError::BadRequest)` - Quantity exceeds stock
    pub async fn update(
        &self,
        user_id: i32,
        cart_item_id: i32,
        params: UpdateCartItemParams,
    ) -> Result<CartItem, AppError> {
        let cart_repo = CartItemRepository::new(self.db);

        let item = cart_repo
            .find_owned(cart_item_id, user_id)
            .await?
            .ok_or_else(cart_item_not_found)?;

        let book = BookRepository::new(self.db)
            .find_by_id(item.book_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

        if params.quantity > book.stock {
            return Err(AppError::BadRequest(EXCEEDS_STOCK.to_string()));
        }

        cart_repo
            .set_quantity(cart_item_id, user_id, params.quantity)
            .await?
            .ok_or_else(cart_item_not_found)
    }

    /// Removes one of the caller's rows.
    pub async fn remove(&self, user_id: i32, cart_item_id: i32) -> Result<(), AppError> {
        let removed = CartItemRepository::new(self.db)
            .delete_owned(cart_item_id, user_id)
            .await?;

        if !removed {
            return Err(cart_item_not_found());
        }

        Ok(())
    }

    /// Empties the caller's cart and returns how many rows were removed.
    pub async fn clear(&self, user_id: i32) -> Result<u64, AppError> {
        let deleted = CartItemRepository::new(self.db)
            .delete_all_for_user(user_id)
            .await?;
        Ok(deleted)
    }
}
