//! Cart data repository.
//!
//! Every lookup and mutation except insertion is scoped to the owning user, so a caller can
//! never see or change another user's rows through this repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::cart::CartItem;

pub struct CartItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's cart rows, oldest first, joined with their books.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<CartItem>, DbErr> {
        let rows = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .order_by_asc(entity::cart_item::Column::Id)
            .find_also_related(entity::prelude::Book)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, book)| book.map(|book| CartItem::from_entity(item, book)))
            .collect())
    }

    /// Finds the user's row for a book.
    pub async fn find_by_user_and_book(
        &self,
        user_id: i32,
        book_id: i32,
    ) -> Result<Option<CartItem>, DbErr> {
        let row = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .filter(entity::cart_item::Column::BookId.eq(book_id))
            .find_also_related(entity::prelude::Book)
            .one(self.db)
            .await?;

        Ok(Self::join(row))
    }

    /// Finds a row by id, only if it belongs to `user_id`.
    pub async fn find_owned(
        &self,
        cart_item_id: i32,
        user_id: i32,
    ) -> Result<Option<CartItem>, DbErr> {
        let row = entity::prelude::CartItem::find_by_id(cart_item_id)
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Book)
            .one(self.db)
            .await?;

        Ok(Self::join(row))
    }

    /// Inserts a new row.
    ///
    /// # Returns
    /// - `Ok(CartItem)` - The created row joined with its book
    /// - `Err(DbErr)` - Database error, including a unique violation on `(user_id, book_id)`
    pub async fn create(
        &self,
        user_id: i32,
        book_id: i32,
        quantity: i32,
    ) -> Result<CartItem, DbErr> {
        let entity = entity::cart_item::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            book_id: ActiveValue::Set(book_id),
            quantity: ActiveValue::Set(quantity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_owned(entity.id, user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("cart item {}", entity.id)))
    }

    /// Sets the quantity of a row owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(CartItem))` - The updated row
    /// - `Ok(None)` - No such row for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_quantity(
        &self,
        cart_item_id: i32,
        user_id: i32,
        quantity: i32,
    ) -> Result<Option<CartItem>, DbErr> {
        let result = entity::prelude::CartItem::update_many()
            .col_expr(entity::cart_item::Column::Quantity, Expr::value(quantity))
            .filter(entity::cart_item::Column::Id.eq(cart_item_id))
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_owned(cart_item_id, user_id).await
    }

    /// Adds `quantity` to a row owned by `user_id` in a single statement, provided the
    /// resulting quantity stays within `max_quantity`.
    ///
    /// # Returns
    /// - `Ok(Some(CartItem))` - The incremented row
    /// - `Ok(None)` - No such row for this user, or the sum would exceed `max_quantity`
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_quantity(
        &self,
        cart_item_id: i32,
        user_id: i32,
        quantity: i32,
        max_quantity: i32,
    ) -> Result<Option<CartItem>, DbErr> {
        use entity::cart_item::Column;

        let result = entity::prelude::CartItem::update_many()
            .col_expr(Column::Quantity, Expr::col(Column::Quantity).add(quantity))
            .filter(Column::Id.eq(cart_item_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Quantity.lte(max_quantity.saturating_sub(quantity)))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_owned(cart_item_id, user_id).await
    }

    /// Deletes a row owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No such row for this user
    pub async fn delete_owned(&self, cart_item_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::Id.eq(cart_item_id))
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every row of the user's cart and returns how many were removed.
    pub async fn delete_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn join(
        row: Option<(entity::cart_item::Model, Option<entity::book::Model>)>,
    ) -> Option<CartItem> {
        match row {
            Some((item, Some(book))) => Some(CartItem::from_entity(item, book)),
            _ => None,
        }
    }
}
