//! Order factory for creating orders with item snapshots.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders without touching book stock.
///
/// Lines are snapshotted from the given book models, the way order placement records
/// them.
///
/// # Example
///
/// ```rust,ignore
/// let (order, items) = OrderFactory::new(&db, user.id)
///     .item(&book, 2)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    items: Vec<(entity::book::Model, i32)>,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line for `quantity` copies of `book` at its current price.
    pub fn item(mut self, book: &entity::book::Model, quantity: i32) -> Self {
        self.items.push((book.clone(), quantity));
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the order and its items.
    ///
    /// # Returns
    /// - `Ok((order, items))` - Created order and its item rows in insertion order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
        let total: f64 = self
            .items
            .iter()
            .map(|(book, quantity)| book.price * f64::from(*quantity))
            .sum();

        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            total_price: ActiveValue::Set(total),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (book, quantity) in self.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                book_id: ActiveValue::Set(Some(book.id)),
                title: ActiveValue::Set(book.title.clone()),
                quantity: ActiveValue::Set(quantity),
                unit_price: ActiveValue::Set(book.price),
                line_total: ActiveValue::Set(book.price * f64::from(quantity)),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok((order, items))
    }
}

/// Creates an order for `user_id` with a single line of one copy of `book`.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    book: &entity::book::Model,
) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
    OrderFactory::new(db, user_id).item(book, 1).build().await
}
