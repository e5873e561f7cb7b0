//! Order data repository.
//!
//! Orders are always read together with their items. Creation is generic over the
//! connection so it joins the transaction that reserved the stock.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::order::{NewOrderItem, Order};

pub struct OrderRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order and its items.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the order
    /// - `total_price` - Sum of the items' line totals
    /// - `items` - Snapshotted lines, inserted in order
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its items
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        total_price: f64,
        items: Vec<NewOrderItem>,
    ) -> Result<Order, DbErr> {
        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            total_price: ActiveValue::Set(total_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut item_entities = Vec::with_capacity(items.len());
        for item in items {
            let entity = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                book_id: ActiveValue::Set(Some(item.book_id)),
                title: ActiveValue::Set(item.title),
                quantity: ActiveValue::Set(item.quantity),
                unit_price: ActiveValue::Set(item.unit_price),
                line_total: ActiveValue::Set(item.line_total),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            item_entities.push(entity);
        }

        Ok(Order::from_entity(order, item_entities))
    }

    /// Finds an order by id regardless of owner.
    pub async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order.id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Order::from_entity(order, items)))
    }

    /// Gets a user's orders, newest first, each with its items.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let orders = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in items {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect())
    }
}
