//! Order domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::order::{OrderDto, OrderItemDto, PlaceOrderDto},
    server::{error::AppError, util::validation::Validator},
};

/// Line of a placed order. Title and price are snapshots taken at placement.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    /// `None` once the book has been deleted.
    pub book_id: Option<i32>,
    pub title: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            book_id: entity.book_id,
            title: entity.title,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            line_total: entity.line_total,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            book_id: self.book_id,
            title: self.title,
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_total: self.line_total,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            total_price: entity.total_price,
            created_at: entity.created_at,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            total_price: self.total_price,
            created_at: self.created_at,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }
}

/// Requested book and quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub book_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    /// Never empty.
    pub lines: Vec<OrderLine>,
}

impl PlaceOrderParams {
    pub fn try_from_dto(dto: PlaceOrderDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let items = dto.items.unwrap_or_default();
        v.check(!items.is_empty(), "items must contain at least one item");
        for (index, item) in items.iter().enumerate() {
            v.check(
                item.quantity >= 1,
                format!("items[{}].quantity must be at least 1", index),
            );
        }

        v.finish()?;

        Ok(Self {
            lines: items
                .into_iter()
                .map(|item| OrderLine {
                    book_id: item.book_id,
                    quantity: item.quantity,
                })
                .collect(),
        })
    }
}

/// Snapshot of a line after its stock has been reserved, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub book_id: i32,
    pub title: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub line_total: f64,
}
