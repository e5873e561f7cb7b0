//! Cart domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::cart::{AddCartItemDto, CartItemDto, UpdateCartItemDto},
    server::{error::AppError, util::validation::Validator},
};

/// Cart row joined with the book it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i32,
    pub book_id: i32,
    /// Current title of the book.
    pub title: String,
    /// Current price of the book.
    pub unit_price: f64,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    /// Builds a cart item from its row and the referenced book.
    pub fn from_entity(entity: entity::cart_item::Model, book: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            book_id: entity.book_id,
            title: book.title,
            unit_price: book.price,
            quantity: entity.quantity,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
            id: self.id,
            book_id: self.book_id,
            title: self.title,
            unit_price: self.unit_price,
            quantity: self.quantity,
            created_at: self.created_at,
        }
    }
}

fn check_quantity(v: &mut Validator, quantity: i32) {
    v.check(quantity >= 1, "quantity must be at least 1");
}

#[derive(Debug, Clone)]
pub struct AddCartItemParams {
    pub book_id: i32,
    pub quantity: i32,
}

impl AddCartItemParams {
    pub fn try_from_dto(dto: AddCartItemDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let book_id = v.required("bookId", dto.book_id);
        let quantity = v.required("quantity", dto.quantity);
        if let Some(quantity) = quantity {
            check_quantity(&mut v, quantity);
        }

        v.finish()?;

        match (book_id, quantity) {
            (Some(book_id), Some(quantity)) => Ok(Self { book_id, quantity }),
            _ => Err(AppError::InternalError(
                "Cart validation passed with missing fields".to_string(),
            )),
        }
    }
}

/// Outcome of adding a book to the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum AddedCartItem {
    /// A new row was inserted.
    Created(CartItem),
    /// The caller already had the book; its quantity was incremented.
    Updated(CartItem),
}

#[derive(Debug, Clone)]
pub struct UpdateCartItemParams {
    /// Replaces the row's quantity.
    pub quantity: i32,
}

impl UpdateCartItemParams {
    pub fn try_from_dto(dto: UpdateCartItemDto) -> Result<Self, AppError> {
        let mut v = Validator::new();

        let quantity = v.required("quantity", dto.quantity);
        if let Some(quantity) = quantity {
            check_quantity(&mut v, quantity);
        }

        v.finish()?;

        quantity.map(|quantity| Self { quantity }).ok_or_else(|| {
            AppError::InternalError("Cart validation passed with missing quantity".to_string())
        })
    }
}
