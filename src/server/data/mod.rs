//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. All database
//! queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Repositories that take part in order placement (`BookRepository`, `OrderRepository`) are
//! generic over [`sea_orm::ConnectionTrait`] so the same code runs against the pool or an
//! open transaction.

pub mod api_key;
pub mod book;
pub mod cart_item;
pub mod order;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
