//! Service layer for business logic.
//!
//! Services sit between controllers and repositories. They take validated parameter types,
//! enforce the business rules that need database state (existence, ownership, stock), and
//! return domain models or `AppError`s carrying the HTTP status the controller will use.

pub mod auth;
pub mod book;
pub mod cart;
pub mod order;
pub mod review;

#[cfg(test)]
mod test;
