//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs through `try_from_dto`, which is where
//! field validation happens.

pub mod api_key;
pub mod book;
pub mod cart;
pub mod order;
pub mod review;
pub mod user;
