//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! directly through SeaORM, bypassing the server's validation, so tests can also set up
//! states the API would refuse (for example a book with zero stock).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let book = factory::book::BookFactory::new(&db).stock(2).price(9.5).build().await?;
//! let item = factory::cart_item::create_cart_item(&db, user.id, book.id, 1).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities (standard or admin)
//! - `book` - Create catalog entries
//! - `cart_item` - Create cart rows
//! - `order` - Create orders with item snapshots
//! - `review` - Create book reviews
//! - `helpers` - Unique id generation

pub mod book;
pub mod cart_item;
pub mod helpers;
pub mod order;
pub mod review;
pub mod user;

pub use book::create_book;
pub use cart_item::create_cart_item;
pub use order::create_order;
pub use review::create_review;
pub use user::{create_admin, create_user};
