pub use super::api_key::Entity as ApiKey;
pub use super::book::Entity as Book;
pub use super::cart_item::Entity as CartItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
