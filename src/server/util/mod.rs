//! Small helpers shared across the server layers.

pub mod api_key;
pub mod extract;
pub mod password;
pub mod validation;
