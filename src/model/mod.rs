//! Request and response DTOs for the HTTP API.
//!
//! These are the shapes that cross the wire: every field is serialized in camelCase and
//! every type derives `ToSchema` so it appears in the generated OpenAPI document. Request
//! DTOs keep their fields optional so that missing values surface as validation messages
//! in the error envelope instead of a bare deserialization failure.

pub mod api;
pub mod book;
pub mod cart;
pub mod order;
pub mod review;
pub mod user;
