//! Session access and request authorization.

pub mod auth;
pub mod session;
