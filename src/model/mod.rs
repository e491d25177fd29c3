//! Data transfer objects exchanged with HTTP clients.
//!
//! Request DTOs carry their validation rules; response DTOs never expose stored
//! credentials.

pub mod api;
pub mod board;
pub mod user;
pub mod validation;
