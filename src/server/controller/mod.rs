//! HTTP request handlers.
//!
//! Handlers authenticate the caller where required, convert request DTOs into domain
//! parameters, call the matching service and convert the result back into a response DTO.

pub mod board;
pub mod user;
