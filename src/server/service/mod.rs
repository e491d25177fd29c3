//! Business logic layer.
//!
//! Services enforce the rules that sit between HTTP handlers and repositories:
//! duplicate email checks, credential verification, board ownership and the ordering
//! of deletes when a user withdraws. They accept and return domain models, never DTOs.

pub mod board;
pub mod user;
