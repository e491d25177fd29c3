//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same queries run against the
//! connection pool or inside a `DatabaseTransaction`.

pub mod board;
pub mod user;

#[cfg(test)]
mod test;
