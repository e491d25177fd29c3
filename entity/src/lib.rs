//! SeaORM entity definitions for the board database.

pub mod prelude;

pub mod board;
pub mod user;
