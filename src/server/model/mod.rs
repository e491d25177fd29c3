//! Domain models and operation parameter types.
//!
//! Domain models are produced by the data layer from SeaORM entities and consumed by
//! services and controllers. Parameter types carry the inputs of a single operation
//! from the controller into the service layer.

pub mod board;
pub mod user;
