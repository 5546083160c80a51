//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait`, so services can hand it either the
//! connection pool or an open transaction.

pub mod coach;
pub mod player;
pub mod team;

#[cfg(test)]
mod test;
