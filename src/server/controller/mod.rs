//! HTTP request handlers.
//!
//! Controllers extract path, query and body input, turn request DTOs into validated
//! parameters, call the matching service and convert domain models back into DTOs.
//! Rejected extractors are mapped to `AppError::BadRequest` so every failure carries
//! the same `{"error": ...}` body.

pub mod coach;
pub mod health;
pub mod player;
pub mod team;

#[cfg(test)]
mod test;
