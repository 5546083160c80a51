//! Wire-level request and response shapes for the JSON API.
//!
//! All DTOs serialize with camelCase field names. Request DTOs keep every field
//! optional so the controller layer can report a missing required field as a
//! 400 naming that field instead of a generic deserialization failure.

pub mod api;
pub mod coach;
pub mod player;
pub mod team;
