//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let player = fixture::player::entity();
//!
//! // Create with custom fields
//! let player = fixture::player::entity_builder()
//!     .name("James")
//!     .build();
//! ```

pub mod coach;
pub mod player;
pub mod team;
