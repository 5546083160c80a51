pub mod filter;
pub mod query;
pub mod validate;
