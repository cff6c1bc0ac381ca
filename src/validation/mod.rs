//! Input validation before the cleaning pass runs

pub mod schema;

pub use schema::*;
