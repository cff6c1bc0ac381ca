//! Error types for the cleaning step

pub mod cleaner_error;

pub use cleaner_error::*;
