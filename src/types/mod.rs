//! Core data types and structures

pub mod artifact;
pub mod report;

pub use artifact::*;
pub use report::*;
