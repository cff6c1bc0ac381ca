//! In-memory tabular data with CSV read/write

pub mod frame;

pub use frame::*;
