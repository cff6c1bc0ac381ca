//! The cleaning transform: price filter, date normalization, geo filter

pub mod cleaner;
pub mod dates;

pub use cleaner::*;
pub use dates::*;
