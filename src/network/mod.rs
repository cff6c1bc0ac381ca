//! HTTP plumbing shared by the artifact client

pub mod retry;

pub use retry::*;
