//! Client for the experiment tracker's artifact store

pub mod client;

pub use client::*;
