//! Core viewer configuration

pub mod config;

pub use config::{MaterialLookup, ViewerConfig};
