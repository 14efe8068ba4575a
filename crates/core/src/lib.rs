//! Core types and configuration for launchwatch
//!
//! This crate contains the domain types shared across all other crates.

pub mod config;
pub mod constants;
mod env_config;
mod error;
mod launch;
mod timestamp;

pub use config::AppConfig;
pub use error::*;
pub use launch::*;
pub use timestamp::{format_display, from_storage, parse_api_timestamp, to_storage};
