//! Storage layer for launchwatch
//!
//! A single SQLite table of previously observed (name, date) pairs.

pub mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
mod traits;

pub use error::StorageError;
pub use storage::Storage;
pub use traits::LaunchStore;
