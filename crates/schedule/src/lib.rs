//! Schedule fetcher for upcoming rocket launches.
//!
//! One GET against the Launch Library `launch/upcoming` endpoint per run,
//! decoded into typed launch records.

mod api_types;
pub mod client;
pub mod error;
mod window;

pub use client::ScheduleClient;
pub use error::FetchError;
pub use window::FetchWindow;

#[cfg(test)]
mod tests;
