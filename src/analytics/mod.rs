//! Seizure analytics: range filtering, trend, frequency buckets,
//! distributions and averages used by the dashboard and reports.

pub mod aggregates;
pub mod types;

pub use aggregates::*;
pub use types::*;
