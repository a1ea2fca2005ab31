//! Core library: documents, recommendation, administration and reports

pub mod admin;
pub mod config;
pub mod engine;
pub mod models;
pub mod query;
pub mod report;
pub mod store;

/// Returns the current version of the `career-guide` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
