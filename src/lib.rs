//! Course recommendation library for `career-guide`
//!
//! Holds the configuration documents, the tiered recommendation engine,
//! the admin editing operations and report generation used by the
//! `careerguide` CLI.

pub mod core;
pub mod logger;

pub use self::core::*;
