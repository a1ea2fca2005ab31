//! Data models for `career-guide`

pub mod catalog;
pub mod mapping;

pub use catalog::{Catalog, DocumentKind, MinScore, NameList};
pub use mapping::Mapping;
