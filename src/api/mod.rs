//! API clients for external services
//!
//! - Catalog: the remote VOD catalog document

pub mod catalog;

pub use catalog::{CatalogClient, CatalogError};
