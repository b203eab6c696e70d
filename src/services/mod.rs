//! Services - remote data access

pub mod catalog;

pub use catalog::{CatalogClient, PageFetcher};
