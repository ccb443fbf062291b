//! Core types for the listing-seed tool.
//!
//! This crate defines the synthetic listing document model and the `Catalog`
//! of lookup tables the generator samples from. The catalog ships with a
//! built-in default matching the demo dataset, and can be overridden from a
//! YAML file.

pub mod catalog;
pub mod listing;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, CityRecord};
pub use listing::{Address, Host, Images, Listing, Location, Review, ReviewScores};
