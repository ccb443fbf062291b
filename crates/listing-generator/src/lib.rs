//! Synthetic listing generator.
//!
//! This crate produces internally-consistent listing documents from a
//! validated [`Catalog`](seed_core::Catalog) of lookup tables. The generator
//! uses a seeded RNG so runs with the same seed and catalog produce the same
//! data.
//!
//! # Architecture
//!
//! ```text
//! Catalog (lookup tables)
//!        │
//!        ▼
//! ┌────────────────────┐
//! │  ListingGenerator  │
//! │                    │
//! │  - seed            │
//! │  - rng (StdRng)    │
//! │  - index           │
//! └─────────┬──────────┘
//!           │
//!           ▼
//!     Listing { _id, host, address, reviews, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use listing_generator::ListingGenerator;
//! use seed_core::Catalog;
//!
//! let mut generator = ListingGenerator::new(Catalog::builtin(), 42);
//! let listings: Vec<_> = generator.listings(10).collect();
//! assert_eq!(listings.len(), 10);
//! ```

pub mod generator;
pub mod sample;

// Re-exports for convenience
pub use generator::{ListingGenerator, ListingIterator};
