//! Error types for the MongoDB populator.

use thiserror::Error;

/// Errors that can occur during MongoDB population.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// MongoDB connection or query error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// BSON serialization error.
    #[error("BSON error: {0}")]
    Bson(#[from] bson::ser::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
