use crate::seed::SeedError;
use std::io;

/// Unified error type for the gradebook service.
///
/// Resolvers surface `StoreError` directly as GraphQL errors; this type
/// covers everything around them: configuration, seeding and the server.
#[derive(Debug, thiserror::Error)]
pub enum GradebookError {
    /// Errors related to IO operations, including binding the listener
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors reading the seed files
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Errors related to serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for operations that can result in a GradebookError
pub type GradebookResult<T> = Result<T, GradebookError>;
