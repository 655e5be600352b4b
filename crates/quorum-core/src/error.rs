//! Repository-level error types.

use thiserror::Error;

/// Errors surfaced by the storage gateway and the repositories built on it.
///
/// Missing rows are not errors: finders return `Ok(None)` or an empty list.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Row decoding failed: {0}")]
    Decode(String),
}
