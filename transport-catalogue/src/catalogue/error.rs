//! Catalogue error types.

use crate::domain::DomainError;

/// Errors from adding entities to the catalogue.
///
/// Each error rejects only the declaration that caused it; the catalogue
/// is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    /// A referenced stop was never declared
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A bus was declared without any stops
    #[error("bus {0} has no stops")]
    EmptyRoute(String),

    /// The declared value itself is invalid
    #[error(transparent)]
    Domain(#[from] DomainError),
}
