//! Request processing error types.

use crate::catalogue::CatalogueError;
use crate::routing::RoutingError;

/// Why a single declaration was skipped during ingest.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The entry isn't a well-formed stop or bus declaration
    #[error("malformed declaration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The catalogue refused the declaration
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

/// Errors that stop a whole document from being processed.
///
/// Problems with individual declarations or queries never surface here:
/// declarations are skipped and queries are answered with an error message.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The input is not a valid request document, or output failed to encode
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The routing graph could not be built
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),
}
