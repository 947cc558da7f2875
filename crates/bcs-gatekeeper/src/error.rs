//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
///
/// Content problems are never errors; they become violations in the report.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// The corpus index could not be built
    #[error("Index error: {0}")]
    Index(#[from] bcs_store::IndexError),
}
