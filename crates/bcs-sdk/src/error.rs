//! Error types for the BCS SDK.

use bcs_domain::{CodeAddress, ParseError, Tier};
use bcs_store::{IndexError, ResolveError};
use std::path::PathBuf;
use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// Input token is not a BCS code
    #[error(transparent)]
    MalformedCode(#[from] ParseError),

    /// No file of any tier exists for the code
    #[error("Code not found: {0}")]
    CodeNotFound(CodeAddress),

    /// The code exists but not in the requested tier
    #[error("Code {address} exists but has no {tier} tier")]
    TierNotFound {
        /// Requested address
        address: CodeAddress,
        /// Requested tier
        tier: Tier,
    },

    /// Path is not a tier file known to the index
    #[error("Not an indexed tier file: {}", .0.display())]
    PathNotIndexed(PathBuf),

    /// Search pattern failed to compile
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),

    /// Reading a resolved file failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Corpus index could not be built
    #[error(transparent)]
    Index(#[from] IndexError),
}

impl SdkError {
    /// Whether this error means "does not exist" rather than bad input
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SdkError::CodeNotFound(_) | SdkError::TierNotFound { .. } | SdkError::PathNotIndexed(_)
        )
    }
}

impl From<ResolveError> for SdkError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::CodeNotFound(address) => SdkError::CodeNotFound(address),
            ResolveError::TierNotFound { address, tier } => SdkError::TierNotFound { address, tier },
        }
    }
}

impl From<regex::Error> for SdkError {
    fn from(e: regex::Error) -> Self {
        SdkError::InvalidPattern(e.to_string())
    }
}
