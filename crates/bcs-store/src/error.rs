//! Store error types

use bcs_domain::{CodeAddress, Tier};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort building the corpus index
#[derive(Error, Debug)]
pub enum IndexError {
    /// The corpus root does not exist or cannot be read
    #[error("Corpus root not found or unreadable: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The default-tier link could not be read or changed
    #[error("Default tier error: {0}")]
    DefaultTier(String),

    /// I/O error outside the tolerant walk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from resolving an address to tier files
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No file of any tier exists for the address
    #[error("Code not found: {0}")]
    CodeNotFound(CodeAddress),

    /// The address exists but not in the requested tier
    #[error("Code {address} exists but has no {tier} tier")]
    TierNotFound {
        /// Requested address
        address: CodeAddress,
        /// Requested tier
        tier: Tier,
    },
}
