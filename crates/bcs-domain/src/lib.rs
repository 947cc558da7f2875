//! BCS Domain Layer
//!
//! This crate contains the value types shared by every other layer of the
//! Bash Coding Standard tooling. It performs no I/O.
//!
//! ## Key Concepts
//!
//! - **CodeAddress**: a parsed `BCS####` identifier (section / rule / subrule)
//! - **Tier**: compression level of a rule document (complete → rulet)
//! - **RuleFile**: a tier document discovered on disk
//! - **ValidationViolation**: a structural deviation found in the corpus
//!
//! ## Architecture
//!
//! - Pure value types and parsing only
//! - Filesystem scanning lives in `bcs-store`
//! - Validation rules live in `bcs-gatekeeper`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod rule_file;
pub mod tier;
pub mod violation;

// Re-exports for convenience
pub use code::{CodeAddress, Granularity, ParseError, CODE_PREFIX};
pub use rule_file::RuleFile;
pub use tier::Tier;
pub use violation::{ValidationViolation, ViolationKind};
