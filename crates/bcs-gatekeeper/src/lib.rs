//! BCS Gatekeeper
//!
//! Validates a corpus index against the structural invariants of the tier tree.
//!
//! The Gatekeeper checks:
//! - Tier completeness (complete, summary and abstract for every address)
//! - Code uniqueness
//! - Naming conventions
//! - Section-count consistency
//! - Embedded code markers
//!
//! Every check runs on every call; the report lists all violations at once.
//!
//! # Examples
//!
//! ```no_run
//! use bcs_gatekeeper::{Gatekeeper, ValidationConfig};
//! use bcs_store::IndexConfig;
//!
//! let gatekeeper = Gatekeeper::new(ValidationConfig::default());
//! let report = gatekeeper.validate_root(&IndexConfig::new("data")).unwrap();
//! for violation in &report.violations {
//!     println!("{}", violation);
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod markers;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, ValidationReport};
